use crate::bits::BitString;
use crate::{RawValue, Result};

/// Printed in place of a MAC address when none has been programmed.
pub const NO_MAC: &str = "None";

/// Render bits as `"<decimal> (<hex>) <bits>"`, or without the bits.
pub fn pretty_bits(bits: BitString, include_binary: bool) -> String {
    let value = bits.value();
    if include_binary {
        format!("{value} ({value:#x}) {bits}")
    } else {
        format!("{value} ({value:#x})")
    }
}

/// [`pretty_bits`] over binary text. Fails if `bits` is not binary.
pub fn pretty(bits: &str, include_binary: bool) -> Result<String> {
    Ok(pretty_bits(BitString::parse(bits)?, include_binary))
}

/// Colon separated MAC address from the two MAC registers, or [`NO_MAC`] if the first is zero.
pub fn format_mac(part_one: RawValue, part_two: RawValue) -> String {
    if part_one.value() == 0 {
        return NO_MAC.to_string();
    }
    let digits = format!("{part_one}{part_two}");
    (0..12)
        .step_by(2)
        .map(|i| &digits[i..i + 2])
        .collect::<Vec<_>>()
        .join(":")
}
