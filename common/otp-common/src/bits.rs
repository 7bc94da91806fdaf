//! Bit positions follow the dump's binary rendering: position 0 is the most significant bit of the
//! register and position 31 the least significant. A range `[start, end)` therefore reads left to
//! right in the 32-character binary string.

use crate::{OtpError, Result, REGISTER_BITS};
use core::fmt;

/// A half-open range `[start, end)` of bit positions within a register.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BitRange {
    start: u8,
    end: u8,
}

impl BitRange {
    /// The whole register.
    pub const FULL: BitRange = BitRange::new(0, REGISTER_BITS);

    /// Panics if the range is empty or extends past bit 31; in a `const` this is a compile error.
    pub const fn new(start: u8, end: u8) -> Self {
        assert!(start < end && end <= REGISTER_BITS, "invalid bit range");
        Self { start, end }
    }

    pub fn checked(start: u8, end: u8) -> Result<Self> {
        if start < end && end <= REGISTER_BITS {
            Ok(Self { start, end })
        } else {
            Err(OtpError::precondition(format!(
                "bit range [{start}, {end}) is not within a {REGISTER_BITS}-bit register"
            )))
        }
    }

    pub const fn start(self) -> u8 {
        self.start
    }

    pub const fn end(self) -> u8 {
        self.end
    }

    pub const fn width(self) -> u8 {
        self.end - self.start
    }

    pub const fn extract(self, value: u32) -> BitString {
        let width = self.width();
        let shifted = value >> (REGISTER_BITS - self.end) as u32;
        BitString {
            bits: shifted & mask(width),
            width,
        }
    }
}

const fn mask(width: u8) -> u32 {
    if width >= REGISTER_BITS {
        u32::MAX
    } else {
        (1u32 << width as u32) - 1
    }
}

/// Cut `[start, end)` out of `value`; fails if the range does not describe part of a register.
pub fn extract(value: u32, start: u8, end: u8) -> Result<BitString> {
    Ok(BitRange::checked(start, end)?.extract(value))
}

/// A fixed-width run of bits. Displays as binary text, most significant bit first, zero padded to
/// its width.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BitString {
    bits: u32,
    width: u8,
}

impl BitString {
    /// Panics if `bits` does not fit in `width` bits.
    pub const fn new(bits: u32, width: u8) -> Self {
        assert!(width > 0 && width <= REGISTER_BITS, "invalid bit string width");
        assert!(bits & !mask(width) == 0, "bits do not fit in width");
        Self { bits, width }
    }

    /// Parse binary text such as `"0101"`.
    pub fn parse(text: &str) -> Result<Self> {
        let width = text.len();
        if width == 0 || width > REGISTER_BITS as usize {
            return Err(OtpError::precondition(format!(
                "'{text}' is not a bit string of 1 to {REGISTER_BITS} bits"
            )));
        }
        let bits = u32::from_str_radix(text, 2)
            .ok()
            .filter(|_| text.bytes().all(|b| b == b'0' || b == b'1'))
            .ok_or_else(|| OtpError::precondition(format!("'{text}' is not valid binary")))?;
        Ok(Self {
            bits,
            width: width as u8,
        })
    }

    pub const fn value(self) -> u32 {
        self.bits
    }

    pub const fn width(self) -> u8 {
        self.width
    }

    /// Append `low` after `self`. `None` if the result would not fit in a register.
    pub fn concat(self, low: BitString) -> Option<BitString> {
        let width = self.width.checked_add(low.width)?;
        if width > REGISTER_BITS {
            return None;
        }
        Some(BitString {
            bits: (self.bits << low.width as u32) | low.bits,
            width,
        })
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.bits, width = self.width as usize)
    }
}
