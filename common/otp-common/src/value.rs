use crate::bits::{BitRange, BitString};
use core::fmt;
use core::str::FromStr;

/// Number of hex digits in one register value.
pub const HEX_DIGITS: usize = 8;

/// The text of one register exactly as the dump tool printed it.
///
/// Always eight ASCII hex digits; letter case is kept as read so that raw renderings (such
/// as the MAC address) reproduce the dump.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RawValue {
    text: [u8; HEX_DIGITS],
    value: u32,
}

/// `text` was not exactly eight hexadecimal digits.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct NotHex;

impl RawValue {
    pub fn parse(text: &str) -> Result<Self, NotHex> {
        let bytes = text.as_bytes();
        if bytes.len() != HEX_DIGITS || !bytes.iter().all(u8::is_ascii_hexdigit) {
            return Err(NotHex);
        }
        let value = u32::from_str_radix(text, 16).map_err(|_| NotHex)?;
        let mut buf = [0u8; HEX_DIGITS];
        buf.copy_from_slice(bytes);
        Ok(Self { text: buf, value })
    }

    pub fn from_u32(value: u32) -> Self {
        let mut text = [0u8; HEX_DIGITS];
        text.copy_from_slice(format!("{value:08x}").as_bytes());
        Self { text, value }
    }

    pub fn as_str(&self) -> &str {
        // only ever constructed from ASCII hex digits
        core::str::from_utf8(&self.text).unwrap_or_default()
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn decimal(&self) -> String {
        self.value.to_string()
    }

    /// `0x` followed by eight lowercase hex digits.
    pub fn hex(&self) -> String {
        format!("{:#010x}", self.value)
    }

    /// `0o` followed by sixteen octal digits.
    pub fn octal(&self) -> String {
        format!("{:#018o}", self.value)
    }

    /// All 32 bits, most significant first.
    pub fn binary(&self) -> BitString {
        BitRange::FULL.extract(self.value)
    }

    pub fn extract(&self, range: BitRange) -> BitString {
        range.extract(self.value)
    }
}

impl FromStr for RawValue {
    type Err = NotHex;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RawValue::parse(s)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_bad_text() {
        assert_eq!(RawValue::parse("1234567"), Err(NotHex));
        assert_eq!(RawValue::parse("123456789"), Err(NotHex));
        assert_eq!(RawValue::parse("1234567g"), Err(NotHex));
        assert_eq!(RawValue::parse("+1234567"), Err(NotHex));
        assert_eq!(RawValue::parse(""), Err(NotHex));
    }

    #[test]
    fn test_renderings() {
        let raw = RawValue::parse("00A02082").expect("valid register text");
        assert_eq!(raw.as_str(), "00A02082");
        assert_eq!(raw.value(), 0x00a0_2082);
        assert_eq!(raw.decimal(), "10494082");
        assert_eq!(raw.hex(), "0x00a02082");
        assert_eq!(raw.octal(), "0o0000000050020202");
        assert_eq!(raw.octal().len(), 18);
        assert_eq!(
            raw.binary().to_string(),
            "00000000101000000010000010000010"
        );
    }

    #[test]
    fn test_max_value() {
        let raw = RawValue::parse("ffffffff").expect("valid register text");
        assert_eq!(raw.hex(), "0xffffffff");
        assert_eq!(raw.octal(), "0o0000037777777777");
        assert_eq!(raw.decimal(), "4294967295");
    }

    #[test]
    fn test_from_u32() {
        let raw = RawValue::from_u32(0x1234abcd);
        assert_eq!(raw.as_str(), "1234abcd");
        assert_eq!(raw, RawValue::parse("1234abcd").expect("valid register text"));
    }
}
