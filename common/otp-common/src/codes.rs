//! Each board identity dimension is an enum of every value the tables know about, paired with
//! the [`Code`] that represents it in the revision register.
//!
//! The pairing is not a bijection over bit patterns. Some table entries have no known bit
//! pattern at all (`256/512`, `Qisda`, revision `2.0`, and `unknown` in every dimension) and are
//! represented by a [`Code::Sentinel`] instead; they can only arise from the legacy revision
//! table. Conversely, the 8-bit board type space is only partially populated, so most board type
//! patterns have no entry and fail to decode.

use crate::bits::BitString;
use crate::OtpError;
use core::fmt;

/// The encoded form of one dimension of the board identity.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Code {
    /// A bit pattern as it appears in the revision register.
    Bits(BitString),
    /// Marker for a table entry whose bit pattern is not known.
    Sentinel(&'static str),
}

impl Code {
    /// Shared by the `unknown` entry of every table.
    pub const UNKNOWN: Code = Code::Sentinel("");

    pub const fn bits(value: u32, width: u8) -> Code {
        Code::Bits(BitString::new(value, width))
    }
}

impl From<BitString> for Code {
    fn from(bits: BitString) -> Self {
        Code::Bits(bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Code::Bits(bits) => write!(f, "{bits}"),
            Code::Sentinel(s) => f.write_str(s),
        }
    }
}

/// A dimension of the board identity and its code table.
pub trait CodeTable: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    /// Human readable name of the dimension, used in errors.
    const DIMENSION: &'static str;
    /// Width of the bit patterns in this dimension.
    const WIDTH: u8;
    /// Every value with its code. Codes are unique within a table.
    const ENTRIES: &'static [(Self, Code)];

    fn name(self) -> &'static str;

    fn code(self) -> Code;

    /// Reverse lookup. Fails for codes that have no table entry.
    fn from_code(code: Code) -> Result<Self, OtpError> {
        Self::ENTRIES
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(value, _)| *value)
            .ok_or(OtpError::UnknownCode {
                dimension: Self::DIMENSION,
                code,
            })
    }

    fn from_name(name: &str) -> Result<Self, OtpError> {
        Self::ENTRIES
            .iter()
            .find(|(value, _)| value.name() == name)
            .map(|(value, _)| *value)
            .ok_or_else(|| OtpError::UnknownName {
                dimension: Self::DIMENSION,
                name: name.to_string(),
            })
    }
}

macro_rules! code_table {
    (@code $width:literal, bits, $value:literal) => {
        Code::bits($value, $width)
    };
    (@code $width:literal, sentinel, $value:literal) => {
        Code::Sentinel($value)
    };
    (
        $(#[$meta:meta])*
        $ty:ident($dimension:literal, $width:literal) {
            $($(#[$vmeta:meta])* $variant:ident => $name:literal: $kind:ident $value:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
        pub enum $ty {
            $($(#[$vmeta])* $variant,)*
        }

        impl CodeTable for $ty {
            const DIMENSION: &'static str = $dimension;
            const WIDTH: u8 = $width;
            const ENTRIES: &'static [(Self, Code)] = &[
                $(($ty::$variant, code_table!(@code $width, $kind, $value)),)*
            ];

            fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)*
                }
            }

            fn code(self) -> Code {
                match self {
                    $($ty::$variant => code_table!(@code $width, $kind, $value),)*
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

code_table! {
    /// Installed RAM, in megabytes.
    MemorySize("memory size", 3) {
        Mb256 => "256": bits 0b000,
        Mb512 => "512": bits 0b001,
        Mb1024 => "1024": bits 0b010,
        Unknown3 => "unknown_3": bits 0b011,
        Unknown4 => "unknown_4": bits 0b100,
        Unknown5 => "unknown_5": bits 0b101,
        Unknown6 => "unknown_6": bits 0b110,
        Unknown7 => "unknown_7": bits 0b111,
        /// Legacy boards shipped with either size under the same revision code.
        Mb256Or512 => "256/512": sentinel "EITHER",
        Unknown => "unknown": sentinel "",
    }
}

code_table! {
    Manufacturer("manufacturer", 4) {
        SonyUk => "Sony UK": bits 0b0000,
        Egoman => "Egoman": bits 0b0001,
        Embest => "Embest": bits 0b0010,
        SonyJapan => "Sony Japan": bits 0b0011,
        Embest2 => "Embest #2": bits 0b0100,
        Stadium => "Stadium": bits 0b0101,
        Unknown6 => "unknown_6": bits 0b0110,
        Unknown7 => "unknown_7": bits 0b0111,
        Unknown8 => "unknown_8": bits 0b1000,
        Unknown9 => "unknown_9": bits 0b1001,
        UnknownA => "unknown_a": bits 0b1010,
        UnknownB => "unknown_b": bits 0b1011,
        UnknownC => "unknown_c": bits 0b1100,
        UnknownD => "unknown_d": bits 0b1101,
        UnknownE => "unknown_e": bits 0b1110,
        UnknownF => "unknown_f": bits 0b1111,
        /// Only seen on legacy boards; no new-style code is known.
        Qisda => "Qisda": sentinel "QISD",
        Unknown => "unknown": sentinel "",
    }
}

code_table! {
    Processor("processor", 4) {
        Bcm2835 => "BCM2835": bits 0b0000,
        Bcm2836 => "BCM2836": bits 0b0001,
        Bcm2837 => "BCM2837": bits 0b0010,
        Unknown3 => "unknown_3": bits 0b0011,
        Unknown4 => "unknown_4": bits 0b0100,
        Unknown5 => "unknown_5": bits 0b0101,
        Unknown6 => "unknown_6": bits 0b0110,
        Unknown7 => "unknown_7": bits 0b0111,
        Unknown8 => "unknown_8": bits 0b1000,
        Unknown9 => "unknown_9": bits 0b1001,
        UnknownA => "unknown_a": bits 0b1010,
        UnknownB => "unknown_b": bits 0b1011,
        UnknownC => "unknown_c": bits 0b1100,
        UnknownD => "unknown_d": bits 0b1101,
        UnknownE => "unknown_e": bits 0b1110,
        UnknownF => "unknown_f": bits 0b1111,
        Unknown => "unknown": sentinel "",
    }
}

code_table! {
    /// Board model. Printed after "Raspberry Pi Model".
    BoardType("board type", 8) {
        A => "A": bits 0x00,
        B => "B": bits 0x01,
        APlus => "A+": bits 0x02,
        BPlus => "B+": bits 0x03,
        Model2B => "2B": bits 0x04,
        Alpha => "Alpha": bits 0x05,
        Cm1 => "CM1": bits 0x06,
        /// Not in known use.
        Unknown7 => "Unknown_7": bits 0x07,
        Model3B => "3B": bits 0x08,
        Zero => "Zero": bits 0x09,
        Cm3 => "CM3": bits 0x0a,
        /// Not in known use.
        UnknownB => "Unknown_b": bits 0x0b,
        ZeroW => "Zero W": bits 0x0c,
        Model3BPlus => "3B+": bits 0x0d,
        Model3APlus => "3A+": bits 0x0e,
        /// Not in known use.
        UnknownF => "unknown_f": bits 0x0f,
        Unknown => "unknown": sentinel "",
    }
}

code_table! {
    BoardRevision("board revision", 4) {
        Rev10 => "1.0": bits 0b0000,
        Rev11 => "1.1": bits 0b0001,
        Rev12 => "1.2": bits 0b0010,
        Rev13 => "1.3": bits 0b0011,
        Unknown4 => "unknown_4": bits 0b0100,
        Unknown5 => "unknown_5": bits 0b0101,
        Unknown6 => "unknown_6": bits 0b0110,
        Unknown7 => "unknown_7": bits 0b0111,
        Unknown8 => "unknown_8": bits 0b1000,
        Unknown9 => "unknown_9": bits 0b1001,
        UnknownA => "unknown_a": bits 0b1010,
        UnknownB => "unknown_b": bits 0b1011,
        UnknownC => "unknown_c": bits 0b1100,
        UnknownD => "unknown_d": bits 0b1101,
        UnknownE => "unknown_e": bits 0b1110,
        UnknownF => "unknown_f": bits 0b1111,
        /// Only seen on legacy boards; no new-style code is known.
        Rev20 => "2.0": sentinel " 2.0",
        Unknown => "unknown": sentinel "",
    }
}
