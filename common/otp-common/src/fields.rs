use crate::bits::BitRange;
use crate::{OtpError, Region};
use core::fmt;
use core::str::FromStr;

/// A named bit field within one register.
pub trait Field: Copy + Eq + fmt::Debug + FromStr<Err = OtpError> + 'static {
    /// Register the field lives in.
    const REGION: Region;
    /// Every field of the register.
    const ALL: &'static [Self];

    fn name(self) -> &'static str;
    fn range(self) -> BitRange;
}

macro_rules! fields {
    (
        $(#[$meta:meta])*
        $ty:ident in $region:ident {
            $($(#[$vmeta:meta])* $variant:ident => $name:literal [$start:literal, $end:literal],)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
        pub enum $ty {
            $($(#[$vmeta])* $variant,)*
        }

        impl Field for $ty {
            const REGION: Region = Region::$region;
            const ALL: &'static [Self] = &[$($ty::$variant,)*];

            fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)*
                }
            }

            fn range(self) -> BitRange {
                match self {
                    $($ty::$variant => const { BitRange::new($start, $end) },)*
                }
            }
        }

        impl FromStr for $ty {
            type Err = OtpError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok($ty::$variant),)*
                    _ => Err(OtpError::UnknownField {
                        region: Region::$region,
                        name: s.to_string(),
                    }),
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

fields! {
    /// Region 16. Purpose unknown.
    Unknown16Field in Unknown16 {
        Bits0To15 => "bits_0_to_15" [16, 32],
        /// Only `0x28` seen so far.
        Bits16To23 => "bits_16_to_23" [8, 16],
        /// `0x24` and `0x6c` seen so far.
        Bits24To31 => "bits_24_to_31" [0, 8],
    }
}

fields! {
    /// Region 17, the boot mode register. Region 18 is a backup with the same layout.
    BootmodeField in Bootmode {
        /// Unknown; reportedly the board will not boot with this set.
        Bit0 => "bit_0" [31, 32],
        /// Oscillator frequency is 19.2MHz.
        Bit1 => "bit_1" [30, 31],
        /// Unknown; reportedly the board will not boot with this set.
        Bit2 => "bit_2" [29, 30],
        /// Pull-ups enabled on the SDIO pins.
        Bit3 => "bit_3" [28, 29],
        Bits4To18 => "bits_4_to_18" [13, 28],
        /// GPIO boot mode enabled.
        Bit19 => "bit_19" [12, 13],
        /// GPIO bank checked for GPIO boot mode.
        Bit20 => "bit_20" [11, 12],
        /// Booting from SD card enabled.
        Bit21 => "bit_21" [10, 11],
        /// Bank to boot from.
        Bit22 => "bit_22" [9, 10],
        Bits26To27 => "bits_26_to_27" [7, 9],
        /// Unknown; set on the Compute Module 3.
        Bit25 => "bit_25" [6, 7],
        Bits23To24 => "bits_23_to_24" [4, 6],
        /// USB device boot enabled.
        Bit28 => "bit_28" [3, 4],
        /// USB host boot (Ethernet and mass storage) enabled.
        Bit29 => "bit_29" [2, 3],
        Bits30To31 => "bits_30_31" [0, 2],
    }
}

fields! {
    /// Region 27. Purpose unknown; the low half is usually two repeated bytes.
    Unknown27Field in Unknown27 {
        Bits0To15 => "bits_0_to_15" [16, 32],
        Bits16To31 => "bits_16_to_31" [0, 16],
    }
}

fields! {
    /// Region 30, the board revision register.
    RevisionField in RevisionNumber {
        /// Old-style revision code, meaningful only when [`RevisionField::NewFlag`] is clear.
        LegacyBoardRevision => "legacy_board_revision" [27, 32],
        BoardRevision => "board_revision" [28, 32],
        BoardType => "board_type" [20, 28],
        Processor => "processor" [16, 20],
        Manufacturer => "manufacturer" [12, 16],
        MemorySize => "memory_size" [9, 12],
        /// Set if the register uses the new-style layout.
        NewFlag => "new_flag" [8, 9],
        Bits24To31 => "bits_24_to_31" [0, 8],
    }
}

fields! {
    /// Region 32.
    OverclockField in Overclock {
        OvervoltProtection => "overvolt_protection" [31, 32],
        Bits0To30 => "bits_0_to_30" [0, 31],
    }
}

fields! {
    /// Region 66, the advanced boot register.
    AdvancedBootField in AdvancedBoot {
        /// GPIO used as the ETH_CLK output pin.
        Bits0To6 => "bits_0_to_6" [25, 32],
        /// ETH_CLK output pin enabled.
        Bit7 => "bit_7" [24, 25],
        /// GPIO used as the LAN_RUN output pin.
        Bits8To14 => "bits_8_to_14" [17, 24],
        /// LAN_RUN output pin enabled.
        Bit15 => "bit_15" [16, 17],
        Bits16To23 => "bits_16_to_23" [8, 16],
        /// Extended USB hub timeout; see [`HubTimeout`].
        Bit24 => "bit_24" [7, 8],
        /// ETH_CLK frequency; see [`EthClkFrequency`].
        Bit25 => "bit_25" [6, 7],
        Bits26To31 => "bits_26_to_31" [0, 6],
    }
}

/// USB hub timeout selected by [`AdvancedBootField::Bit24`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HubTimeout {
    TwoSeconds,
    FiveSeconds,
}

impl HubTimeout {
    pub fn from_bit(set: bool) -> Self {
        if set {
            HubTimeout::FiveSeconds
        } else {
            HubTimeout::TwoSeconds
        }
    }
}

impl fmt::Display for HubTimeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HubTimeout::TwoSeconds => f.write_str("2 Seconds"),
            HubTimeout::FiveSeconds => f.write_str("5 Seconds"),
        }
    }
}

/// ETH_CLK output frequency selected by [`AdvancedBootField::Bit25`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum EthClkFrequency {
    Mhz25,
    Mhz24,
}

impl EthClkFrequency {
    pub fn from_bit(set: bool) -> Self {
        if set {
            EthClkFrequency::Mhz24
        } else {
            EthClkFrequency::Mhz25
        }
    }
}

impl fmt::Display for EthClkFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EthClkFrequency::Mhz25 => f.write_str("25MHz"),
            EthClkFrequency::Mhz24 => f.write_str("24MHz"),
        }
    }
}
