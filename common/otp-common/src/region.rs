use core::fmt;

macro_rules! regions {
    ($($(#[$meta:meta])* $variant:ident = $index:literal => $name:literal,)*) => {
        /// A named 32-bit OTP register, identified by its index in the dump.
        ///
        /// Indices 0 through 7 are never reported by the dump tool and have no name.
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(u8)]
        pub enum Region {
            $($(#[$meta])* $variant = $index,)*
        }

        impl Region {
            /// Every named region, in index order.
            pub const ALL: &'static [Region] = &[$(Region::$variant,)*];

            pub const fn index(self) -> u8 {
                self as u8
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $(Region::$variant => $name,)*
                }
            }

            pub const fn from_index(index: u8) -> Option<Region> {
                match index {
                    $($index => Some(Region::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

regions! {
    Unknown8 = 8 => "unknown_8",
    Unknown9 = 9 => "unknown_9",
    Unknown10 = 10 => "unknown_10",
    Unknown11 = 11 => "unknown_11",
    Unknown12 = 12 => "unknown_12",
    Unknown13 = 13 => "unknown_13",
    Unknown14 = 14 => "unknown_14",
    Unknown15 = 15 => "unknown_15",
    /// Usually `00280000`; `02428000` and `06c28000` have also been seen.
    Unknown16 = 16 => "unknown_16",
    Bootmode = 17 => "bootmode",
    /// Backup of [`Region::Bootmode`]; the two should always agree.
    BootmodeCopy = 18 => "bootmode_copy",
    Unknown19 = 19 => "unknown_19",
    Unknown20 = 20 => "unknown_20",
    Unknown21 = 21 => "unknown_21",
    Unknown22 = 22 => "unknown_22",
    Unknown23 = 23 => "unknown_23",
    Unknown24 = 24 => "unknown_24",
    Unknown25 = 25 => "unknown_25",
    Unknown26 = 26 => "unknown_26",
    /// Varies between boards, e.g. `5050` (1B, 2B 1.1), `7373` (2B 1.2), `2727` (CM3).
    Unknown27 = 27 => "unknown_27",
    SerialNumber = 28 => "serial_number",
    /// Bitwise complement of [`Region::SerialNumber`].
    SerialNumberInverted = 29 => "serial_number_inverted",
    RevisionNumber = 30 => "revision_number",
    BatchNumber = 31 => "batch_number",
    Overclock = 32 => "overclock",
    Unknown33 = 33 => "unknown_33",
    Unknown34 = 34 => "unknown_34",
    Unknown35 = 35 => "unknown_35",
    CustomerOne = 36 => "customer_one",
    CustomerTwo = 37 => "customer_two",
    CustomerThree = 38 => "customer_three",
    CustomerFour = 39 => "customer_four",
    CustomerFive = 40 => "customer_five",
    CustomerSix = 41 => "customer_six",
    CustomerSeven = 42 => "customer_seven",
    CustomerEight = 43 => "customer_eight",
    Unknown44 = 44 => "unknown_44",
    CodecKeyOne = 45 => "codec_key_one",
    CodecKeyTwo = 46 => "codec_key_two",
    Unknown47 = 47 => "unknown_47",
    Unknown48 = 48 => "unknown_48",
    Unknown49 = 49 => "unknown_49",
    Unknown50 = 50 => "unknown_50",
    Unknown51 = 51 => "unknown_51",
    Unknown52 = 52 => "unknown_52",
    Unknown53 = 53 => "unknown_53",
    Unknown54 = 54 => "unknown_54",
    Unknown55 = 55 => "unknown_55",
    Unknown56 = 56 => "unknown_56",
    Unknown57 = 57 => "unknown_57",
    Unknown58 = 58 => "unknown_58",
    Unknown59 = 59 => "unknown_59",
    Unknown60 = 60 => "unknown_60",
    Unknown61 = 61 => "unknown_61",
    Unknown62 = 62 => "unknown_62",
    Unknown63 = 63 => "unknown_63",
    /// Second (low) half of the MAC address.
    MacAddressTwo = 64 => "mac_address_two",
    /// First (high) half of the MAC address.
    MacAddressOne = 65 => "mac_address_one",
    AdvancedBoot = 66 => "advanced_boot",
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Region {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Region::from_index(value).ok_or(())
    }
}
