use crate::bits::BitString;
use crate::codes::{BoardRevision, BoardType, Manufacturer, MemorySize, Processor};
use crate::codes::BoardRevision::{Rev10, Rev11, Rev12, Rev20};
use crate::codes::BoardType::{APlus, BPlus, Cm1, A, B};
use crate::codes::Manufacturer::{Egoman, Embest, Qisda, SonyUk};
use crate::codes::MemorySize::{Mb256, Mb256Or512, Mb512};

/// Width of the old-style revision code in the revision register.
pub const LEGACY_CODE_BITS: u8 = 5;

/// The board described by an old-style revision code.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LegacyRevision {
    pub memory_size: MemorySize,
    pub manufacturer: Manufacturer,
    pub processor: Processor,
    pub board_type: BoardType,
    pub board_revision: BoardRevision,
}

impl LegacyRevision {
    /// Used for codes missing from [`LEGACY_REVISIONS`].
    pub const DEFAULT: LegacyRevision = LegacyRevision {
        memory_size: MemorySize::Unknown,
        manufacturer: Manufacturer::Unknown,
        processor: Processor::Unknown,
        board_type: BoardType::Unknown,
        board_revision: BoardRevision::Unknown,
    };

    const fn new(
        memory_size: MemorySize,
        manufacturer: Manufacturer,
        board_type: BoardType,
        board_revision: BoardRevision,
    ) -> Self {
        Self {
            memory_size,
            manufacturer,
            // every old-style board is a BCM2835
            processor: Processor::Bcm2835,
            board_type,
            board_revision,
        }
    }

    /// Look up a 5-bit legacy code, falling back to [`LegacyRevision::DEFAULT`].
    pub fn lookup(code: BitString) -> LegacyRevision {
        if code.width() != LEGACY_CODE_BITS {
            return LegacyRevision::DEFAULT;
        }
        LEGACY_REVISIONS
            .iter()
            .find(|(c, _)| *c == code.value())
            .map(|(_, revision)| *revision)
            .unwrap_or(LegacyRevision::DEFAULT)
    }
}

/// Old-style revision codes and the boards they describe.
pub static LEGACY_REVISIONS: &[(u32, LegacyRevision)] = &[
    (0b00010, LegacyRevision::new(Mb256, Egoman, B, Rev10)),
    (0b00011, LegacyRevision::new(Mb256, Egoman, B, Rev10)),
    (0b00100, LegacyRevision::new(Mb256, SonyUk, B, Rev20)),
    (0b00101, LegacyRevision::new(Mb256, Qisda, B, Rev20)),
    (0b00110, LegacyRevision::new(Mb256, Egoman, B, Rev20)),
    (0b00111, LegacyRevision::new(Mb256, Egoman, A, Rev20)),
    (0b01000, LegacyRevision::new(Mb256, SonyUk, A, Rev20)),
    (0b01001, LegacyRevision::new(Mb256, Qisda, A, Rev20)),
    (0b01101, LegacyRevision::new(Mb512, Egoman, B, Rev20)),
    (0b01110, LegacyRevision::new(Mb512, SonyUk, B, Rev20)),
    (0b01111, LegacyRevision::new(Mb512, Egoman, B, Rev20)),
    (0b10000, LegacyRevision::new(Mb512, SonyUk, BPlus, Rev10)),
    (0b10001, LegacyRevision::new(Mb512, SonyUk, Cm1, Rev10)),
    (0b10010, LegacyRevision::new(Mb512, SonyUk, APlus, Rev11)),
    (0b10011, LegacyRevision::new(Mb512, Embest, BPlus, Rev12)),
    (0b10100, LegacyRevision::new(Mb512, Embest, Cm1, Rev10)),
    (0b10101, LegacyRevision::new(Mb256Or512, Embest, APlus, Rev11)),
];
