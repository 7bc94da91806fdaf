use crate::bits::BitString;
use crate::codes::{BoardRevision, BoardType, Code, CodeTable, Manufacturer, MemorySize, Processor};
use crate::fields::RevisionField;
use crate::legacy::LegacyRevision;
use crate::{OtpError, RegisterStore, Result};

/// Which layout the revision register uses.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RevisionScheme {
    /// Old-style: a 5-bit code indexing [`LEGACY_REVISIONS`](crate::legacy::LEGACY_REVISIONS).
    Legacy(BitString),
    /// New-style: each dimension is stored directly as a bit field.
    New,
}

impl RevisionScheme {
    /// Decide from the `new_flag` bit of the revision register.
    pub fn detect(store: &RegisterStore) -> Result<Self> {
        let flag = store.field(RevisionField::NewFlag)?;
        match (flag.width(), flag.value()) {
            (1, 0) => Ok(RevisionScheme::Legacy(
                store.field(RevisionField::LegacyBoardRevision)?,
            )),
            (1, 1) => Ok(RevisionScheme::New),
            _ => Err(OtpError::precondition(format!(
                "new revision flag '{flag}' is not a single bit"
            ))),
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, RevisionScheme::New)
    }
}

/// The encoded identity of the board a dump was taken from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BoardIdentity {
    pub memory: Code,
    pub manufacturer: Code,
    pub processor: Code,
    pub board_type: Code,
    pub revision: Code,
}

impl Default for BoardIdentity {
    /// All-zero codes.
    fn default() -> Self {
        Self {
            memory: Code::bits(0, MemorySize::WIDTH),
            manufacturer: Code::bits(0, Manufacturer::WIDTH),
            processor: Code::bits(0, Processor::WIDTH),
            board_type: Code::bits(0, BoardType::WIDTH),
            revision: Code::bits(0, BoardRevision::WIDTH),
        }
    }
}

impl From<LegacyRevision> for BoardIdentity {
    fn from(legacy: LegacyRevision) -> Self {
        Self {
            memory: legacy.memory_size.code(),
            manufacturer: legacy.manufacturer.code(),
            processor: legacy.processor.code(),
            board_type: legacy.board_type.code(),
            revision: legacy.board_revision.code(),
        }
    }
}

impl BoardIdentity {
    /// Decode the board identity from the revision register.
    pub fn resolve(store: &RegisterStore) -> Result<Self> {
        match RevisionScheme::detect(store)? {
            RevisionScheme::Legacy(code) => {
                let legacy = LegacyRevision::lookup(code);
                if legacy == LegacyRevision::DEFAULT {
                    tracing::debug!("legacy revision code {code} is not in the table");
                } else {
                    tracing::debug!("legacy revision code {code}");
                }
                Ok(legacy.into())
            }
            RevisionScheme::New => {
                tracing::debug!("new-style revision");
                Ok(Self {
                    memory: store.field(RevisionField::MemorySize)?.into(),
                    manufacturer: store.field(RevisionField::Manufacturer)?.into(),
                    processor: store.field(RevisionField::Processor)?.into(),
                    board_type: store.field(RevisionField::BoardType)?.into(),
                    revision: store.field(RevisionField::BoardRevision)?.into(),
                })
            }
        }
    }

    pub fn memory_size(&self) -> Result<MemorySize> {
        MemorySize::from_code(self.memory)
    }

    pub fn manufacturer(&self) -> Result<Manufacturer> {
        Manufacturer::from_code(self.manufacturer)
    }

    pub fn processor(&self) -> Result<Processor> {
        Processor::from_code(self.processor)
    }

    pub fn board_type(&self) -> Result<BoardType> {
        BoardType::from_code(self.board_type)
    }

    pub fn board_revision(&self) -> Result<BoardRevision> {
        BoardRevision::from_code(self.revision)
    }

    /// Reverse-map all five codes at once.
    pub fn names(&self) -> Result<BoardNames> {
        Ok(BoardNames {
            memory_size: self.memory_size()?,
            manufacturer: self.manufacturer()?,
            processor: self.processor()?,
            board_type: self.board_type()?,
            board_revision: self.board_revision()?,
        })
    }
}

/// A [`BoardIdentity`] with every code mapped back to its table entry.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BoardNames {
    pub memory_size: MemorySize,
    pub manufacturer: Manufacturer,
    pub processor: Processor,
    pub board_type: BoardType,
    pub board_revision: BoardRevision,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, Region};

    fn store_with_revision(value: u32) -> RegisterStore {
        let mut store = RegisterStore::new();
        store
            .set(Region::RevisionNumber, &format!("{value:08x}"))
            .expect("valid value");
        store
    }

    #[test]
    fn test_default_is_all_zero() {
        let board = BoardIdentity::default();
        assert_eq!(board.memory.to_string(), "000");
        assert_eq!(board.manufacturer.to_string(), "0000");
        assert_eq!(board.processor.to_string(), "0000");
        assert_eq!(board.board_type.to_string(), "00000000");
        assert_eq!(board.revision.to_string(), "0000");
    }

    #[test]
    fn test_legacy_path() {
        let store = store_with_revision(0b00010);
        assert_eq!(
            RevisionScheme::detect(&store).expect("revision loaded"),
            RevisionScheme::Legacy(BitString::new(0b00010, 5))
        );
        let names = BoardIdentity::resolve(&store)
            .expect("revision loaded")
            .names()
            .expect("all codes known");
        assert_eq!(names.memory_size.name(), "256");
        assert_eq!(names.manufacturer.name(), "Egoman");
        assert_eq!(names.processor.name(), "BCM2835");
        assert_eq!(names.board_type.name(), "B");
        assert_eq!(names.board_revision.name(), "1.0");
    }

    /// The warranty bit and other high bits do not disturb the legacy code.
    #[test]
    fn test_legacy_path_ignores_high_bits() {
        let store = store_with_revision(0x0100_000e);
        let names = BoardIdentity::resolve(&store)
            .expect("revision loaded")
            .names()
            .expect("all codes known");
        assert_eq!(names.memory_size, MemorySize::Mb512);
        assert_eq!(names.manufacturer, Manufacturer::SonyUk);
        assert_eq!(names.board_revision, BoardRevision::Rev20);
    }

    #[test]
    fn test_legacy_sentinels() {
        let board = BoardIdentity::resolve(&store_with_revision(0b10101)).expect("revision loaded");
        assert_eq!(board.memory, Code::Sentinel("EITHER"));
        assert_eq!(board.memory_size().expect("sentinel known"), MemorySize::Mb256Or512);

        let board = BoardIdentity::resolve(&store_with_revision(0b00101)).expect("revision loaded");
        assert_eq!(board.manufacturer().expect("sentinel known"), Manufacturer::Qisda);
    }

    #[test]
    fn test_legacy_default() {
        let board = BoardIdentity::resolve(&store_with_revision(0b11111)).expect("revision loaded");
        assert_eq!(board.memory, Code::UNKNOWN);
        assert_eq!(board.board_type, Code::UNKNOWN);
        let names = board.names().expect("unknown is in every table");
        assert_eq!(names.memory_size, MemorySize::Unknown);
        assert_eq!(names.manufacturer, Manufacturer::Unknown);
        assert_eq!(names.processor, Processor::Unknown);
        assert_eq!(names.board_type, BoardType::Unknown);
        assert_eq!(names.board_revision, BoardRevision::Unknown);
    }

    #[test]
    fn test_new_path() {
        // flag 1, memory 001, manufacturer 0011, processor 0001, type 00001000, revision 1101
        let store = store_with_revision(0x0093_108d);
        assert!(RevisionScheme::detect(&store).expect("revision loaded").is_new());
        let board = BoardIdentity::resolve(&store).expect("revision loaded");
        assert_eq!(board.memory.to_string(), "001");
        assert_eq!(board.board_type.to_string(), "00001000");
        let names = board.names().expect("all codes known");
        assert_eq!(names.memory_size, MemorySize::Mb512);
        assert_eq!(names.manufacturer, Manufacturer::SonyJapan);
        assert_eq!(names.processor, Processor::Bcm2836);
        assert_eq!(names.board_type, BoardType::Model3B);
        assert_eq!(names.board_revision, BoardRevision::UnknownD);
    }

    #[test]
    fn test_new_path_pi_3b() {
        let names = BoardIdentity::resolve(&store_with_revision(0x00a0_2082))
            .expect("revision loaded")
            .names()
            .expect("all codes known");
        assert_eq!(names.memory_size, MemorySize::Mb1024);
        assert_eq!(names.manufacturer, Manufacturer::SonyUk);
        assert_eq!(names.processor, Processor::Bcm2837);
        assert_eq!(names.board_type, BoardType::Model3B);
        assert_eq!(names.board_revision, BoardRevision::Rev12);
    }

    #[test]
    fn test_new_path_unknown_board_type() {
        // board type 0x11 has no table entry
        let board = BoardIdentity::resolve(&store_with_revision(0x00c0_3111)).expect("revision loaded");
        let err = board.names().expect_err("board type 0x11 is unknown");
        assert_eq!(err.kind(), ErrorKind::UnknownCode);
        assert!(board.memory_size().is_ok());
    }

    #[test]
    fn test_missing_revision() {
        let err = BoardIdentity::resolve(&RegisterStore::new()).expect_err("nothing loaded");
        assert!(matches!(
            err,
            OtpError::MissingRegion {
                region: Region::RevisionNumber
            }
        ));
    }
}
