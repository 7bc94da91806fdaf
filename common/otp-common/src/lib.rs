//! Decoding of Raspberry Pi OTP (one-time-programmable) memory dumps, as produced by
//! `vcgencmd otp_dump`.
//!
//! Pipeline: [`RegisterStore`] (load) -> [`checks`] (consistency) -> [`BoardIdentity`] (resolve)
//! -> [`format`] (rendering primitives for a report).

/// Contiguous bit ranges and the bit strings cut out of registers.
pub mod bits;
/// Board identity resolution from the revision register.
pub mod board;
/// Bootmode redundancy and serial checksum validation.
pub mod checks;
/// Bit-code tables for each board identity dimension.
pub mod codes;
/// Tokenizer for the textual dump format.
pub mod dump;
mod error;
/// Named bit fields of the multi-field registers.
pub mod fields;
/// Rendering helpers used by the report.
pub mod format;
/// Legacy (pre new-style) revision codes.
pub mod legacy;
/// The named OTP regions.
pub mod region;
/// Storage for the loaded registers.
pub mod store;
/// Validated raw register text.
pub mod value;

pub use board::BoardIdentity;
pub use error::{ErrorKind, OtpError, Result};
pub use region::Region;
pub use store::RegisterStore;
pub use value::RawValue;

/// Width of every OTP register, in bits.
pub const REGISTER_BITS: u8 = 32;

/// Highest region index reported by the dump tool.
pub const MAX_REGION_INDEX: u8 = 66;
