//! Cross-register consistency checks. A failed check is a warning about the board, not a
//! reason to stop decoding.

use crate::{RegisterStore, Region, Result};
use core::fmt;

/// Outcome of a consistency check.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Consistency {
    Consistent,
    /// The check failed; carries the message to warn with.
    Inconsistent(&'static str),
}

impl Consistency {
    pub fn is_consistent(&self) -> bool {
        matches!(self, Consistency::Consistent)
    }

    pub fn warning(&self) -> Option<&'static str> {
        match *self {
            Consistency::Consistent => None,
            Consistency::Inconsistent(message) => Some(message),
        }
    }
}

impl fmt::Display for Consistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Consistency::Consistent => f.write_str("OK"),
            Consistency::Inconsistent(message) => f.write_str(message),
        }
    }
}

pub const BOOTMODE_MISMATCH: &str = "Bootmode fields are not the same";
pub const SERIAL_CHECKSUM_FAILED: &str = "Serial failed checksum";

/// The boot mode register and its backup copy must hold the same value.
pub fn check_bootmode(store: &RegisterStore) -> Result<Consistency> {
    let primary = store.get(Region::Bootmode)?;
    let copy = store.get(Region::BootmodeCopy)?;
    if primary.value() == copy.value() {
        Ok(Consistency::Consistent)
    } else {
        tracing::debug!("bootmode {primary} differs from its copy {copy}");
        Ok(Consistency::Inconsistent(BOOTMODE_MISMATCH))
    }
}

/// The inverted serial number must be the bitwise complement of the serial number.
pub fn check_serial(store: &RegisterStore) -> Result<Consistency> {
    let serial = parse_serial(store, Region::SerialNumber)?;
    let inverted = parse_serial(store, Region::SerialNumberInverted)?;
    if serial ^ inverted == u32::MAX {
        Ok(Consistency::Consistent)
    } else {
        tracing::debug!("serial {serial:#010x} ^ {inverted:#010x} != 0xffffffff");
        Ok(Consistency::Inconsistent(SERIAL_CHECKSUM_FAILED))
    }
}

fn parse_serial(store: &RegisterStore, region: Region) -> Result<u32> {
    // the store only holds values that parsed as eight hex digits
    Ok(store.get(region)?.value())
}
