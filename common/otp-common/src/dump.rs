//! The dump is one register per line, `<decimal index>:<8 hex digits>`:
//!
//! ```txt
//! 08:00000000
//! ...
//! 30:00a02082
//! ```

use crate::value::{RawValue, HEX_DIGITS};
use crate::{OtpError, RegisterStore, Result};
use std::io::BufRead;

/// Printed by `vcgencmd` when it is given an unknown command.
const MISINVOKED_MARKER: &str = "Command not registered";

/// Parse one line of a dump.
///
/// `line_number` is 1-based and only used in errors.
pub fn parse_line(line: &str, line_number: usize) -> Result<(u8, RawValue)> {
    if line.contains(MISINVOKED_MARKER) {
        return Err(OtpError::ToolMisinvoked);
    }
    let line = line.trim_end_matches(['\r', '\n']);
    let (index, rest) = line.split_once(':').ok_or(OtpError::MalformedLine {
        line: line_number,
    })?;

    let index_text = index.trim();
    let index: u32 = index_text
        .parse()
        .map_err(|_| OtpError::InvalidRegionIndex {
            text: index_text.to_string(),
        })?;
    let index = u8::try_from(index)
        .ok()
        .filter(|&i| i <= crate::MAX_REGION_INDEX)
        .ok_or(OtpError::RegionOutOfRange { index })?;

    let value: String = rest.chars().take(HEX_DIGITS).collect();
    let value = RawValue::parse(&value).map_err(|_| OtpError::Format {
        region: index,
        value,
    })?;
    Ok((index, value))
}

impl RegisterStore {
    /// Load every register of a dump.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut store = RegisterStore::new();
        for (i, line) in reader.lines().enumerate() {
            let (index, value) = parse_line(&line?, i + 1)?;
            store.insert(index, value)?;
        }
        tracing::debug!("loaded {} regions", store.len());
        Ok(store)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Self::from_reader(text.as_bytes())
    }
}
