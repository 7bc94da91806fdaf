use crate::codes::Code;
use crate::Region;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, OtpError>;

/// Broad classes of [`OtpError`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// The dump itself is malformed or inconsistent.
    Input,
    /// A region needed for decoding was not in the dump.
    MissingRegion,
    /// A field name has no entry in the register's catalog.
    UnknownField,
    /// A decoded code has no entry in its table.
    UnknownCode,
    /// An internal invariant was violated.
    Precondition,
}

#[derive(Debug, Error)]
pub enum OtpError {
    #[error("Invalid OTP dump. Please run 'vcgencmd otp_dump' to create the file")]
    ToolMisinvoked,

    #[error("Invalid OTP dump (line {line} has no region separator)")]
    MalformedLine { line: usize },

    #[error("Invalid OTP dump (invalid region number '{text}')")]
    InvalidRegionIndex { text: String },

    #[error("Invalid OTP dump (region {index} is out of range)")]
    RegionOutOfRange { index: u32 },

    #[error("Invalid OTP dump (reading region {region}, string '{value}' is not 8 hexadecimal digits)")]
    Format { region: u8, value: String },

    #[error("Invalid OTP dump (region {region} appears more than once)")]
    DuplicateRegion { region: u8 },

    #[error("failed to read OTP dump: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("region {} ({}) is not present in the dump", .region.index(), .region.name())]
    MissingRegion { region: Region },

    #[error("register {} has no field named '{name}'", .region.name())]
    UnknownField { region: Region, name: String },

    #[error("no {dimension} is known for code '{code}'")]
    UnknownCode { dimension: &'static str, code: Code },

    #[error("no {dimension} is named '{name}'")]
    UnknownName { dimension: &'static str, name: String },

    #[error("precondition violated: {reason}")]
    Precondition { reason: String },
}

impl OtpError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OtpError::ToolMisinvoked
            | OtpError::MalformedLine { .. }
            | OtpError::InvalidRegionIndex { .. }
            | OtpError::RegionOutOfRange { .. }
            | OtpError::Format { .. }
            | OtpError::DuplicateRegion { .. }
            | OtpError::Io { .. } => ErrorKind::Input,
            OtpError::MissingRegion { .. } => ErrorKind::MissingRegion,
            OtpError::UnknownField { .. } => ErrorKind::UnknownField,
            OtpError::UnknownCode { .. } | OtpError::UnknownName { .. } => ErrorKind::UnknownCode,
            OtpError::Precondition { .. } => ErrorKind::Precondition,
        }
    }

    pub(crate) fn precondition(reason: impl Into<String>) -> Self {
        OtpError::Precondition {
            reason: reason.into(),
        }
    }
}
