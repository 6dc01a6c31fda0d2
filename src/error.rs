//! Centralized error types for tnefshell.

use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the tnefshell library.
#[derive(Error, Debug)]
pub enum TnefError {
    /// The buffer is shorter than 4 bytes or does not start with the TNEF signature.
    #[error("File did not begin with a TNEF marker")]
    MissingMarker,

    /// A read or skip would run past the end of the buffer.
    #[error("Truncated input at offset {offset}: needed {needed} byte(s), {available} available")]
    TruncatedInput {
        offset: u64,
        needed: u64,
        available: u64,
    },

    /// A multi-value count is larger than the payload could possibly hold.
    #[error("Property value count implausible: {count} (only {remaining} byte(s) remaining)")]
    ImplausibleCount { count: u32, remaining: u64 },

    /// An attachment-level record arrived before any attachment was started.
    #[error("Attachment record at offset {offset} precedes any attachment marker")]
    PrecedingStateMissing { offset: u64 },

    /// I/O error with the associated file path.
    #[error("I/O error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The specified file does not exist.
    #[error("TNEF file not found: {0}")]
    FileNotFound(PathBuf),

    /// The file exceeds the configured size limit.
    #[error("File '{path}' is {size} bytes, larger than the {limit} byte limit")]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },
}

/// Convenience alias for `Result<T, TnefError>`.
pub type Result<T> = std::result::Result<T, TnefError>;

impl TnefError {
    /// Create an `Io` variant from a path and an `io::Error`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// `true` for errors raised by the decoder on malformed input,
    /// as opposed to file-system problems.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::MissingMarker
                | Self::TruncatedInput { .. }
                | Self::ImplausibleCount { .. }
                | Self::PrecedingStateMissing { .. }
        )
    }
}
