//! Error types for the token converter.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can stop a conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The token sequence file does not exist.
    #[error("Sequence file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// The token sequence file is not valid UTF-8.
    #[error("Sequence file {} is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// midly failed to encode the track.
    #[error("MIDI encoding failed: {0}")]
    Encode(#[source] std::io::Error),

    /// The settings file or environment could not be read.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A setting holds a value the converter cannot use.
    #[error("invalid setting '{name}': {message}")]
    InvalidSetting { name: &'static str, message: String },

    /// The stretched tempo does not fit the 24-bit tempo field.
    #[error("tempo {tempo} µs per quarter note is outside 1..=16777215")]
    TempoOutOfRange { tempo: u64 },
}
