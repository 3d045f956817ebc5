//! Error types for StarData
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Result type alias for StarData operations
pub type StarDataResult<T> = Result<T, StarDataError>;

/// Why a raw input line could not become a [`StarEntry`](crate::StarEntry).
///
/// Out-of-range values are never reported here: they are clamped when the
/// entry is constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseError {
    /// Fewer than the seven mandatory tokens
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },

    /// A mandatory token does not convert to its numeric type
    #[error("invalid {field} '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

/// Main error type for StarData operations
#[derive(Error, Debug)]
pub enum StarDataError {
    /// Malformed input line
    #[error("invalid input format: {0}")]
    Parse(#[from] ParseError),

    /// Data file could not be opened or read
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data file could not be created or appended to
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for our schema
    #[error("invalid config in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },
}

impl StarDataError {
    /// The underlying I/O error, if this is an I/O failure
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            StarDataError::Read { source, .. } | StarDataError::Write { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}
