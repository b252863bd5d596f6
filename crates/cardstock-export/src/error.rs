//! Error types for cardstock-export.
//!
//! Only two failure modes cross the pipeline boundary as errors: a
//! selection with nothing in it (rejected before any I/O) and an
//! unexpected filesystem failure while writing the bundle. Remote-API
//! failures never surface here - the [`crate::store::CardStore`] layer
//! maps them to empty results by policy.

use std::fmt;

/// Result type for cardstock-export operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can cross the export pipeline boundary.
#[derive(Debug)]
pub enum Error {
    /// No deck, tags, or note ids were supplied.
    InvalidSelection,

    /// An I/O error occurred while writing the bundle.
    Io(std::io::Error),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSelection => {
                write!(f, "no deck, tags, or note ids were provided")
            }
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
