//! Error types for the unprofile library.

use std::io;
use thiserror::Error;

/// Result type alias for unprofile operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while parsing a profile export.
///
/// Only unrecoverable conditions live here. Heuristic degradations
/// (an entry that could not be resolved, a malformed date range, an
/// unrecognized heading) are absorbed locally and reported through the
/// [`Warning`](crate::model::Warning) list on the final record instead.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No usable content remained after normalization.
    #[error("Empty document: no usable content after normalization")]
    EmptyDocument,

    /// A required section could not be resolved.
    ///
    /// Raised when the header pseudo-section yields no name; a profile
    /// record without a name is not a partial result, it is a failure.
    #[error("Missing required section: {0}")]
    MissingRequiredSection(String),

    /// Error during rendering of the final record.
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyDocument;
        assert_eq!(
            err.to_string(),
            "Empty document: no usable content after normalization"
        );

        let err = Error::MissingRequiredSection("header".to_string());
        assert_eq!(err.to_string(), "Missing required section: header");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
