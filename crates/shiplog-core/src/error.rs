//! Error types for shiplog

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ShiplogError
pub type Result<T> = std::result::Result<T, ShiplogError>;

/// Main error type for shiplog operations
///
/// Loading the PR info file is the only fallible step of a run; extraction,
/// classification, and rendering are total over well-formed input.
#[derive(Debug, Error)]
pub enum ShiplogError {
    /// Input-related errors
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Errors raised while loading the PR info file
#[derive(Debug, Error)]
pub enum InputError {
    /// PR info file could not be read
    #[error("Failed to read PR info file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not a valid JSON array of PR objects
    #[error("Failed to parse PR info JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_names_path() {
        let err = InputError::Read {
            path: PathBuf::from("/tmp/prs.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };

        assert!(err.to_string().contains("/tmp/prs.json"));
    }

    #[test]
    fn test_input_error_converts() {
        let err: ShiplogError = InputError::Read {
            path: PathBuf::from("prs.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();

        assert!(matches!(err, ShiplogError::Input(_)));
    }
}
