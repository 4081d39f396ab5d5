//! Error taxonomy for file reads.

use std::path::PathBuf;

use thiserror::Error;

/// Errors a read session can terminate with.
///
/// Host-reported failures collapse into a closed set with a guaranteed
/// catch-all variant, so an unexpected `io::ErrorKind` cannot break
/// callers matching on the taxonomy.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The referenced file no longer exists.
    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    /// Permission failure prevents reading.
    #[error("File is not readable: {path}")]
    NotReadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The read was cancelled by the user. Expected, not a failure.
    #[error("File read cancelled.")]
    Aborted,

    /// Any other reported failure.
    #[error("An error occurred reading {path}: {message}")]
    Unknown { path: PathBuf, message: String },
}

impl ReadError {
    /// Map a host I/O error, keeping path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::NotReadable { path, source },
            _ => Self::Unknown {
                path,
                message: source.to_string(),
            },
        }
    }

    /// Whether this is a user cancellation rather than a failure.
    ///
    /// Cancellations are rendered with a plain informational message
    /// instead of error styling.
    pub fn is_abort(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_mapping() {
        let err = ReadError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, ReadError::NotFound { .. }));

        let err = ReadError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, ReadError::NotReadable { .. }));

        let err = ReadError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::InvalidData, "weird"),
        );
        assert!(matches!(err, ReadError::Unknown { .. }));
    }

    #[test]
    fn test_abort_is_not_a_failure() {
        assert!(ReadError::Aborted.is_abort());
        assert!(!ReadError::NotFound { path: "/x".into() }.is_abort());
        assert_eq!(ReadError::Aborted.to_string(), "File read cancelled.");
    }
}
