//! Unified error types for docdiff.
//!
//! Adapter failures come in two flavors: recoverable ones are swallowed at
//! the adapter boundary and turned into fallback content, so only fatal
//! failures ever surface through this hierarchy.

use std::path::PathBuf;
use thiserror::Error;

use crate::adapters::AdapterError;
use crate::reports::ReportError;

/// Main error type for docdiff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DocDiffError {
    /// Fatal adapter failure while normalizing an input file
    #[error("Failed to adapt {path:?}: {source}")]
    Adapt {
        path: PathBuf,
        #[source]
        source: AdapterError,
    },

    /// A comparison was requested before both inputs were available
    #[error("Missing input file: {0:?}")]
    MissingInput(PathBuf),

    /// Errors during report generation
    #[error("Report generation failed: {source}")]
    Report {
        #[source]
        source: ReportError,
    },

    /// IO errors with path context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Convenient Result type for docdiff operations
pub type Result<T> = std::result::Result<T, DocDiffError>;

impl DocDiffError {
    /// Create an adapt error with the offending path
    pub fn adapt(path: impl Into<PathBuf>, source: AdapterError) -> Self {
        Self::Adapt {
            path: path.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<std::io::Error> for DocDiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<ReportError> for DocDiffError {
    fn from(source: ReportError) -> Self {
        Self::Report { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = DocDiffError::io("/path/to/left.txt", io_err);
        assert!(err.to_string().contains("/path/to/left.txt"));
    }

    #[test]
    fn test_missing_input_display() {
        let err = DocDiffError::MissingInput(PathBuf::from("gone.csv"));
        assert!(err.to_string().contains("gone.csv"));
    }

    #[test]
    fn test_validation_helper() {
        let err = DocDiffError::validation("no output file");
        assert!(matches!(err, DocDiffError::Validation(_)));
    }
}
