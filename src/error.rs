//! Error handling for the sort utility

use std::io;
use thiserror::Error;

/// Custom error type for sort operations
#[derive(Error, Debug)]
pub enum SortError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{name}: {cause}")]
    SourceUnavailable { name: String, cause: io::Error },

    #[error("{name}: disorder at line {line}")]
    Disorder { name: String, line: usize },

    #[error("{name}: line {line} exceeds {limit} bytes")]
    LineTooLong {
        name: String,
        line: usize,
        limit: usize,
    },

    #[error("{0}")]
    Usage(String),
}

impl SortError {
    /// Returns the exit code for this error. Every failure maps to the
    /// single POSIX failure status.
    pub fn exit_code(&self) -> i32 {
        crate::EXIT_FAILURE
    }

    /// Create a source unavailable error
    pub fn source_unavailable(name: &str, cause: io::Error) -> Self {
        SortError::SourceUnavailable {
            name: name.to_string(),
            cause,
        }
    }

    /// Create a disorder error
    pub fn disorder(name: &str, line: usize) -> Self {
        SortError::Disorder {
            name: name.to_string(),
            line,
        }
    }

    /// Create a line too long error
    pub fn line_too_long(name: &str, line: usize, limit: usize) -> Self {
        SortError::LineTooLong {
            name: name.to_string(),
            line,
            limit,
        }
    }

    /// Create a usage error
    pub fn usage(message: &str) -> Self {
        SortError::Usage(message.to_string())
    }
}

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;

/// Context trait for attaching a source or path name to raw I/O errors
pub trait SortContext<T> {
    /// Treat any failure as the named source being unavailable.
    fn with_source(self, name: &str) -> SortResult<T>;

    /// Keep the error an I/O error, prefixed with the given name.
    fn with_path(self, name: &str) -> SortResult<T>;
}

impl<T> SortContext<T> for Result<T, io::Error> {
    fn with_source(self, name: &str) -> SortResult<T> {
        self.map_err(|io_err| SortError::source_unavailable(name, io_err))
    }

    fn with_path(self, name: &str) -> SortResult<T> {
        self.map_err(|io_err| {
            SortError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", name, io_err),
            ))
        })
    }
}
