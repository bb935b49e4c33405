// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum PulsarVersionError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}")]
    Context {
        context: String,
        #[source]
        source: Box<PulsarVersionError>,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error(transparent)]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, PulsarVersionError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Marker prefix must not be empty")]
    EmptyMarker,

    #[error("Invalid pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("No file matching '{pattern}' found under '{root}'")]
    TargetNotFound { pattern: String, root: PathBuf },

    #[error("Pattern '{pattern}' matched {} files, expected exactly one", matches.len())]
    AmbiguousTarget { pattern: String, matches: Vec<PathBuf> },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}'")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}'")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File system operation failed: {operation} on '{path}'")]
    FileSystemOperation {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory walk failed under '{root}': {details}")]
    Walk { root: PathBuf, details: String },
}

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<PulsarVersionError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| PulsarVersionError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| PulsarVersionError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
