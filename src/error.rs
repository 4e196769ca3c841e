//! Unified error handling for the wikibridge crate
//!
//! [`Error`] wraps the domain-specific [`WikipediaError`] together with the
//! file, JSON, manifest and configuration failures of the command layer, and
//! classifies them via [`ErrorCategory`]. Only the binary converts to `anyhow`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub use crate::wikipedia::error::WikipediaError;

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Raw page data could not be interpreted
    Validation,
    /// Lookup collaborator failures (timeout, API error, rate limit)
    Lookup,
    /// Parsing of input files
    Parsing,
    /// File system errors
    Storage,
    /// Configuration and validation errors
    Config,
    /// Other/unknown errors
    Other,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Lookup => "lookup",
            Self::Parsing => "parsing",
            Self::Storage => "storage",
            Self::Config => "config",
            Self::Other => "other",
        }
    }
}

/// Unified error type for the wikibridge crate
#[derive(Error, Debug)]
pub enum Error {
    /// Wikipedia page processing errors
    #[error("Wikipedia error: {0}")]
    Wikipedia(#[from] WikipediaError),

    /// Reading or writing a specific file failed
    #[error("Failed to access {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A file's content is not valid JSON, or not the expected shape
    #[error("Invalid JSON in {}: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Batch manifest entry that cannot be loaded
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}")]
    Other {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Attach a path to an I/O error
    pub fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }

    /// Attach a path to a JSON error
    pub fn invalid_json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::InvalidJson {
            path: path.into(),
            source,
        }
    }

    /// Create a generic error with context
    pub fn other(context: impl Into<String>) -> Self {
        Self::Other {
            context: context.into(),
            source: None,
        }
    }

    /// Create a generic error with context and source
    pub fn with_source(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Other {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error is recoverable (can be retried)
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Wikipedia(e) => e.is_recoverable(),
            Self::File { .. } => true,
            Self::Json(_)
            | Self::InvalidJson { .. }
            | Self::Manifest(_)
            | Self::Config(_)
            | Self::Other { .. } => false,
        }
    }

    /// Get the error category for handling strategies
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Wikipedia(WikipediaError::Validation { .. }) => ErrorCategory::Validation,
            Self::Wikipedia(_) => ErrorCategory::Lookup,
            Self::File { .. } => ErrorCategory::Storage,
            Self::Json(_) | Self::InvalidJson { .. } | Self::Manifest(_) => ErrorCategory::Parsing,
            Self::Config(_) => ErrorCategory::Config,
            Self::Other { .. } => ErrorCategory::Other,
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
