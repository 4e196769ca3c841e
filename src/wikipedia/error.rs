//! Error types for Wikipedia page processing
//!
//! Only [`WikipediaError::Validation`] is raised by the merge core itself.
//! The remaining variants describe failures of the lookup collaborator so a
//! caller can translate them into a placeholder record via
//! [`WikipediaError::status`].

use std::fmt;

use crate::models::{Lang, LinkStatus};

/// Result type alias for Wikipedia operations
pub type WikipediaResult<T> = Result<T, WikipediaError>;

/// Error type for Wikipedia operations
#[derive(Debug)]
pub enum WikipediaError {
    // =========================================================================
    // Merge Errors
    // =========================================================================
    /// Raw page data could not be interpreted at all
    Validation {
        message: String,
        lang: Option<Lang>,
        field: Option<String>,
    },

    // =========================================================================
    // Lookup Errors
    // =========================================================================
    /// The lookup request timed out
    Timeout { timeout_secs: f64, url: Option<String> },

    /// The API answered with an error
    Api {
        message: String,
        status_code: Option<u16>,
        url: Option<String>,
    },

    /// The API rejected the request because of rate limiting
    RateLimited { retry_after_secs: u64 },
}

impl fmt::Display for WikipediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WikipediaError::Validation {
                message,
                lang,
                field,
            } => {
                write!(f, "Validation error")?;
                if let Some(lang) = lang {
                    write!(f, " in {lang} pass")?;
                }
                if let Some(field) = field {
                    write!(f, " (field '{field}')")?;
                }
                write!(f, ": {message}")
            }
            WikipediaError::Timeout { timeout_secs, url } => {
                write!(f, "Request timed out after {timeout_secs} seconds")?;
                if let Some(url) = url {
                    write!(f, " while calling {url}")?;
                }
                Ok(())
            }
            WikipediaError::Api {
                message,
                status_code,
                ..
            } => match status_code {
                Some(code) => write!(f, "Wikipedia API error ({code}): {message}"),
                None => write!(f, "Wikipedia API error: {message}"),
            },
            WikipediaError::RateLimited { retry_after_secs } => {
                write!(
                    f,
                    "Rate limited. Please retry after {retry_after_secs} seconds"
                )
            }
        }
    }
}

impl std::error::Error for WikipediaError {}

// ============================================================================
// Helper constructors
// ============================================================================

impl WikipediaError {
    /// Create a validation error for one language pass
    pub fn validation(lang: Lang, message: impl Into<String>) -> Self {
        WikipediaError::Validation {
            message: message.into(),
            lang: Some(lang),
            field: None,
        }
    }

    /// Create a validation error pointing at a specific raw field
    pub fn invalid_field(lang: Lang, field: impl Into<String>, message: impl Into<String>) -> Self {
        WikipediaError::Validation {
            message: message.into(),
            lang: Some(lang),
            field: Some(field.into()),
        }
    }

    /// Create an API error
    pub fn api(message: impl Into<String>, status_code: Option<u16>) -> Self {
        WikipediaError::Api {
            message: message.into(),
            status_code,
            url: None,
        }
    }

    /// Language pass that failed, if known
    pub fn lang(&self) -> Option<Lang> {
        match self {
            WikipediaError::Validation { lang, .. } => *lang,
            _ => None,
        }
    }

    /// Check if retrying the lookup could succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            WikipediaError::Validation { .. } => false,
            WikipediaError::Timeout { .. } | WikipediaError::RateLimited { .. } => true,
            WikipediaError::Api { status_code, .. } => {
                matches!(status_code, Some(code) if *code >= 500)
            }
        }
    }

    /// Status tag for the placeholder record that replaces the failed lookup
    pub fn status(&self) -> LinkStatus {
        match self {
            WikipediaError::Timeout { .. } => LinkStatus::Timeout,
            WikipediaError::RateLimited { .. } => LinkStatus::RateLimited,
            WikipediaError::Api {
                status_code: Some(404),
                ..
            } => LinkStatus::NotFound,
            WikipediaError::Api { .. } | WikipediaError::Validation { .. } => LinkStatus::Error,
        }
    }
}
