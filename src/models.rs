// Core data structures shared by the wikibridge modules

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wikipedia language edition handled by the linker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    De,
    En,
}

impl Lang {
    /// Language code as used by the Wikipedia API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::De => "de",
            Self::En => "en",
        }
    }

    /// Article path prefix for this language edition
    pub fn article_base(&self) -> &'static str {
        match self {
            Self::De => "https://de.wikipedia.org/wiki/",
            Self::En => "https://en.wikipedia.org/wiki/",
        }
    }

    /// The other supported language
    pub fn other(&self) -> Self {
        match self {
            Self::De => Self::En,
            Self::En => Self::De,
        }
    }

    /// Create from a language code (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "de" => Some(Self::De),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Get all languages
    pub fn all() -> [Self; 2] {
        [Self::De, Self::En]
    }

    /// Build the article URL for a title: spaces become underscores, nothing is escaped
    pub fn article_url(&self, title: &str) -> String {
        format!("{}{}", self.article_base(), title.trim().replace(' ', "_"))
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic coordinate pair; latitude and longitude only exist together
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Outcome tag of an entity lookup
///
/// `Found` is the only success value. Every other value marks a placeholder
/// record. Unknown strings supplied by a caller are carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LinkStatus {
    Found,
    NotFound,
    NoSource,
    Timeout,
    RateLimited,
    Error,
    Other(String),
}

impl LinkStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Found => "found",
            Self::NotFound => "not_found",
            Self::NoSource => "no_source",
            Self::Timeout => "timeout",
            Self::RateLimited => "rate_limited",
            Self::Error => "error",
            Self::Other(s) => s.as_str(),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found)
    }
}

impl From<&str> for LinkStatus {
    fn from(s: &str) -> Self {
        match s {
            "found" => Self::Found,
            "not_found" => Self::NotFound,
            "no_source" => Self::NoSource,
            "timeout" => Self::Timeout,
            "rate_limited" => Self::RateLimited,
            "error" => Self::Error,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for LinkStatus {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<LinkStatus> for String {
    fn from(status: LinkStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
