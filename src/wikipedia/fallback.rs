//! Second-chance filling of labels and URLs from lower-trust sources
//!
//! Lookup data always has the highest priority: it is already in the record
//! when [`fill_gaps`] runs. Fallback sources are consumed in the order given,
//! and each may only fill fields that are still empty.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::page::set_if_empty;
use super::record::LinkedPage;

/// Record fields a fallback source may fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackField {
    LabelDe,
    LabelEn,
    UrlDe,
    UrlEn,
}

impl FallbackField {
    pub fn all() -> [Self; 4] {
        [Self::LabelDe, Self::LabelEn, Self::UrlDe, Self::UrlEn]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LabelDe => "label_de",
            Self::LabelEn => "label_en",
            Self::UrlDe => "url_de",
            Self::UrlEn => "url_en",
        }
    }

    fn slot<'a>(&self, record: &'a mut LinkedPage) -> &'a mut String {
        match self {
            Self::LabelDe => &mut record.label_de,
            Self::LabelEn => &mut record.label_en,
            Self::UrlDe => &mut record.url_de,
            Self::UrlEn => &mut record.url_en,
        }
    }
}

/// A source of fallback values, lower in trust than lookup data
pub trait FallbackSource {
    /// Name used in logs
    fn source_name(&self) -> &str;

    /// Value this source offers for `field`, if any
    fn value(&self, field: FallbackField) -> Option<&str>;
}

/// Entity metadata produced alongside the extraction prompt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_de: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wiki_url_de: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wiki_url_en: Option<String>,
}

impl PromptMetadata {
    /// Read metadata from a loose mapping; non-string values are ignored.
    pub fn from_value(value: &Value) -> Self {
        let get = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Self {
            label_de: get("label_de"),
            label_en: get("label_en"),
            wiki_url_de: get("wiki_url_de"),
            wiki_url_en: get("wiki_url_en"),
        }
    }
}

impl FallbackSource for PromptMetadata {
    fn source_name(&self) -> &str {
        "prompt"
    }

    fn value(&self, field: FallbackField) -> Option<&str> {
        let value = match field {
            FallbackField::LabelDe => &self.label_de,
            FallbackField::LabelEn => &self.label_en,
            FallbackField::UrlDe => &self.wiki_url_de,
            FallbackField::UrlEn => &self.wiki_url_en,
        };
        value.as_deref()
    }
}

/// Fill empty label/URL fields from `sources`, highest priority first.
///
/// Returns the number of fields filled. Categories, links, coordinates and
/// the DBpedia URI are never touched.
pub fn fill_gaps(record: &mut LinkedPage, sources: &[&dyn FallbackSource]) -> usize {
    let mut filled = 0;
    for source in sources {
        for field in FallbackField::all() {
            let Some(value) = source.value(field) else {
                continue;
            };
            if set_if_empty(field.slot(record), value.trim().to_string()) {
                debug!(
                    source = source.source_name(),
                    field = field.as_str(),
                    value = %value,
                    "Filled field from fallback source"
                );
                filled += 1;
            }
        }
    }
    filled
}

/// Enhance a formatted record with prompt-provided fallback data.
pub fn enhance(record: &mut LinkedPage, prompt: &PromptMetadata) -> usize {
    fill_gaps(record, &[prompt])
}
