//! Canonical output record
//!
//! [`LinkedPage`] is what downstream generation steps consume. It is either
//! a projection of a merged [`WikiPage`] (`status = "found"`) or a
//! placeholder for a failed lookup. Every key except `error` is always
//! serialized; absence never signals failure, `status` does.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::page::WikiPage;
use crate::models::{Lang, LinkStatus};

/// Serialization-ready record for one linked entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedPage {
    pub status: LinkStatus,
    pub label_de: String,
    pub label_en: String,
    pub url_de: String,
    pub url_en: String,
    pub extract: String,
    pub wikidata_id: String,
    pub thumbnail_url: String,
    pub categories: Vec<String>,
    pub internal_links: Vec<String>,
    pub geo_lat: Option<f64>,
    pub geo_lon: Option<f64>,
    pub infobox_type: String,
    pub dbpedia_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LinkedPage {
    /// Project a merged page; the DBpedia URI is left for finalization.
    pub fn from_page(page: &WikiPage) -> Self {
        let extract = [Lang::De, Lang::En]
            .into_iter()
            .map(|lang| page.abstract_text(lang))
            .find(|text| !text.trim().is_empty())
            .unwrap_or_default()
            .to_string();

        debug!(
            title_de = page.title(Lang::De),
            title_en = page.title(Lang::En),
            extract_len = extract.len(),
            "Formatting wiki page"
        );

        let coordinates = page.coordinates();
        Self {
            status: LinkStatus::Found,
            label_de: page.title(Lang::De).to_string(),
            label_en: page.title(Lang::En).to_string(),
            url_de: page.wiki_url(Lang::De).to_string(),
            url_en: page.wiki_url(Lang::En).to_string(),
            extract,
            wikidata_id: page.wikidata_id().to_string(),
            thumbnail_url: page.thumbnail_url().to_string(),
            categories: page.categories().to_vec(),
            internal_links: page.internal_links().to_vec(),
            geo_lat: coordinates.map(|c| c.lat),
            geo_lon: coordinates.map(|c| c.lon),
            infobox_type: page.infobox_type().to_string(),
            dbpedia_uri: String::new(),
            error: None,
        }
    }

    /// Placeholder for a lookup that produced no usable page.
    ///
    /// The caller's label is kept as a best-effort German display value.
    pub fn empty(label: impl Into<String>, status: impl Into<LinkStatus>, error: Option<String>) -> Self {
        Self {
            status: status.into(),
            label_de: label.into(),
            label_en: String::new(),
            url_de: String::new(),
            url_en: String::new(),
            extract: String::new(),
            wikidata_id: String::new(),
            thumbnail_url: String::new(),
            categories: Vec::new(),
            internal_links: Vec::new(),
            geo_lat: None,
            geo_lon: None,
            infobox_type: String::new(),
            dbpedia_uri: String::new(),
            error: error.filter(|e| !e.trim().is_empty()),
        }
    }

    pub fn is_found(&self) -> bool {
        self.status.is_found()
    }
}

impl From<&WikiPage> for LinkedPage {
    fn from(page: &WikiPage) -> Self {
        Self::from_page(page)
    }
}

/// Project a merged page into the canonical record.
pub fn format_page(page: &WikiPage) -> LinkedPage {
    LinkedPage::from_page(page)
}

/// Build the placeholder record for a failed lookup.
pub fn create_empty_record(label: &str, status: &str, error: Option<&str>) -> LinkedPage {
    LinkedPage::empty(label, status, error.map(str::to_string))
}
