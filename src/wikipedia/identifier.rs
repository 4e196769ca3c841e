//! DBpedia URI derivation
//!
//! Titles are used as-is apart from trimming and space replacement; no
//! percent-encoding is applied, so stored URIs stay byte-compatible with
//! previously generated ones.

use tracing::debug;

use super::record::LinkedPage;

/// DBpedia resource namespace
pub const DBPEDIA_RESOURCE_BASE: &str = "http://dbpedia.org/resource/";

/// Marker of an English Wikipedia article path inside a URL
const EN_ARTICLE_MARKER: &str = "en.wikipedia.org/wiki/";

/// Which step of the priority chain produced the final URI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriOrigin {
    /// URI was already present
    Existing,
    /// Generated from `label_en`
    Label,
    /// Title recovered from `url_en`
    Url,
    /// No English data; URI stays empty
    None,
}

/// Build a DBpedia resource URI from an English title.
///
/// Returns an empty string for blank input.
pub fn generate_dbpedia_uri(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        return String::new();
    }
    format!("{DBPEDIA_RESOURCE_BASE}{}", title.replace(' ', "_"))
}

/// Recover a human-readable title from an English Wikipedia URL
pub fn title_from_en_url(url: &str) -> Option<String> {
    let (_, tail) = url.rsplit_once(EN_ARTICLE_MARKER)?;
    let title = tail.replace('_', " ");
    let title = title.trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// Set `dbpedia_uri` from the best available English data.
///
/// Priority: existing URI, then `label_en`, then the title in `url_en`.
/// Calling this twice is a no-op the second time.
pub fn finalize_identifier(record: &mut LinkedPage) -> UriOrigin {
    if !record.dbpedia_uri.trim().is_empty() {
        debug!(uri = %record.dbpedia_uri, "Using existing DBpedia URI");
        return UriOrigin::Existing;
    }

    let from_label = generate_dbpedia_uri(&record.label_en);
    if !from_label.is_empty() {
        debug!(label_en = %record.label_en, uri = %from_label, "Generated DBpedia URI from label_en");
        record.dbpedia_uri = from_label;
        return UriOrigin::Label;
    }

    if let Some(title) = title_from_en_url(&record.url_en) {
        let uri = generate_dbpedia_uri(&title);
        debug!(url_en = %record.url_en, uri = %uri, "Generated DBpedia URI from url_en");
        record.dbpedia_uri = uri;
        return UriOrigin::Url;
    }

    debug!("No English data available for DBpedia URI generation");
    record.dbpedia_uri.clear();
    UriOrigin::None
}
