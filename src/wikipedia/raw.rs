//! Decoder for raw Wikipedia API page objects
//!
//! Turns one loosely structured page mapping (as returned by `action=query`
//! with `prop=extracts|pageprops|categories|coordinates|links|pageimages|langlinks|info`)
//! into a typed [`RawPage`]. Malformed sub-fields are skipped with a warning;
//! only a page that cannot be interpreted at all is rejected.

use serde_json::{Map, Value};
use tracing::warn;

use super::error::{WikipediaError, WikipediaResult};
use crate::models::{GeoPoint, Lang};

/// Namespace prefixes stripped from category titles
const CATEGORY_PREFIXES: [&str; 2] = ["Category:", "Kategorie:"];

/// A link from the decoded page to its counterpart in another language edition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangLink {
    pub lang: String,
    pub title: String,
}

/// Typed view of one raw page response for a single language
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPage {
    pub title: Option<String>,
    pub extract: Option<String>,
    pub url: Option<String>,
    pub wikidata_id: Option<String>,
    pub infobox_type: Option<String>,
    pub thumbnail_url: Option<String>,
    pub categories: Vec<String>,
    pub internal_links: Vec<String>,
    pub coordinates: Option<GeoPoint>,
    pub langlinks: Vec<LangLink>,
    pub missing: bool,
}

impl RawPage {
    /// Decode a raw page mapping for the given language pass
    pub fn decode(value: &Value, lang: Lang) -> WikipediaResult<Self> {
        let obj = value.as_object().ok_or_else(|| {
            WikipediaError::validation(
                lang,
                format!("expected page object, got {}", json_kind(value)),
            )
        })?;

        let pageprops = obj.get("pageprops").and_then(Value::as_object);

        Ok(Self {
            title: required_text(obj, "title", lang)?,
            extract: required_text(obj, "extract", lang)?,
            url: text(obj.get("fullurl")).or_else(|| text(obj.get("canonicalurl"))),
            wikidata_id: pageprops.and_then(|p| text(p.get("wikibase_item"))),
            infobox_type: pageprops.and_then(|p| first_infobox(p, lang)),
            thumbnail_url: obj
                .get("thumbnail")
                .and_then(Value::as_object)
                .and_then(|t| text(t.get("source"))),
            categories: titles(obj, "categories", lang)
                .into_iter()
                .map(|t| strip_category_prefix(&t))
                .filter(|t| !t.is_empty())
                .collect(),
            internal_links: titles(obj, "links", lang),
            coordinates: coordinates(obj, lang),
            langlinks: langlinks(obj, lang),
            missing: is_missing_page(value),
        })
    }
}

/// Pick the page object out of a full API response
///
/// Accepts a bare page, or an envelope with `query.pages` either as a map
/// keyed by page id or as an array. Returns `None` for an envelope without pages.
pub fn unwrap_response(value: &Value) -> Option<&Value> {
    let Some(pages) = value.get("query").and_then(|q| q.get("pages")) else {
        return Some(value);
    };

    match pages {
        Value::Object(map) => map.values().next(),
        Value::Array(list) => list.first(),
        _ => None,
    }
}

/// Strip a leading `Category:` / `Kategorie:` namespace from a category title
pub fn strip_category_prefix(title: &str) -> String {
    let trimmed = title.trim();
    CATEGORY_PREFIXES
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix))
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Non-blank trimmed string, anything else is "no information"
fn text(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Like [`text`], but a present non-string value is a structural error
fn required_text(obj: &Map<String, Value>, key: &str, lang: Lang) -> WikipediaResult<Option<String>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(_)) => Ok(text(obj.get(key))),
        Some(other) => Err(WikipediaError::invalid_field(
            lang,
            key,
            format!("expected string, got {}", json_kind(other)),
        )),
    }
}

/// True when the API flagged the page as `missing` or `invalid`
pub fn is_missing_page(value: &Value) -> bool {
    ["missing", "invalid"]
        .iter()
        .any(|key| !matches!(value.get(key), None | Some(Value::Bool(false)) | Some(Value::Null)))
}

fn first_infobox(pageprops: &Map<String, Value>, lang: Lang) -> Option<String> {
    match pageprops.get("infoboxes")? {
        Value::Array(list) => list.iter().find_map(|v| text(Some(v))),
        other => {
            warn!(lang = %lang, kind = json_kind(other), "Ignoring non-list pageprops.infoboxes");
            None
        }
    }
}

/// Collect `title` values from a list of `{ "title": ... }` entries
fn titles(obj: &Map<String, Value>, key: &str, lang: Lang) -> Vec<String> {
    let Some(raw) = obj.get(key) else {
        return Vec::new();
    };
    let Some(entries) = raw.as_array() else {
        warn!(lang = %lang, field = key, kind = json_kind(raw), "Ignoring non-list field");
        return Vec::new();
    };

    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry.as_object().map(|e| text(e.get("title"))) {
            Some(Some(title)) => out.push(title),
            Some(None) => {}
            None => {
                warn!(lang = %lang, field = key, kind = json_kind(entry), "Skipping malformed entry");
            }
        }
    }
    out
}

fn coordinate(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// First coordinate entry, only if both axes parse
fn coordinates(obj: &Map<String, Value>, lang: Lang) -> Option<GeoPoint> {
    let raw = obj.get("coordinates")?;
    let Some(entries) = raw.as_array() else {
        warn!(lang = %lang, kind = json_kind(raw), "Ignoring non-list coordinates");
        return None;
    };
    let first = entries.first()?;
    let Some(entry) = first.as_object() else {
        warn!(lang = %lang, kind = json_kind(first), "Ignoring malformed coordinate entry");
        return None;
    };

    match (coordinate(entry.get("lat")), coordinate(entry.get("lon"))) {
        (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
        _ => {
            warn!(
                lang = %lang,
                lat = ?entry.get("lat"),
                lon = ?entry.get("lon"),
                "Error processing coordinates, leaving both unset"
            );
            None
        }
    }
}

fn langlinks(obj: &Map<String, Value>, lang: Lang) -> Vec<LangLink> {
    let Some(raw) = obj.get("langlinks") else {
        return Vec::new();
    };
    let Some(entries) = raw.as_array() else {
        warn!(lang = %lang, kind = json_kind(raw), "Ignoring non-list langlinks");
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let entry = entry.as_object()?;
            // formatversion=1 puts the title under "*"
            let title = text(entry.get("title")).or_else(|| text(entry.get("*")))?;
            let code = text(entry.get("lang"))?;
            Some(LangLink { lang: code, title })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_page() {
        let raw = json!({
            "title": "Zugspitze",
            "extract": "  Die Zugspitze ist der höchste Gipfel Deutschlands.  ",
            "fullurl": "https://de.wikipedia.org/wiki/Zugspitze",
            "pageprops": {"wikibase_item": "Q3375", "infoboxes": ["Infobox Berg"]},
            "categories": [{"title": "Kategorie:Berg in Bayern"}, {"title": "Category:Mountains"}],
            "coordinates": [{"lat": 47.421, "lon": 10.985}],
            "links": [{"title": "Wetterstein"}, {"title": "Garmisch-Partenkirchen"}],
            "thumbnail": {"source": "https://upload.wikimedia.org/zugspitze.jpg"},
            "langlinks": [{"lang": "en", "title": "Zugspitze"}]
        });

        let page = RawPage::decode(&raw, Lang::De).unwrap();
        assert_eq!(page.title.as_deref(), Some("Zugspitze"));
        assert_eq!(
            page.extract.as_deref(),
            Some("Die Zugspitze ist der höchste Gipfel Deutschlands.")
        );
        assert_eq!(page.wikidata_id.as_deref(), Some("Q3375"));
        assert_eq!(page.infobox_type.as_deref(), Some("Infobox Berg"));
        assert_eq!(page.categories, vec!["Berg in Bayern", "Mountains"]);
        assert_eq!(page.internal_links.len(), 2);
        assert_eq!(page.coordinates, Some(GeoPoint::new(47.421, 10.985)));
        assert_eq!(page.langlinks[0].lang, "en");
        assert!(!page.missing);
    }

    #[test]
    fn test_decode_empty_object() {
        let page = RawPage::decode(&json!({}), Lang::En).unwrap();
        assert_eq!(page, RawPage::default());
    }

    #[test]
    fn test_non_object_is_structural_error() {
        let err = RawPage::decode(&json!(["not", "a", "page"]), Lang::En).unwrap_err();
        assert_eq!(err.lang(), Some(Lang::En));
        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn test_non_string_title_is_structural_error() {
        let err = RawPage::decode(&json!({"title": 42}), Lang::De).unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_coordinate_strings_parse() {
        let raw = json!({"coordinates": [{"lat": "48.137", "lon": "11.575"}]});
        let page = RawPage::decode(&raw, Lang::De).unwrap();
        assert_eq!(page.coordinates, Some(GeoPoint::new(48.137, 11.575)));
    }

    #[test]
    fn test_single_axis_leaves_coordinates_unset() {
        let raw = json!({"coordinates": [{"lat": 48.137}]});
        assert_eq!(RawPage::decode(&raw, Lang::De).unwrap().coordinates, None);

        let raw = json!({"coordinates": [{"lat": 48.137, "lon": "east"}]});
        assert_eq!(RawPage::decode(&raw, Lang::De).unwrap().coordinates, None);
    }

    #[test]
    fn test_malformed_entries_skipped() {
        let raw = json!({
            "title": "Berlin",
            "categories": ["Kategorie:Hauptstadt", {"title": ""}, {"title": "Kategorie:Ort"}, {"ns": 14}],
            "links": "Brandenburg"
        });
        let page = RawPage::decode(&raw, Lang::De).unwrap();
        assert_eq!(page.categories, vec!["Ort"]);
        assert!(page.internal_links.is_empty());
        assert_eq!(page.title.as_deref(), Some("Berlin"));
    }

    #[test]
    fn test_legacy_langlink_title_key() {
        let raw = json!({"langlinks": [{"lang": "en", "*": "Munich"}, {"lang": "fr"}]});
        let page = RawPage::decode(&raw, Lang::De).unwrap();
        assert_eq!(
            page.langlinks,
            vec![LangLink {
                lang: "en".to_string(),
                title: "Munich".to_string()
            }]
        );
    }

    #[test]
    fn test_missing_flag() {
        let v1 = json!({"ns": 0, "title": "Xyzzy", "missing": ""});
        let v2 = json!({"title": "Xyzzy", "missing": true});
        assert!(RawPage::decode(&v1, Lang::De).unwrap().missing);
        assert!(RawPage::decode(&v2, Lang::De).unwrap().missing);
    }

    #[test]
    fn test_unwrap_response_envelopes() {
        let bare = json!({"title": "Bonn"});
        assert_eq!(unwrap_response(&bare), Some(&bare));

        let keyed = json!({"query": {"pages": {"3295": {"title": "Bonn"}}}});
        assert_eq!(unwrap_response(&keyed).unwrap()["title"], "Bonn");

        let listed = json!({"batchcomplete": true, "query": {"pages": [{"title": "Bonn"}]}});
        assert_eq!(unwrap_response(&listed).unwrap()["title"], "Bonn");

        let empty = json!({"query": {"pages": []}});
        assert_eq!(unwrap_response(&empty), None);
    }

    #[test]
    fn test_strip_category_prefix() {
        assert_eq!(strip_category_prefix("Kategorie:Physiker"), "Physiker");
        assert_eq!(strip_category_prefix("Category:Physicists"), "Physicists");
        assert_eq!(strip_category_prefix("Physik"), "Physik");
    }

    #[test]
    fn test_category_prefix_only_stripped_at_start() {
        assert_eq!(
            strip_category_prefix("Liste:Kategorie:Physiker"),
            "Liste:Kategorie:Physiker"
        );
        assert_eq!(
            strip_category_prefix("Wikipedia Category:Stubs"),
            "Wikipedia Category:Stubs"
        );
        assert_eq!(strip_category_prefix("  Kategorie: Ulm "), "Ulm");
    }
}
