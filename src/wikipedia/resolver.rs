//! Per-entity resolution: merge, format, enhance, finalize
//!
//! Each [`EntityLookup`] is resolved by exactly one call chain that owns its
//! [`WikiPage`]; nothing is shared between entities.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use super::error::{WikipediaError, WikipediaResult};
use super::fallback::{enhance, PromptMetadata};
use super::identifier::finalize_identifier;
use super::page::WikiPage;
use super::raw::{is_missing_page, unwrap_response};
use super::record::LinkedPage;
use crate::models::{Lang, LinkStatus};

/// One already-fetched API response for one language edition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguagePage {
    pub lang: Lang,
    pub data: Value,
}

impl LanguagePage {
    pub fn new(lang: Lang, data: Value) -> Self {
        Self { lang, data }
    }
}

/// Everything known about one entity before merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityLookup {
    /// Label as extracted from the input text
    pub label: String,

    /// Responses in merge order; the first page to supply a language-agnostic
    /// field wins it
    #[serde(default)]
    pub pages: Vec<LanguagePage>,

    /// Fallback metadata from the extraction prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<PromptMetadata>,
}

impl EntityLookup {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Append a response for `lang`
    pub fn with_page(mut self, lang: Lang, data: Value) -> Self {
        self.pages.push(LanguagePage::new(lang, data));
        self
    }

    pub fn with_prompt(mut self, prompt: PromptMetadata) -> Self {
        self.prompt = Some(prompt);
        self
    }
}

/// Batch behavior on structural merge failures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// Abort the batch on the first failing entity instead of emitting an
    /// `error` placeholder for it
    pub fail_fast: bool,
}

/// Resolve one entity into its canonical record.
///
/// Returns `Err` only for a structural merge failure.
#[instrument(skip(lookup), fields(label = %lookup.label))]
pub fn resolve(lookup: &EntityLookup) -> WikipediaResult<LinkedPage> {
    let mut record = match merge_pages(lookup)? {
        Merged::Page(page) => LinkedPage::from_page(&page),
        Merged::NoSource => LinkedPage::empty(&lookup.label, LinkStatus::NoSource, None),
        Merged::NotFound => LinkedPage::empty(&lookup.label, LinkStatus::NotFound, None),
    };

    if let Some(prompt) = &lookup.prompt {
        enhance(&mut record, prompt);
    }
    let origin = finalize_identifier(&mut record);
    debug!(status = %record.status, origin = ?origin, "Resolved entity");

    Ok(record)
}

/// Outcome of merging all responses of one entity
enum Merged {
    Page(WikiPage),
    /// No response contained a page object
    NoSource,
    /// Pages existed but were flagged missing or carried no data
    NotFound,
}

fn merge_pages(lookup: &EntityLookup) -> WikipediaResult<Merged> {
    let mut page = WikiPage::new();
    let mut saw_page = false;

    for LanguagePage { lang, data } in &lookup.pages {
        let Some(raw) = unwrap_response(data) else {
            debug!(lang = %lang, "Response contains no pages");
            continue;
        };
        saw_page = true;
        if is_missing_page(raw) {
            debug!(lang = %lang, "Page reported missing");
            continue;
        }
        page.merge(raw, *lang)?;
    }

    Ok(if !saw_page {
        Merged::NoSource
    } else if page.is_empty() {
        Merged::NotFound
    } else {
        Merged::Page(page)
    })
}

/// Placeholder for an entity whose lookup or merge failed.
pub fn failure_record(label: &str, err: &WikipediaError) -> LinkedPage {
    LinkedPage::empty(label, err.status(), Some(err.to_string()))
}

/// Resolve many entities, keeping input order.
///
/// A structural failure affects only its own entity: it becomes an `error`
/// placeholder unless `fail_fast` is set.
pub fn resolve_batch(
    lookups: &[EntityLookup],
    options: BatchOptions,
) -> WikipediaResult<Vec<LinkedPage>> {
    let mut records = Vec::with_capacity(lookups.len());
    let mut failures = 0usize;

    for lookup in lookups {
        match resolve(lookup) {
            Ok(record) => records.push(record),
            Err(e) if options.fail_fast => {
                error!(label = %lookup.label, error = %e, "Aborting batch");
                return Err(e);
            }
            Err(e) => {
                error!(label = %lookup.label, error = %e, "Entity failed, emitting placeholder");
                failures += 1;
                records.push(failure_record(&lookup.label, &e));
            }
        }
    }

    info!(
        total = lookups.len(),
        found = records.iter().filter(|r| r.is_found()).count(),
        failed = failures,
        "Batch resolved"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_without_pages() {
        let record = resolve(&EntityLookup::new("Zugspitze")).unwrap();
        assert_eq!(record.status, LinkStatus::NoSource);
        assert_eq!(record.label_de, "Zugspitze");
        assert_eq!(record.dbpedia_uri, "");
    }

    #[test]
    fn test_resolve_empty_envelope_is_no_source() {
        for data in [json!({"query": {"pages": []}}), json!({"query": {"pages": {}}})] {
            let lookup = EntityLookup::new("Bonn").with_page(Lang::De, data);
            let record = resolve(&lookup).unwrap();
            assert_eq!(record.status, LinkStatus::NoSource);
            assert_eq!(record.label_de, "Bonn");
        }
    }

    #[test]
    fn test_resolve_missing_beats_empty_envelope() {
        let lookup = EntityLookup::new("Xyzzy")
            .with_page(Lang::De, json!({"query": {"pages": []}}))
            .with_page(Lang::En, json!({"title": "Xyzzy", "missing": ""}));
        let record = resolve(&lookup).unwrap();
        assert_eq!(record.status, LinkStatus::NotFound);
    }

    #[test]
    fn test_resolve_all_missing() {
        let lookup = EntityLookup::new("Xyzzy")
            .with_page(Lang::De, json!({"query": {"pages": {"-1": {"title": "Xyzzy", "missing": ""}}}}));
        let record = resolve(&lookup).unwrap();
        assert_eq!(record.status, LinkStatus::NotFound);
        assert_eq!(record.label_de, "Xyzzy");
    }

    #[test]
    fn test_resolve_missing_with_prompt_fallback() {
        let lookup = EntityLookup::new("Xyzzy")
            .with_page(Lang::De, json!({"title": "Xyzzy", "missing": true}))
            .with_prompt(PromptMetadata {
                label_en: Some("Xyzzy (game)".to_string()),
                ..Default::default()
            });
        let record = resolve(&lookup).unwrap();
        assert_eq!(record.status, LinkStatus::NotFound);
        assert_eq!(record.label_en, "Xyzzy (game)");
        assert_eq!(record.dbpedia_uri, "http://dbpedia.org/resource/Xyzzy_(game)");
    }

    #[test]
    fn test_resolve_bilingual() {
        let lookup = EntityLookup::new("Einstein")
            .with_page(
                Lang::De,
                json!({
                    "title": "Albert Einstein",
                    "extract": "Albert Einstein war ein theoretischer Physiker.",
                    "langlinks": [{"lang": "en", "title": "Albert Einstein"}]
                }),
            )
            .with_page(
                Lang::En,
                json!({"title": "Albert Einstein", "extract": "Albert Einstein was a physicist."}),
            );
        let record = resolve(&lookup).unwrap();
        assert_eq!(record.status, LinkStatus::Found);
        assert_eq!(record.extract, "Albert Einstein war ein theoretischer Physiker.");
        assert_eq!(record.url_en, "https://en.wikipedia.org/wiki/Albert_Einstein");
        assert_eq!(record.dbpedia_uri, "http://dbpedia.org/resource/Albert_Einstein");
    }

    #[test]
    fn test_batch_isolates_failures() {
        let lookups = vec![
            EntityLookup::new("Bonn").with_page(Lang::De, json!({"title": "Bonn"})),
            EntityLookup::new("Broken").with_page(Lang::En, json!(42)),
            EntityLookup::new("Köln").with_page(Lang::De, json!({"title": "Köln"})),
        ];

        let records = resolve_batch(&lookups, BatchOptions::default()).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records[0].is_found());
        assert_eq!(records[1].status, LinkStatus::Error);
        assert_eq!(records[1].label_de, "Broken");
        assert!(records[1].error.as_deref().unwrap().contains("en pass"));
        assert_eq!(records[2].label_de, "Köln");
    }

    #[test]
    fn test_batch_fail_fast() {
        let lookups = vec![EntityLookup::new("Broken").with_page(Lang::De, json!([]))];
        let result = resolve_batch(&lookups, BatchOptions { fail_fast: true });
        assert!(result.is_err());
    }

    #[test]
    fn test_failure_record_status() {
        let err = WikipediaError::Timeout {
            timeout_secs: 30.0,
            url: None,
        };
        let record = failure_record("Rhein", &err);
        assert_eq!(record.status, LinkStatus::Timeout);
        assert!(record.error.is_some());
    }
}
