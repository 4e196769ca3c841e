//! Merge engine
//!
//! Applies decoded raw pages to a [`WikiPage`], one language pass at a time.
//!
//! # Ordering contract
//!
//! Language-scoped fields only come from their own pass (or from
//! cross-language discovery), so pass order does not matter for them.
//! Language-agnostic fields (Wikidata id, categories, links, thumbnail,
//! infobox type, coordinates) are taken from whichever pass supplies them
//! first. Callers that care about which edition wins must merge that edition
//! first.

use serde_json::Value;
use tracing::{debug, error};

use super::error::WikipediaResult;
use super::page::{set_if_empty, WikiPage};
use super::raw::{LangLink, RawPage};
use crate::models::Lang;

/// Merge one raw page mapping into `page` for the `lang` pass.
///
/// Missing or malformed sub-fields are skipped. Fails only when the raw data
/// is not a page object at all; in that case `page` is left untouched.
pub fn merge_page_data(page: &mut WikiPage, raw: &Value, lang: Lang) -> WikipediaResult<()> {
    let decoded = RawPage::decode(raw, lang).inspect_err(|e| {
        error!(lang = %lang, error = %e, "Error merging page data");
    })?;

    let written = merge_decoded(page, decoded, lang);
    debug!(lang = %lang, fields = written, "Merged page data");
    Ok(())
}

/// Merge an already decoded page. Returns the number of fields written.
pub fn merge_decoded(page: &mut WikiPage, raw: RawPage, lang: Lang) -> usize {
    let mut written = 0;

    let local = page.localized_mut(lang);
    written += usize::from(set_if_empty(&mut local.title, raw.title.unwrap_or_default()));
    written += usize::from(set_if_empty(
        &mut local.abstract_text,
        raw.extract.unwrap_or_default(),
    ));
    written += usize::from(set_if_empty(&mut local.wiki_url, raw.url.unwrap_or_default()));

    written += usize::from(set_if_empty(
        &mut page.wikidata_id,
        raw.wikidata_id.unwrap_or_default(),
    ));
    written += usize::from(set_if_empty(
        &mut page.infobox_type,
        raw.infobox_type.unwrap_or_default(),
    ));
    written += usize::from(set_if_empty(
        &mut page.thumbnail_url,
        raw.thumbnail_url.unwrap_or_default(),
    ));
    written += usize::from(set_if_empty(&mut page.categories, raw.categories));
    written += usize::from(set_if_empty(&mut page.internal_links, raw.internal_links));
    written += usize::from(set_if_empty(&mut page.coordinates, raw.coordinates));

    if discover_cross_language(page, &raw.langlinks, lang) {
        written += 1;
    }
    if synthesize_url(page, lang) {
        written += 1;
    }

    written
}

/// Cross-language discovery.
///
/// The only step where a pass writes the *other* language's slots: a `de`
/// pass may fill the `en` title and URL from its langlinks, and vice versa.
/// Links naming the pass's own language or an unsupported language are
/// ignored. Returns `true` if a title was discovered.
pub fn discover_cross_language(page: &mut WikiPage, links: &[LangLink], lang: Lang) -> bool {
    let target = lang.other();
    let Some(link) = links
        .iter()
        .find(|l| Lang::parse(&l.lang) == Some(target))
    else {
        return false;
    };

    let local = page.localized_mut(target);
    if !set_if_empty(&mut local.title, link.title.clone()) {
        return false;
    }
    set_if_empty(&mut local.wiki_url, target.article_url(&link.title));
    debug!(from = %lang, to = %target, title = %link.title, "Discovered cross-language title");
    true
}

/// Derive the article URL from the title when the URL slot is still empty.
pub fn synthesize_url(page: &mut WikiPage, lang: Lang) -> bool {
    let local = page.localized_mut(lang);
    if local.title.trim().is_empty() {
        return false;
    }
    let url = lang.article_url(&local.title);
    set_if_empty(&mut local.wiki_url, url)
}

impl WikiPage {
    /// Merge a raw page mapping for `lang`, see [`merge_page_data`].
    pub fn merge(&mut self, raw: &Value, lang: Lang) -> WikipediaResult<()> {
        merge_page_data(self, raw, lang)
    }
}
