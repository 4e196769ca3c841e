//! Per-entity page accumulator
//!
//! [`WikiPage`] collects fields from one or more raw lookups. Every write goes
//! through [`set_if_empty`], so a field that already holds a value is never
//! changed for the rest of the entity's processing.

use crate::models::{GeoPoint, Lang};

/// Values that can be "empty" for first-write-wins purposes
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for GeoPoint {
    fn is_blank(&self) -> bool {
        false
    }
}

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().map_or(true, Blank::is_blank)
    }
}

/// Write `value` into `slot` only if the slot is empty and the value is not.
///
/// Returns `true` when the slot was written.
pub fn set_if_empty<T: Blank>(slot: &mut T, value: T) -> bool {
    if !slot.is_blank() || value.is_blank() {
        return false;
    }
    *slot = value;
    true
}

/// Language-scoped part of a page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalizedPage {
    pub(crate) title: String,
    pub(crate) abstract_text: String,
    pub(crate) wiki_url: String,
}

impl LocalizedPage {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn abstract_text(&self) -> &str {
        &self.abstract_text
    }

    pub fn wiki_url(&self) -> &str {
        &self.wiki_url
    }
}

/// Merge target for one linked entity
///
/// Fields are only writable inside the crate, and only through
/// [`set_if_empty`]; readers use the accessors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WikiPage {
    pub(crate) de: LocalizedPage,
    pub(crate) en: LocalizedPage,

    pub(crate) wikidata_id: String,
    pub(crate) categories: Vec<String>,
    pub(crate) internal_links: Vec<String>,
    pub(crate) thumbnail_url: String,
    pub(crate) infobox_type: String,
    pub(crate) coordinates: Option<GeoPoint>,
}

impl WikiPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Language-scoped fields for `lang`
    pub fn localized(&self, lang: Lang) -> &LocalizedPage {
        match lang {
            Lang::De => &self.de,
            Lang::En => &self.en,
        }
    }

    pub(crate) fn localized_mut(&mut self, lang: Lang) -> &mut LocalizedPage {
        match lang {
            Lang::De => &mut self.de,
            Lang::En => &mut self.en,
        }
    }

    pub fn title(&self, lang: Lang) -> &str {
        self.localized(lang).title()
    }

    pub fn abstract_text(&self, lang: Lang) -> &str {
        self.localized(lang).abstract_text()
    }

    pub fn wiki_url(&self, lang: Lang) -> &str {
        self.localized(lang).wiki_url()
    }

    pub fn wikidata_id(&self) -> &str {
        &self.wikidata_id
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn internal_links(&self) -> &[String] {
        &self.internal_links
    }

    pub fn thumbnail_url(&self) -> &str {
        &self.thumbnail_url
    }

    pub fn infobox_type(&self) -> &str {
        &self.infobox_type
    }

    pub fn coordinates(&self) -> Option<GeoPoint> {
        self.coordinates
    }

    /// True when no pass has contributed anything yet
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_if_empty_string() {
        let mut slot = String::new();
        assert!(set_if_empty(&mut slot, "Einstein".to_string()));
        assert!(!set_if_empty(&mut slot, "Albert Einstein".to_string()));
        assert_eq!(slot, "Einstein");
    }

    #[test]
    fn test_set_if_empty_ignores_blank_value() {
        let mut slot = String::new();
        assert!(!set_if_empty(&mut slot, "   ".to_string()));
        assert!(slot.is_empty());
    }

    #[test]
    fn test_set_if_empty_list_replaces_whole() {
        let mut slot: Vec<String> = Vec::new();
        assert!(set_if_empty(&mut slot, vec!["Physiker".to_string()]));
        assert!(!set_if_empty(
            &mut slot,
            vec!["Physicists".to_string(), "Nobel laureates".to_string()]
        ));
        assert_eq!(slot, vec!["Physiker"]);
    }

    #[test]
    fn test_set_if_empty_option() {
        let mut slot: Option<GeoPoint> = None;
        assert!(!set_if_empty(&mut slot, None));
        assert!(set_if_empty(&mut slot, Some(GeoPoint::new(1.0, 2.0))));
        assert!(!set_if_empty(&mut slot, Some(GeoPoint::new(3.0, 4.0))));
        assert_eq!(slot, Some(GeoPoint::new(1.0, 2.0)));
    }

    #[test]
    fn test_new_page_is_empty() {
        let page = WikiPage::new();
        assert!(page.is_empty());
        assert_eq!(page.title(Lang::De), "");
        assert!(page.coordinates().is_none());
    }
}
