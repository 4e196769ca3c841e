//! Bilingual Wikipedia page normalization and linking
//!
//! This module turns already-fetched Wikipedia API responses into one
//! canonical record per entity:
//! - Decoding loosely structured page objects ([`raw`])
//! - First-write-wins accumulation across language passes ([`page`], [`merge`])
//! - Projection into the canonical output record ([`record`])
//! - Fallback filling from LLM prompt metadata ([`fallback`])
//! - DBpedia URI derivation ([`identifier`])
//! - Per-entity and batch orchestration ([`resolver`])
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use wikibridge::models::Lang;
//! use wikibridge::wikipedia::{resolve, EntityLookup};
//!
//! let lookup = EntityLookup::new("Einstein")
//!     .with_page(Lang::De, json!({"title": "Albert Einstein"}))
//!     .with_page(Lang::En, json!({"title": "Albert Einstein"}));
//!
//! let record = resolve(&lookup).unwrap();
//! assert_eq!(record.url_de, "https://de.wikipedia.org/wiki/Albert_Einstein");
//! assert_eq!(record.dbpedia_uri, "http://dbpedia.org/resource/Albert_Einstein");
//! ```

pub mod error;
pub mod fallback;
pub mod identifier;
pub mod merge;
pub mod page;
pub mod raw;
pub mod record;
pub mod resolver;

pub use error::{WikipediaError, WikipediaResult};
pub use fallback::{enhance, fill_gaps, FallbackField, FallbackSource, PromptMetadata};
pub use identifier::{finalize_identifier, generate_dbpedia_uri, UriOrigin, DBPEDIA_RESOURCE_BASE};
pub use merge::{discover_cross_language, merge_page_data, synthesize_url};
pub use page::{set_if_empty, Blank, LocalizedPage, WikiPage};
pub use raw::{LangLink, RawPage};
pub use record::{create_empty_record, format_page, LinkedPage};
pub use resolver::{
    failure_record, resolve, resolve_batch, BatchOptions, EntityLookup, LanguagePage,
};
