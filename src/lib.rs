//! wikibridge - Bilingual Wikipedia normalization for entity linking
//!
//! Turns already-fetched German and English Wikipedia responses for an
//! extracted entity, plus optional LLM-provided fallback metadata, into one
//! canonical record with a DBpedia resource URI.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`wikipedia`] - Page decoding, first-write-wins merging, fallback filling,
//!   DBpedia URI derivation and the canonical output record
//! - [`models`] - Core data structures and types
//! - [`config`] - Configuration management and settings
//! - [`commands`] - CLI command implementations over cached responses
//! - [`error`] - Unified error type
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use wikibridge::prelude::*;
//!
//! let mut page = WikiPage::new();
//! page.merge(&json!({"title": "Zugspitze", "extract": "Höchster Berg Deutschlands."}), Lang::De)?;
//!
//! let mut record = LinkedPage::from_page(&page);
//! enhance(&mut record, &PromptMetadata {
//!     label_en: Some("Zugspitze".to_string()),
//!     ..Default::default()
//! });
//! finalize_identifier(&mut record);
//!
//! assert_eq!(record.dbpedia_uri, "http://dbpedia.org/resource/Zugspitze");
//! # Ok::<(), wikibridge::wikipedia::WikipediaError>(())
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod wikipedia;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, ErrorCategory, Result};
    pub use crate::models::{GeoPoint, Lang, LinkStatus};
    pub use crate::wikipedia::{
        enhance, finalize_identifier, resolve, resolve_batch, EntityLookup, LinkedPage,
        PromptMetadata, WikiPage, WikipediaError,
    };
}

// Direct re-exports for convenience
pub use models::{GeoPoint, Lang, LinkStatus};
pub use wikipedia::{EntityLookup, LinkedPage, WikiPage};
