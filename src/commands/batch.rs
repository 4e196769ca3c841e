use futures::stream::{self, StreamExt, TryStreamExt};
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::Lang;
use crate::wikipedia::{resolve_batch, EntityLookup, LanguagePage, PromptMetadata};

use super::{read_json, write_json};

/// One entity in a batch manifest
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
    pub label: String,

    #[serde(default)]
    pub pages: Vec<PageSource>,

    /// Prompt metadata as a loose mapping
    #[serde(default)]
    pub prompt: Option<Value>,
}

/// Where a cached page response comes from: a file or inline data
#[derive(Debug, Clone, Deserialize)]
pub struct PageSource {
    pub lang: Lang,

    /// Path relative to the manifest's directory
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default)]
    pub data: Option<Value>,
}

/// Load a manifest and all page files it references.
///
/// Page files are read with at most `max_concurrency` entities in flight;
/// the result keeps manifest order.
pub async fn load_manifest(path: &Path, max_concurrency: usize) -> Result<Vec<EntityLookup>> {
    let manifest = read_json(path).await?;
    let entries: Vec<ManifestEntry> =
        serde_json::from_value(manifest).map_err(|e| Error::invalid_json(path, e))?;

    let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    tracing::info!(entities = entries.len(), manifest = %path.display(), "Loading batch manifest");

    stream::iter(entries)
        .map(|entry| load_entry(entry, &base_dir))
        .buffered(max_concurrency.max(1))
        .try_collect()
        .await
}

async fn load_entry(entry: ManifestEntry, base_dir: &Path) -> Result<EntityLookup> {
    let mut lookup = EntityLookup::new(entry.label);

    for source in entry.pages {
        let data = match (source.data, source.path) {
            (Some(data), _) => data,
            (None, Some(rel)) => read_json(&base_dir.join(rel)).await?,
            (None, None) => {
                return Err(Error::Manifest(format!(
                    "page entry for '{}' ({}) needs either 'path' or 'data'",
                    lookup.label, source.lang
                )))
            }
        };
        lookup.pages.push(LanguagePage::new(source.lang, data));
    }

    lookup.prompt = entry.prompt.as_ref().map(PromptMetadata::from_value);
    Ok(lookup)
}

pub async fn batch(input: PathBuf, output: Option<PathBuf>, config: &Config) -> Result<()> {
    let lookups = load_manifest(&input, config.batch.max_concurrency).await?;
    let records = resolve_batch(&lookups, config.batch.options())?;

    write_json(&records, output.as_deref(), config.output.pretty).await
}
