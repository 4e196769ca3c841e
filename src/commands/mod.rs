//! CLI command implementations
//!
//! Commands only read already-fetched responses from disk; no network access
//! happens here.

pub mod batch;
pub mod resolve;

use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use crate::error::{Error, Result};

// Re-export command functions for convenience
pub use batch::{batch, load_manifest, ManifestEntry, PageSource};
pub use resolve::{resolve, uri, ResolveParams};

/// Read and parse a JSON file
pub async fn read_json(path: &Path) -> Result<Value> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::file(path, e))?;
    serde_json::from_str(&content).map_err(|e| Error::invalid_json(path, e))
}

/// Serialize `value` to `output`, or to stdout when no path is given
pub async fn write_json<T: Serialize>(value: &T, output: Option<&Path>, pretty: bool) -> Result<()> {
    let content = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| Error::file(parent, e))?;
            }
            tokio::fs::write(path, content)
                .await
                .map_err(|e| Error::file(path, e))?;
            tracing::info!(path = %path.display(), "Wrote output");
        }
        None => println!("{content}"),
    }
    Ok(())
}
