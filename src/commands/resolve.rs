use std::path::PathBuf;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::Lang;
use crate::wikipedia::{self, generate_dbpedia_uri, EntityLookup, PromptMetadata};

use super::{read_json, write_json};

/// Inputs of the `resolve` command
#[derive(Debug, Clone, Default)]
pub struct ResolveParams {
    pub label: String,
    pub de: Option<PathBuf>,
    pub en: Option<PathBuf>,
    pub prompt: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// Merge the English response before the German one
    pub en_first: bool,
}

/// Resolve one entity from cached page files
pub async fn resolve(params: ResolveParams, config: &Config) -> Result<()> {
    let mut sources = vec![(Lang::De, params.de), (Lang::En, params.en)];
    if params.en_first {
        sources.reverse();
    }

    let mut lookup = EntityLookup::new(params.label);
    for (lang, path) in sources {
        if let Some(path) = path {
            lookup = lookup.with_page(lang, read_json(&path).await?);
        }
    }
    if let Some(path) = params.prompt {
        lookup = lookup.with_prompt(PromptMetadata::from_value(&read_json(&path).await?));
    }

    let record = wikipedia::resolve(&lookup)?;
    tracing::info!(label = %lookup.label, status = %record.status, uri = %record.dbpedia_uri, "Resolved");

    write_json(&record, params.output.as_deref(), config.output.pretty).await
}

/// Print the DBpedia URI for a title
pub fn uri(title: &str) -> Result<()> {
    let uri = generate_dbpedia_uri(title);
    if uri.is_empty() {
        return Err(Error::other("title must not be blank"));
    }
    println!("{uri}");
    Ok(())
}
