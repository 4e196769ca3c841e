use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wikibridge::commands::{self, ResolveParams};
use wikibridge::config::Config;

#[derive(Parser)]
#[command(
    name = "wikibridge",
    version,
    about = "Merge cached Wikipedia responses into canonical, DBpedia-linked entity records",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json); overrides the config file
    #[arg(long, global = true)]
    log_format: Option<String>,

    /// Path to a TOML config file (defaults to environment variables)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one entity from cached page responses
    Resolve {
        /// Label as extracted from the input text
        #[arg(short, long)]
        label: String,

        /// German page response (JSON)
        #[arg(long)]
        de: Option<PathBuf>,

        /// English page response (JSON)
        #[arg(long)]
        en: Option<PathBuf>,

        /// Prompt fallback metadata (JSON)
        #[arg(short, long)]
        prompt: Option<PathBuf>,

        /// Merge the English response first
        #[arg(long, default_value = "false")]
        en_first: bool,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Resolve every entity listed in a batch manifest
    Batch {
        /// Manifest file (JSON array of entities)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the configured concurrency for loading page files
        #[arg(long)]
        max_concurrency: Option<usize>,
    },

    /// Print the DBpedia URI for an English title
    Uri {
        /// English Wikipedia title
        title: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    if let Some(format) = cli.log_format {
        config.logging.format = format;
        config.validate()?;
    }

    // Initialize tracing/logging
    setup_tracing(&config.logging.format, &config.logging.level, cli.verbose)?;

    let result = match cli.command {
        Commands::Resolve {
            label,
            de,
            en,
            prompt,
            en_first,
            output,
        } => {
            tracing::debug!(label = %label, de = ?de, en = ?en, "Starting resolve command");
            let params = ResolveParams {
                label,
                de,
                en,
                prompt,
                output,
                en_first,
            };
            commands::resolve(params, &config).await
        }

        Commands::Batch {
            input,
            output,
            max_concurrency,
        } => {
            if let Some(n) = max_concurrency {
                config.batch.max_concurrency = n;
                config.validate()?;
            }
            tracing::info!(
                input = %input.display(),
                max_concurrency = config.batch.max_concurrency,
                fail_fast = config.batch.fail_fast,
                "Starting batch command"
            );
            commands::batch(input, output, &config).await
        }

        Commands::Uri { title } => commands::uri(&title),
    };

    if let Err(e) = &result {
        tracing::error!(
            error = %e,
            category = e.category().as_str(),
            recoverable = e.is_recoverable(),
            "Command failed"
        );
    }
    Ok(result?)
}

fn setup_tracing(format: &str, level: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("wikibridge=debug,info")
    } else {
        tracing_subscriber::EnvFilter::try_new(format!("wikibridge={level},warn"))?
    };

    // stdout carries the JSON result
    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
