//! CLI for the nvdefaults scraper.

use anyhow::{Context, Result};
use clap::Parser;
use nvdefaults_core::{config, defaults, fetch, output};
use std::fs;
use std::path::PathBuf;

/// Scrape firmware NVRAM default variables into a JSON document.
///
/// With no flags, fetches the configured upstream `defaults.c`, extracts
/// variable names, defaults, and descriptions, and writes the document to
/// the configured output path.
#[derive(Debug, Parser)]
#[command(name = "nvdefaults")]
#[command(about = "Scrape firmware NVRAM default variables into JSON", long_about = None)]
pub struct Cli {
    /// Override the source URL from the config file.
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Override the output path from the config file.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Parse a local copy of the defaults source instead of fetching.
    #[arg(long, value_name = "PATH")]
    pub from_file: Option<PathBuf>,
}

pub fn run_from_args() -> Result<()> {
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    let source_url = cli.url.unwrap_or(cfg.source_url);
    let output_path = cli.output.unwrap_or(cfg.output_path);

    let text = match &cli.from_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read local defaults source: {}", path.display()))?,
        None => {
            tracing::info!("fetching defaults from {}", source_url);
            fetch::fetch_text(&source_url)?
        }
    };

    let vars = defaults::parse_defaults(&text);
    output::write_defaults(&vars, &output_path)?;
    println!("{} variables written to {}", vars.len(), output_path.display());

    Ok(())
}
