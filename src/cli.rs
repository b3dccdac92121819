// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
// The list of documented functions is NOT configurable here: it lives in
// catalog.rs. These flags only decide where sources are read from and where
// the two outputs go.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;
use url::Url;

use crate::render::DEFAULT_SOURCE_BASE;

#[derive(Parser, Debug)]
#[command(
    name = "lodash-docgen",
    version = "0.1.0",
    about = "Generates markdown reference docs for lodash v3 from its JSDoc comments",
    long_about = "lodash-docgen fetches a fixed set of lodash v3 module sources, extracts the \
                  documentation comment of each function and renders a reference document plus \
                  a grouped index table."
)]
pub struct Cli {
    /// Where to write the reference document
    #[arg(short, long, default_value = "documentation.md")]
    pub output: PathBuf,

    /// Write the index to this file instead of printing it to stdout
    #[arg(long)]
    pub index_output: Option<PathBuf>,

    /// Base URL the sources are fetched from, as {base}/{group}/{member}.js
    ///
    /// Also used for the source link under every function heading.
    #[arg(long, default_value = DEFAULT_SOURCE_BASE, value_parser = parse_base_url)]
    pub base_url: Url,

    /// Read sources from a local lodash checkout instead of fetching them
    #[arg(long)]
    pub source_dir: Option<PathBuf>,

    /// Maximum number of sources fetched at the same time
    #[arg(short = 'j', long, default_value_t = 8, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: u16,

    /// Print a JSON report of every unit instead of the index
    #[arg(long)]
    pub json: bool,

    /// Log debug output (RUST_LOG overrides this)
    #[arg(short, long)]
    pub verbose: bool,
}

// Only http(s) bases make sense for fetching
fn parse_base_url(value: &str) -> Result<Url, String> {
    let url = Url::parse(value).map_err(|e| format!("invalid URL '{}': {}", value, e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported scheme '{}', expected http or https", other)),
    }
}
