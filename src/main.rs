// src/main.rs
// =============================================================================
// Entry point of lodash-docgen.
//
// What happens here:
// 1. Parse command-line arguments and set up logging
// 2. Fetch and extract every catalog entry (in parallel)
// 3. Render the document and index (sequentially, in catalog order)
// 4. Write the document, print the index or JSON report
// 5. Exit with 0 = everything documented, 1 = some units skipped, 2 = error
//
// Failure policy: a unit that cannot be fetched or has no doc comment is
// skipped with a warning, the rest of the run continues, and the skipped
// units are listed at the end.
// =============================================================================

mod catalog;
mod cli;
mod error;
mod extract;
mod fetch;
mod logging;
mod pipeline;
mod render;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use fetch::{DirFetcher, Fetcher, HttpFetcher};
use render::{RenderConfig, DEFAULT_INDEX_LINK_BASE};
use std::fs;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let catalog = catalog::catalog()?;

    let fetcher: Box<dyn Fetcher> = match &cli.source_dir {
        Some(dir) => {
            info!("reading {} sources from {}", catalog.len(), dir.display());
            Box::new(DirFetcher::new(dir))
        }
        None => {
            info!("fetching {} sources from {}", catalog.len(), cli.base_url);
            Box::new(HttpFetcher::new(&cli.base_url)?)
        }
    };

    let outcomes =
        pipeline::collect_units(&catalog, fetcher.as_ref(), usize::from(cli.concurrency)).await;
    let reports = report::build(&outcomes);
    let (units, failures) = pipeline::partition(outcomes);

    let config = RenderConfig {
        source_base_url: cli.base_url.as_str().trim_end_matches('/').to_string(),
        index_link_base: DEFAULT_INDEX_LINK_BASE.to_string(),
    };
    let rendered = render::render(&config, &units);

    fs::write(&cli.output, &rendered.document)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    info!(
        "documented {} of {} functions in {}",
        units.len(),
        catalog.len(),
        cli.output.display()
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else if let Some(path) = &cli.index_output {
        fs::write(path, &rendered.index)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("index written to {}", path.display());
    } else {
        println!("{}", rendered.index);
    }

    if failures.is_empty() {
        return Ok(0);
    }

    let skipped = reports.iter().filter(|r| !r.is_ok()).count();
    error!("{} unit(s) skipped:", skipped);
    for failure in &failures {
        error!("  {}", failure);
    }

    Ok(1)
}
