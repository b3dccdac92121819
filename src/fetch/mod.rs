// src/fetch/mod.rs
// =============================================================================
// Retrieves the raw source text for a catalog entry.
//
// Submodules:
// - http: downloads `{base}/{group}/{member}.js` with reqwest
// - dir: reads the same layout from a local lodash checkout
//
// Both sit behind the Fetcher trait so the pipeline (and its tests) do not
// care where the text comes from.
// =============================================================================

mod dir;
mod http;

use crate::catalog::Identifier;
use anyhow::Result;
use async_trait::async_trait;

pub use dir::DirFetcher;
pub use http::HttpFetcher;

/// A source of raw JavaScript text, one file per identifier
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Where the text for `identifier` is read from (URL or path)
    fn location(&self, identifier: &Identifier) -> String;

    /// Returns the text, or an error for any network, HTTP or I/O failure
    async fn fetch(&self, identifier: &Identifier) -> Result<String>;
}

// `{group}/{member}.js`, shared by both fetchers
fn relative_path(identifier: &Identifier) -> String {
    format!("{}/{}.js", identifier.group, identifier.member)
}
