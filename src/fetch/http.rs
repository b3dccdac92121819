// src/fetch/http.rs
// =============================================================================
// Downloads lodash sources over HTTP.
//
// raw.githubusercontent.com serves file contents directly, so a plain GET is
// enough. One Client is built up front and shared by every fetch (reqwest
// pools connections inside it). Nothing is retried: a failed request is
// reported once and the unit is skipped.
// =============================================================================

use super::{relative_path, Fetcher};
use crate::catalog::Identifier;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub struct HttpFetcher {
    client: Client,
    base: String,
}

impl HttpFetcher {
    pub fn new(base: &Url) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("failed to create HTTP client")?;

        Ok(HttpFetcher {
            client,
            base: base.as_str().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    fn location(&self, identifier: &Identifier) -> String {
        format!("{}/{}", self.base, relative_path(identifier))
    }

    async fn fetch(&self, identifier: &Identifier) -> Result<String> {
        let url = self.location(identifier);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP {} for {}", response.status(), url));
        }

        let content = response.text().await?;
        Ok(content)
    }
}
