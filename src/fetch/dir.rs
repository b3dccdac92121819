// src/fetch/dir.rs
// Reads lodash sources from a local checkout laid out as `{group}/{member}.js`.

use super::{relative_path, Fetcher};
use crate::catalog::Identifier;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirFetcher { root: root.into() }
    }

    fn path(&self, identifier: &Identifier) -> PathBuf {
        self.root.join(relative_path(identifier))
    }
}

#[async_trait]
impl Fetcher for DirFetcher {
    fn location(&self, identifier: &Identifier) -> String {
        self.path(identifier).display().to_string()
    }

    async fn fetch(&self, identifier: &Identifier) -> Result<String> {
        let path = self.path(identifier);
        tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))
    }
}
