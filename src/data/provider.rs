//! Data providers for the five publication resources.

use std::path::PathBuf;

use crate::data::Category;
use crate::error::{FolioError, Result};

/// Source of the five publication resources.
///
/// `fetch` returns the raw JSON text for a resource, or `Ok(None)` when the
/// resource does not exist at the source. The freshness token is derived from
/// the current time by the caller; a provider with a caching layer in front
/// of it uses the token to defeat stale reads.
pub trait DataProvider: Send + Sync + std::fmt::Debug {
    /// Fetch the raw JSON for one resource.
    fn fetch(&self, category: Category, freshness: u64) -> Result<Option<String>>;
}

/// Reads resources from a local directory as `<dir>/<name>.json`.
#[derive(Debug, Clone)]
pub struct DirProvider {
    root: PathBuf,
}

impl DirProvider {
    /// Create a provider rooted at a data directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DataProvider for DirProvider {
    fn fetch(&self, category: Category, _freshness: u64) -> Result<Option<String>> {
        let path = self.root.join(format!("{}.json", category.resource()));

        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FolioError::fetch(category.resource(), e.to_string())),
        }
    }
}

/// Fetches resources over HTTP as `<base>/<name>.json?v=<freshness>`.
///
/// The freshness query parameter defeats any caching layer between the viewer
/// and the data host.
#[derive(Debug)]
pub struct HttpProvider {
    base: String,
    client: reqwest::blocking::Client,
}

impl HttpProvider {
    /// Create a provider for a base URL.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl DataProvider for HttpProvider {
    fn fetch(&self, category: Category, freshness: u64) -> Result<Option<String>> {
        let name = category.resource();
        let url = format!("{}/{}.json?v={}", self.base, name, freshness);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| FolioError::fetch(name, e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = response
            .error_for_status()
            .map_err(|e| FolioError::fetch(name, e.to_string()))?;

        response
            .text()
            .map(Some)
            .map_err(|e| FolioError::fetch(name, e.to_string()))
    }
}
