//! Loaders that produce a [`FaqStore`].
//!
//! The matcher never reaches for a document on its own; callers pick a
//! source and hand the resulting store (or a [`crate::FaqHandle`]) to
//! whatever needs to answer questions.

use std::fmt;
use std::fs;
use std::future::Future;
use std::path::{Path, PathBuf};

use faq_core::{FaqStore, parse_document};

use crate::error::{Result, StoreError};

/// A loader for a FAQ document. Loading may be async (network) or finish
/// immediately (file, inline); callers await it either way.
pub trait FaqSource {
    /// Human-readable origin, used in logs and `stats`.
    fn describe(&self) -> String;

    fn load(&self) -> impl Future<Output = Result<FaqStore>> + Send;
}

/// A JSON document on the local filesystem.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FaqSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<FaqStore> {
        let json = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(parse_document(&json)?)
    }
}

/// A JSON document already held in memory.
#[derive(Debug, Clone)]
pub struct InlineSource {
    json: String,
}

impl InlineSource {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl FaqSource for InlineSource {
    fn describe(&self) -> String {
        "<inline>".to_string()
    }

    async fn load(&self) -> Result<FaqStore> {
        Ok(parse_document(&self.json)?)
    }
}

/// A JSON document served over HTTP(S), fetched once.
#[derive(Debug, Clone)]
pub struct RemoteSource {
    url: String,
    client: reqwest::Client,
}

impl RemoteSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn fetch(&self) -> Result<FaqStore> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        Ok(parse_document(&body)?)
    }
}

impl FaqSource for RemoteSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn load(&self) -> Result<FaqStore> {
        self.fetch().await
    }
}

/// Where a FAQ document lives, as given by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    File(PathBuf),
    Remote(String),
}

impl Location {
    /// `http://` and `https://` are remote; anything else is a path.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Location::Remote(trimmed.to_string())
        } else {
            Location::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::File(path) => write!(f, "{}", path.display()),
            Location::Remote(url) => f.write_str(url),
        }
    }
}

/// Load a store from `source`, logging what came back.
pub async fn load_source<S: FaqSource>(source: &S) -> Result<FaqStore> {
    let origin = source.describe();
    let store = source.load().await?;
    tracing::info!("loaded {} FAQ entries from {origin}", store.len());
    if store.duplicate_questions() > 0 {
        tracing::debug!(
            "{} duplicate questions in {origin} are shadowed by earlier entries",
            store.duplicate_questions()
        );
    }
    Ok(store)
}

/// Load a store from whichever source `location` names.
pub async fn load_location(location: &Location) -> Result<FaqStore> {
    match location {
        Location::File(path) => load_source(&JsonFileSource::new(path)).await,
        Location::Remote(url) => load_source(&RemoteSource::new(url)).await,
    }
}
