//! Optional `faq.toml` configuration.
//!
//! ```toml
//! data = "https://example.com/data/chat_data.json"
//! suggestion_limit = 3
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use faq_core::SUGGESTION_LIMIT;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};
use crate::source::Location;

/// Where the page has always looked for its FAQ document.
pub const DEFAULT_DATA: &str = "data/chat_data.json";

const CONFIG_ENV: &str = "FAQ_CONFIG";
const DATA_ENV: &str = "FAQ_DATA";
const LOCAL_CONFIG: &str = "faq.toml";

fn default_data() -> String {
    DEFAULT_DATA.to_string()
}

fn default_suggestion_limit() -> usize {
    SUGGESTION_LIMIT
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// File path or http(s) URL of the FAQ document.
    #[serde(default = "default_data")]
    pub data: String,

    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: default_data(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path. A missing file is an error here.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Find and load the config: `explicit`, then `$FAQ_CONFIG`, then
    /// `./faq.toml` if present, otherwise defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = resolve_config_path(explicit) {
            return Self::load(&path);
        }
        let local = Path::new(LOCAL_CONFIG);
        if local.is_file() {
            return Self::load(local);
        }
        Ok(Self::default())
    }

    fn validate(&self) -> Result<()> {
        if self.data.trim().is_empty() {
            return Err(StoreError::Config("`data` must not be empty".into()));
        }
        if self.suggestion_limit == 0 {
            return Err(StoreError::Config(
                "`suggestion_limit` must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Document location: `flag`, then `$FAQ_DATA`, then the `data` key.
    pub fn data_location(&self, flag: Option<&str>) -> Location {
        let env_data = env::var(DATA_ENV).ok();
        resolve_data(flag, env_data.as_deref(), &self.data)
    }
}

/// Explicit config path, falling back to `$FAQ_CONFIG`.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| env::var(CONFIG_ENV).ok().map(PathBuf::from))
}

fn resolve_data(flag: Option<&str>, env_data: Option<&str>, configured: &str) -> Location {
    let raw = flag
        .filter(|s| !s.trim().is_empty())
        .or(env_data.filter(|s| !s.trim().is_empty()))
        .unwrap_or(configured);
    Location::parse(raw)
}
