use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
    Http(reqwest::Error),
    Status {
        url: String,
        status: u16,
    },
    Config(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            StoreError::Json(e) => write!(f, "invalid FAQ document: {e}"),
            StoreError::Http(e) => write!(f, "HTTP error: {e}"),
            StoreError::Status { url, status } => {
                write!(f, "fetching {url} returned HTTP {status}")
            }
            StoreError::Config(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io { source, .. } => Some(source),
            StoreError::Json(e) => Some(e),
            StoreError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        StoreError::Http(e)
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(e: toml::de::Error) -> Self {
        StoreError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_every_variant_is_reachable_from_its_source() {
        let io: StoreError = StoreError::Io {
            path: PathBuf::from("data/chat_data.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(io.to_string().contains("data/chat_data.json"));
        assert!(io.source().is_some());

        let json: StoreError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(json.to_string().starts_with("invalid FAQ document"));
        assert!(json.source().is_some());

        let config: StoreError = toml::from_str::<toml::Value>("= nope").unwrap_err().into();
        assert!(matches!(config, StoreError::Config(_)));
        assert!(config.source().is_none());

        let status = StoreError::Status {
            url: "http://h/x.json".into(),
            status: 404,
        };
        assert_eq!(status.to_string(), "fetching http://h/x.json returned HTTP 404");

        // Exhaustive: adding a variant without a producer shows up here.
        for e in [io, json, config, status] {
            match e {
                StoreError::Io { .. }
                | StoreError::Json(_)
                | StoreError::Http(_)
                | StoreError::Status { .. }
                | StoreError::Config(_) => {}
            }
        }
    }
}
