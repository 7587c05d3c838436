pub mod config;
pub mod error;
pub mod handle;
pub mod source;

pub use config::{Config, DEFAULT_DATA, resolve_config_path};
pub use error::{Result, StoreError};
pub use handle::{FaqHandle, LoadState};
pub use source::{
    FaqSource, InlineSource, JsonFileSource, Location, RemoteSource, load_location, load_source,
};
