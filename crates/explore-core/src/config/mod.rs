//! Configuration
//!
//! Supports multiple configuration sources:
//! - `MemoryConfigProvider`: In-memory for testing
//! - `FileConfigProvider`: YAML file-based (user level or explicit path)
//!
//! `apply_env_overrides` layers `EXPLORE_BACKEND_URL` / `EXPLORE_BACKEND_TOKEN`
//! on top of whatever was loaded.

mod types;
mod traits;
mod memory;
mod file;
mod env;

pub use types::{ExploreConfig, ExploreViewConfig, CatalogConfig, ImageFit, DEFAULT_TITLE};
pub use traits::{ConfigProvider, ConfigError, ConfigResult};
pub use memory::MemoryConfigProvider;
pub use file::FileConfigProvider;
pub use env::{apply_env_overrides, apply_overrides_from, ENV_BACKEND_URL, ENV_BACKEND_TOKEN};
