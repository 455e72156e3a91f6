//! File-based configuration provider (YAML)
//!
//! The user-level file lives at `~/.config/explore/config.yaml`.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::traits::{ConfigProvider, ConfigResult};
use super::types::ExploreConfig;

/// Reads and writes the configuration from a YAML file
///
/// A missing file loads as the default configuration. Loaded content is
/// cached until `reload` or `save`.
///
/// # Example
///
/// ```no_run
/// use explore_core::config::FileConfigProvider;
///
/// let user_config = FileConfigProvider::user();
/// let explicit = FileConfigProvider::new("/etc/explore/config.yaml");
/// ```
pub struct FileConfigProvider {
    path: PathBuf,
    cache: RwLock<Option<ExploreConfig>>,
}

impl FileConfigProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// User-level config (~/.config/explore/config.yaml)
    pub fn user() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("explore").join("config.yaml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read_file(&self) -> ConfigResult<ExploreConfig> {
        if !self.path.exists() {
            return Ok(ExploreConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(ExploreConfig::default());
        }
        let config: ExploreConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn write_file(&self, config: &ExploreConfig) -> ConfigResult<()> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(config)?;
        fs::write(&self.path, content)?;

        *self.cache.write() = Some(config.clone());
        Ok(())
    }

    /// Reload from disk, dropping the cache
    pub fn reload(&self) -> ConfigResult<ExploreConfig> {
        let config = self.read_file()?;
        *self.cache.write() = Some(config.clone());
        Ok(config)
    }

    /// Copy the current file next to itself with a `.backup` suffix
    pub fn backup(&self) -> ConfigResult<Option<PathBuf>> {
        if !self.exists() {
            return Ok(None);
        }

        let backup_path = self.path.with_extension("yaml.backup");
        fs::copy(&self.path, &backup_path)?;
        Ok(Some(backup_path))
    }
}

impl std::fmt::Debug for FileConfigProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileConfigProvider")
            .field("path", &self.path)
            .field("exists", &self.exists())
            .finish()
    }
}

#[async_trait]
impl ConfigProvider for FileConfigProvider {
    async fn load(&self) -> ConfigResult<ExploreConfig> {
        if let Some(config) = self.cache.read().as_ref() {
            return Ok(config.clone());
        }
        self.reload()
    }

    async fn save(&self, config: &ExploreConfig) -> ConfigResult<()> {
        self.write_file(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CatalogConfig, ConfigError, ExploreViewConfig, ImageFit};
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let provider = FileConfigProvider::new(dir.path().join("config.yaml"));

        assert!(!provider.exists());
        assert_eq!(provider.load().await.unwrap(), ExploreConfig::default());
    }

    #[tokio::test]
    async fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let provider = FileConfigProvider::new(&path);

        let config = ExploreConfig {
            view: ExploreViewConfig::new()
                .with_title("Explore our tools")
                .with_image_fit(ImageFit::Cover)
                .with_tags_filter(true),
            catalog: CatalogConfig::Http {
                base_url: "http://localhost:7007/api/explore".to_string(),
                token: None,
                timeout_ms: None,
            },
        };
        provider.save(&config).await.unwrap();
        assert!(provider.exists());

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("imageFit: cover"));
        assert!(content.contains("type: http"));

        let fresh = FileConfigProvider::new(&path);
        assert_eq!(fresh.load().await.unwrap(), config);
    }

    #[tokio::test]
    async fn test_invalid_yaml_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "view: [not, a, map]").unwrap();

        let provider = FileConfigProvider::new(&path);
        assert!(matches!(provider.load().await, Err(ConfigError::Yaml(_))));
    }

    #[tokio::test]
    async fn test_http_catalog_without_base_url_is_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "catalog:\n  type: http\n  baseUrl: \"\"\n").unwrap();

        let provider = FileConfigProvider::new(&path);
        assert!(matches!(provider.load().await, Err(ConfigError::Invalid(_))));

        let bad = ExploreConfig {
            catalog: CatalogConfig::Http {
                base_url: String::new(),
                token: None,
                timeout_ms: None,
            },
            ..Default::default()
        };
        assert!(matches!(provider.save(&bad).await, Err(ConfigError::Invalid(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "catalog:\n  type: http\n  baseUrl: \"\"\n");
    }

    #[test]
    fn test_backup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let provider = FileConfigProvider::new(&path);

        assert!(provider.backup().unwrap().is_none());

        fs::write(&path, "view: {}").unwrap();
        let backup_path = provider.backup().unwrap().unwrap();
        assert!(backup_path.exists());
        assert!(backup_path.to_string_lossy().ends_with("config.yaml.backup"));
    }
}
