//! In-memory configuration provider

use async_trait::async_trait;
use parking_lot::RwLock;

use super::traits::{ConfigProvider, ConfigResult};
use super::types::ExploreConfig;

/// In-memory configuration provider for testing
#[derive(Debug, Default)]
pub struct MemoryConfigProvider {
    config: RwLock<ExploreConfig>,
}

impl MemoryConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExploreConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }
}

#[async_trait]
impl ConfigProvider for MemoryConfigProvider {
    async fn load(&self) -> ConfigResult<ExploreConfig> {
        Ok(self.config.read().clone())
    }

    async fn save(&self, config: &ExploreConfig) -> ConfigResult<()> {
        *self.config.write() = config.clone();
        Ok(())
    }
}
