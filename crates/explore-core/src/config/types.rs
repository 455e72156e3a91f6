//! Configuration types

use serde::{Deserialize, Serialize};

use super::traits::{ConfigError, ConfigResult};
use crate::types::ToolDescriptor;

/// Title used when the view config does not set one
pub const DEFAULT_TITLE: &str = "Tools";

/// How card images are fitted into their frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFit {
    Cover,
    Contain,
}

/// Presentation inputs of the explore view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreViewConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_fit: Option<ImageFit>,
    #[serde(default)]
    pub show_tags_filter: bool,
    #[serde(default)]
    pub show_lifecycle_filter: bool,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for ExploreViewConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            image_fit: None,
            show_tags_filter: false,
            show_lifecycle_filter: false,
        }
    }
}

impl ExploreViewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_image_fit(mut self, fit: ImageFit) -> Self {
        self.image_fit = Some(fit);
        self
    }

    pub fn with_tags_filter(mut self, show: bool) -> Self {
        self.show_tags_filter = show;
        self
    }

    pub fn with_lifecycle_filter(mut self, show: bool) -> Self {
        self.show_lifecycle_filter = show;
        self
    }
}

/// Which catalog backs the view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CatalogConfig {
    /// The explore REST API
    #[serde(rename_all = "camelCase")]
    Http {
        base_url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        token: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timeout_ms: Option<u64>,
    },
    /// A fixed list of tools
    Static {
        #[serde(default)]
        tools: Vec<ToolDescriptor>,
    },
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig::Static { tools: Vec::new() }
    }
}

/// Top-level configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExploreConfig {
    #[serde(default)]
    pub view: ExploreViewConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl ExploreConfig {
    /// Reject settings no catalog can be built from
    pub fn validate(&self) -> ConfigResult<()> {
        if let CatalogConfig::Http {
            ref base_url,
            timeout_ms,
            ..
        } = self.catalog
        {
            if base_url.trim().is_empty() {
                return Err(ConfigError::Invalid("http catalog requires a baseUrl".to_string()));
            }
            if timeout_ms == Some(0) {
                return Err(ConfigError::Invalid("timeoutMs must be greater than zero".to_string()));
            }
        }
        Ok(())
    }
}
