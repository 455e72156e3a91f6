//! Tool catalog clients
//!
//! The view only talks to the `ToolCatalog` trait. Which implementation sits
//! behind it is decided by configuration:
//!
//! - `http`: the explore REST API (`HttpToolCatalog`)
//! - `static`: a list from the config file (`StaticToolCatalog`)
//!
//! `MockCatalog` is kept for testing.

mod traits;
mod error;
mod http;
mod static_catalog;
mod mock;

pub use traits::ToolCatalog;
pub use error::{CatalogError, CatalogResult};
pub use http::{HttpToolCatalog, DEFAULT_TIMEOUT};
pub use static_catalog::{StaticToolCatalog, apply_filter, matches_filter};
pub use mock::{MockCatalog, MockMode};

use std::sync::Arc;
use std::time::Duration;

use crate::config::CatalogConfig;
use crate::logging::Logger;

/// Create a catalog for the given configuration
pub fn create_catalog(
    config: &CatalogConfig,
    logger: Arc<dyn Logger>,
) -> CatalogResult<Arc<dyn ToolCatalog>> {
    match config {
        CatalogConfig::Http {
            base_url,
            token,
            timeout_ms,
        } => {
            let timeout = timeout_ms.map(Duration::from_millis).unwrap_or(DEFAULT_TIMEOUT);
            let mut catalog = HttpToolCatalog::with_timeout(base_url.clone(), timeout, Arc::clone(&logger))?;
            if let Some(token) = token {
                catalog = catalog.with_token(token.clone());
            }
            logger.info(&format!("[Catalog] Using explore API at {}", catalog.base_url()));
            Ok(Arc::new(catalog))
        }
        CatalogConfig::Static { tools } => {
            logger.info(&format!("[Catalog] Using static catalog with {} tools", tools.len()));
            Ok(Arc::new(StaticToolCatalog::new(tools.clone(), logger)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NoOpLogger;
    use crate::types::ToolDescriptor;

    #[tokio::test]
    async fn test_create_static_catalog() {
        let config = CatalogConfig::Static {
            tools: vec![ToolDescriptor::new("A", "", "/a")],
        };
        let catalog = create_catalog(&config, Arc::new(NoOpLogger::new())).unwrap();
        assert_eq!(catalog.name(), "static");
        assert_eq!(catalog.get_tools(None).await.unwrap().tools.len(), 1);
    }

    #[test]
    fn test_create_http_catalog() {
        let config = CatalogConfig::Http {
            base_url: "http://localhost:7007/api/explore".to_string(),
            token: Some("secret".to_string()),
            timeout_ms: Some(2_000),
        };
        let catalog = create_catalog(&config, Arc::new(NoOpLogger::new())).unwrap();
        assert_eq!(catalog.name(), "http");
    }

    #[test]
    fn test_create_http_catalog_rejects_empty_url() {
        let config = CatalogConfig::Http {
            base_url: String::new(),
            token: None,
            timeout_ms: None,
        };
        assert!(create_catalog(&config, Arc::new(NoOpLogger::new())).is_err());
    }
}
