//! Environment overrides

use super::types::{CatalogConfig, ExploreConfig};

/// Base URL of the explore API; switches the catalog to HTTP
pub const ENV_BACKEND_URL: &str = "EXPLORE_BACKEND_URL";
/// Bearer token sent to the explore API
pub const ENV_BACKEND_TOKEN: &str = "EXPLORE_BACKEND_TOKEN";

/// Apply overrides from the process environment
pub fn apply_env_overrides(config: ExploreConfig) -> ExploreConfig {
    apply_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
///
/// A non-empty `EXPLORE_BACKEND_URL` replaces the catalog with an HTTP
/// catalog, keeping a configured timeout. `EXPLORE_BACKEND_TOKEN` sets the
/// token of an HTTP catalog and is ignored for a static one.
pub fn apply_overrides_from<F>(mut config: ExploreConfig, lookup: F) -> ExploreConfig
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = non_empty(ENV_BACKEND_URL) {
        let (token, timeout_ms) = match config.catalog {
            CatalogConfig::Http { token, timeout_ms, .. } => (token, timeout_ms),
            CatalogConfig::Static { .. } => (None, None),
        };
        config.catalog = CatalogConfig::Http {
            base_url: url,
            token,
            timeout_ms,
        };
    }

    if let Some(new_token) = non_empty(ENV_BACKEND_TOKEN) {
        if let CatalogConfig::Http { ref mut token, .. } = config.catalog {
            *token = Some(new_token);
        }
    }

    config
}
