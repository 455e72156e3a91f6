//! Catalog client for the explore REST API

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::error::{CatalogError, CatalogResult};
use super::traits::ToolCatalog;
use crate::logging::Logger;
use crate::types::{ToolsFilter, ToolsResponse};

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Catalog that fetches `GET {base_url}/tools`
///
/// Filter values go out as repeated `tag` and `lifecycle` query parameters.
pub struct HttpToolCatalog {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    logger: Arc<dyn Logger>,
}

impl HttpToolCatalog {
    /// Create a client for the given base URL with the default timeout
    pub fn new(base_url: impl Into<String>, logger: Arc<dyn Logger>) -> CatalogResult<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT, logger)
    }

    /// Create a client with an explicit request timeout
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
        logger: Arc<dyn Logger>,
    ) -> CatalogResult<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(CatalogError::invalid_config("base URL is empty"));
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            logger,
        })
    }

    /// Send `Authorization: Bearer <token>` with every request
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for a filter
    pub fn tools_url(&self, filter: Option<&ToolsFilter>) -> String {
        let mut params = Vec::new();
        if let Some(filter) = filter {
            for tag in filter.tags() {
                params.push(format!("tag={}", urlencoding::encode(tag)));
            }
            for lifecycle in filter.lifecycle() {
                params.push(format!("lifecycle={}", urlencoding::encode(lifecycle)));
            }
        }

        if params.is_empty() {
            format!("{}/tools", self.base_url)
        } else {
            format!("{}/tools?{}", self.base_url, params.join("&"))
        }
    }
}

impl std::fmt::Debug for HttpToolCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpToolCatalog")
            .field("base_url", &self.base_url)
            .field("has_token", &self.token.is_some())
            .finish()
    }
}

#[async_trait]
impl ToolCatalog for HttpToolCatalog {
    fn name(&self) -> &str {
        "http"
    }

    async fn get_tools(&self, filter: Option<&ToolsFilter>) -> CatalogResult<ToolsResponse> {
        let url = self.tools_url(filter);
        self.logger.debug(&format!("[HttpToolCatalog] GET {}", url));

        let mut request = self.client.get(&url);
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            self.logger.warn(&format!(
                "[HttpToolCatalog] {} returned {}",
                url,
                status.as_u16()
            ));
            return Err(CatalogError::api_error(status.as_u16(), message));
        }

        let body = response.bytes().await?;
        let tools: ToolsResponse = serde_json::from_slice(&body)?;
        self.logger.debug(&format!(
            "[HttpToolCatalog] Received {} tools",
            tools.tools.len()
        ));
        Ok(tools)
    }
}
