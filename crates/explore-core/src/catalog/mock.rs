//! Mock catalog for testing
//!
//! Deterministic responses without network access, with a call log so tests
//! can check exactly which filters went out.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};

use super::error::{CatalogError, CatalogResult};
use super::static_catalog::apply_filter;
use super::traits::ToolCatalog;
use crate::logging::Logger;
use crate::types::{ToolDescriptor, ToolsFilter, ToolsResponse};

/// Mock response mode
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Serve the list, applying the filter like `StaticToolCatalog`
    Tools(Vec<ToolDescriptor>),
    /// Always return no tools
    Empty,
    /// Reject every request
    Error(String),
}

impl Default for MockMode {
    fn default() -> Self {
        MockMode::Empty
    }
}

/// Mock tool catalog
pub struct MockCatalog {
    mode: RwLock<MockMode>,
    delay: Option<Duration>,
    calls: Mutex<Vec<Option<ToolsFilter>>>,
    logger: Arc<dyn Logger>,
}

impl MockCatalog {
    pub fn new(mode: MockMode, logger: Arc<dyn Logger>) -> Self {
        Self {
            mode: RwLock::new(mode),
            delay: None,
            calls: Mutex::new(Vec::new()),
            logger,
        }
    }

    /// Serve a fixed list of tools
    pub fn with_tools(tools: Vec<ToolDescriptor>, logger: Arc<dyn Logger>) -> Self {
        Self::new(MockMode::Tools(tools), logger)
    }

    /// Reject every request with `message`
    pub fn failing(message: impl Into<String>, logger: Arc<dyn Logger>) -> Self {
        Self::new(MockMode::Error(message.into()), logger)
    }

    /// Sleep before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Switch the response mode for subsequent calls
    pub fn set_mode(&self, mode: MockMode) {
        *self.mode.write() = mode;
    }

    /// Filters received so far, in call order
    pub fn calls(&self) -> Vec<Option<ToolsFilter>> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl ToolCatalog for MockCatalog {
    fn name(&self) -> &str {
        "mock"
    }

    async fn get_tools(&self, filter: Option<&ToolsFilter>) -> CatalogResult<ToolsResponse> {
        self.calls.lock().push(filter.cloned());
        self.logger.debug(&format!("[MockCatalog] get_tools called with {:?}", filter));

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let mode = self.mode.read().clone();
        match mode {
            MockMode::Tools(tools) => Ok(ToolsResponse::new(apply_filter(&tools, filter))),
            MockMode::Empty => Ok(ToolsResponse::default()),
            MockMode::Error(message) => Err(CatalogError::Other(format!("Mock error: {}", message))),
        }
    }
}
