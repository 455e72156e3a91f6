//! Tool catalog trait definition

use async_trait::async_trait;

use super::error::CatalogResult;
use crate::types::{ToolsFilter, ToolsResponse};

/// Remote tool catalog
///
/// Implementations must treat a filter whose tag and lifecycle sets are both
/// empty exactly like `None`: the unfiltered list comes back.
///
/// Implementations:
/// - `HttpToolCatalog`: The explore REST API
/// - `StaticToolCatalog`: A configured in-memory list
/// - `MockCatalog`: Deterministic test double
#[async_trait]
pub trait ToolCatalog: Send + Sync {
    /// Short name used in log messages
    fn name(&self) -> &str;

    /// Fetch tools, optionally narrowed by tags and lifecycle
    async fn get_tools(&self, filter: Option<&ToolsFilter>) -> CatalogResult<ToolsResponse>;
}
