//! Catalog backed by a fixed tool list

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::error::CatalogResult;
use super::traits::ToolCatalog;
use crate::logging::Logger;
use crate::types::{ToolDescriptor, ToolsFilter, ToolsResponse};

/// Check a tool against a filter
///
/// A non-empty tag set matches tools carrying at least one of the tags. A
/// non-empty lifecycle set matches tools whose lifecycle is one of them.
/// Both conditions must hold; an empty set places no restriction.
pub fn matches_filter(tool: &ToolDescriptor, filter: &ToolsFilter) -> bool {
    let tags = filter.tags();
    if !tags.is_empty() && !tool.tag_list().iter().any(|t| tags.contains(t)) {
        return false;
    }

    let lifecycles = filter.lifecycle();
    if !lifecycles.is_empty() {
        match &tool.lifecycle {
            Some(lifecycle) if lifecycles.contains(lifecycle) => {}
            _ => return false,
        }
    }

    true
}

/// Apply an optional filter to a list, preserving order
pub fn apply_filter(tools: &[ToolDescriptor], filter: Option<&ToolsFilter>) -> Vec<ToolDescriptor> {
    match filter {
        Some(filter) if !filter.is_unrestricted() => tools
            .iter()
            .filter(|tool| matches_filter(tool, filter))
            .cloned()
            .collect(),
        _ => tools.to_vec(),
    }
}

/// Catalog that serves a configured list of tools
pub struct StaticToolCatalog {
    tools: RwLock<Vec<ToolDescriptor>>,
    logger: Arc<dyn Logger>,
}

impl StaticToolCatalog {
    pub fn new(tools: Vec<ToolDescriptor>, logger: Arc<dyn Logger>) -> Self {
        Self {
            tools: RwLock::new(tools),
            logger,
        }
    }

    /// Replace the served list
    pub fn set_tools(&self, tools: Vec<ToolDescriptor>) {
        *self.tools.write() = tools;
    }

    pub fn len(&self) -> usize {
        self.tools.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.read().is_empty()
    }
}

impl std::fmt::Debug for StaticToolCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticToolCatalog")
            .field("tools", &self.len())
            .finish()
    }
}

#[async_trait]
impl ToolCatalog for StaticToolCatalog {
    fn name(&self) -> &str {
        "static"
    }

    async fn get_tools(&self, filter: Option<&ToolsFilter>) -> CatalogResult<ToolsResponse> {
        let tools = apply_filter(&self.tools.read(), filter);
        self.logger.debug(&format!(
            "[StaticToolCatalog] Serving {} of {} tools",
            tools.len(),
            self.len()
        ));
        Ok(ToolsResponse::new(tools))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NoOpLogger;

    fn catalog() -> StaticToolCatalog {
        StaticToolCatalog::new(
            vec![
                ToolDescriptor::new("Lighthouse", "Audits", "/lighthouse")
                    .with_tags(["web", "seo"])
                    .with_lifecycle("production"),
                ToolDescriptor::new("Tech Radar", "Radar", "/tech-radar")
                    .with_tags(["standards"])
                    .with_lifecycle("experimental"),
                ToolDescriptor::new("Cost Insights", "Costs", "/cost-insights"),
            ],
            Arc::new(NoOpLogger::new()),
        )
    }

    fn titles(response: &ToolsResponse) -> Vec<&str> {
        response.tools.iter().map(|t| t.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_no_filter_returns_everything() {
        let catalog = catalog();
        let all = catalog.get_tools(None).await.unwrap();
        assert_eq!(all.tools.len(), 3);

        let empty_filter = ToolsFilter {
            tags: Some(vec![]),
            lifecycle: Some(vec![]),
        };
        let same = catalog.get_tools(Some(&empty_filter)).await.unwrap();
        assert_eq!(same, all);
    }

    #[tokio::test]
    async fn test_tag_filter_matches_any_tag() {
        let catalog = catalog();
        let filter = ToolsFilter {
            tags: Some(vec!["seo".into(), "standards".into()]),
            lifecycle: None,
        };
        let response = catalog.get_tools(Some(&filter)).await.unwrap();
        assert_eq!(titles(&response), vec!["Lighthouse", "Tech Radar"]);
    }

    #[tokio::test]
    async fn test_tags_and_lifecycle_both_apply() {
        let catalog = catalog();
        let filter = ToolsFilter {
            tags: Some(vec!["web".into(), "standards".into()]),
            lifecycle: Some(vec!["experimental".into()]),
        };
        let response = catalog.get_tools(Some(&filter)).await.unwrap();
        assert_eq!(titles(&response), vec!["Tech Radar"]);
    }

    #[tokio::test]
    async fn test_lifecycle_filter_skips_tools_without_lifecycle() {
        let catalog = catalog();
        let filter = ToolsFilter {
            tags: None,
            lifecycle: Some(vec!["production".into(), "experimental".into()]),
        };
        let response = catalog.get_tools(Some(&filter)).await.unwrap();
        assert_eq!(titles(&response), vec!["Lighthouse", "Tech Radar"]);
    }
}
