//! Filtered results loader

use std::sync::Arc;

use parking_lot::Mutex;

use super::{LoadTicket, Slot};
use crate::catalog::{CatalogResult, ToolCatalog};
use crate::logging::Logger;
use crate::types::{FilterSelection, LoadState, ToolDescriptor};

/// Fetch the tools matching `selection`
///
/// The filter object is always sent, even when both sets are empty; the
/// catalog treats that as "no filter".
pub async fn fetch_tools(
    catalog: &dyn ToolCatalog,
    selection: &FilterSelection,
) -> CatalogResult<Vec<ToolDescriptor>> {
    let filter = selection.to_filter();
    let response = catalog.get_tools(Some(&filter)).await?;
    Ok(response.tools)
}

/// Loads the tool list for the current filter selection
///
/// A failed load does not keep the previous list, so a stale list is never
/// shown next to the failure warning.
pub struct ResultsLoader {
    catalog: Arc<dyn ToolCatalog>,
    slot: Mutex<Slot<Vec<ToolDescriptor>>>,
    logger: Arc<dyn Logger>,
}

impl ResultsLoader {
    pub fn new(catalog: Arc<dyn ToolCatalog>, logger: Arc<dyn Logger>) -> Self {
        Self {
            catalog,
            slot: Mutex::new(Slot::default()),
            logger,
        }
    }

    /// Mark the loader pending for `selection`
    pub fn begin(&self, selection: &FilterSelection) -> LoadTicket {
        let ticket = self.slot.lock().launch(selection.clone());
        self.logger.debug(&format!(
            "[ResultsLoader] Launch #{} tags={:?} lifecycle={:?}",
            ticket.seq, selection.tags, selection.lifecycle
        ));
        ticket
    }

    /// Fetch for `ticket` and apply the outcome if it is still current
    ///
    /// Returns whether the outcome was applied.
    pub async fn run(&self, ticket: LoadTicket) -> bool {
        let outcome = fetch_tools(self.catalog.as_ref(), &ticket.selection).await;

        let mut slot = self.slot.lock();
        if !slot.is_current(&ticket) {
            self.logger.debug(&format!(
                "[ResultsLoader] Dropping stale response #{} (latest #{})",
                ticket.seq,
                slot.launched()
            ));
            return false;
        }

        match outcome {
            Ok(tools) => {
                self.logger.debug(&format!(
                    "[ResultsLoader] Launch #{} loaded {} tools",
                    ticket.seq,
                    tools.len()
                ));
                slot.state.succeed(tools);
            }
            Err(e) => {
                self.logger.warn(&format!(
                    "[ResultsLoader] Failed to load tools from {} catalog: {}",
                    self.catalog.name(),
                    e
                ));
                slot.state.fail(e.to_string(), false);
            }
        }
        true
    }

    /// Load the tools for a selection and return the resulting state
    pub async fn load_tools(&self, selection: &FilterSelection) -> LoadState<Vec<ToolDescriptor>> {
        let ticket = self.begin(selection);
        self.run(ticket).await;
        self.state()
    }

    /// Snapshot of the current state
    pub fn state(&self) -> LoadState<Vec<ToolDescriptor>> {
        self.slot.lock().state.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.slot.lock().state.is_loading()
    }

    pub fn is_failed(&self) -> bool {
        self.slot.lock().state.is_failed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MockCatalog, MockMode};
    use crate::logging::NoOpLogger;
    use crate::types::ToolsFilter;

    fn tools() -> Vec<ToolDescriptor> {
        vec![
            ToolDescriptor::new("Lighthouse", "Audits", "/lighthouse").with_tags(["web", "seo"]),
            ToolDescriptor::new("Tech Radar", "Radar", "/tech-radar").with_tags(["standards"]),
        ]
    }

    fn loader(catalog: Arc<MockCatalog>) -> ResultsLoader {
        ResultsLoader::new(catalog, Arc::new(NoOpLogger::new()))
    }

    #[tokio::test]
    async fn test_empty_selection_equals_no_filter() {
        let catalog = Arc::new(MockCatalog::with_tools(tools(), Arc::new(NoOpLogger::new())));
        let unfiltered = catalog.get_tools(None).await.unwrap().tools;

        let loaded = fetch_tools(catalog.as_ref(), &FilterSelection::default()).await.unwrap();
        assert_eq!(loaded, unfiltered);

        // The filter object is still sent
        let calls = catalog.calls();
        assert_eq!(
            calls[1],
            Some(ToolsFilter {
                tags: Some(vec![]),
                lifecycle: Some(vec![]),
            })
        );
    }

    #[tokio::test]
    async fn test_load_tools_applies_filter() {
        let catalog = Arc::new(MockCatalog::with_tools(tools(), Arc::new(NoOpLogger::new())));
        let loader = loader(catalog);

        let state = loader
            .load_tools(&FilterSelection::new(vec!["standards".into()], vec![]))
            .await;
        let value = state.value().unwrap();
        assert_eq!(value.len(), 1);
        assert_eq!(value[0].title, "Tech Radar");
    }

    #[tokio::test]
    async fn test_failure_drops_previous_list() {
        let catalog = Arc::new(MockCatalog::with_tools(tools(), Arc::new(NoOpLogger::new())));
        let loader = loader(catalog.clone());

        let ok = loader.load_tools(&FilterSelection::default()).await;
        assert_eq!(ok.value().map(Vec::len), Some(2));

        catalog.set_mode(MockMode::Error("unavailable".into()));
        let failed = loader.load_tools(&FilterSelection::default()).await;
        assert!(failed.is_failed());
        assert!(failed.value().is_none());
        assert!(failed.error().unwrap().contains("unavailable"));
    }

    #[tokio::test]
    async fn test_pending_keeps_previous_list() {
        let catalog = Arc::new(MockCatalog::with_tools(tools(), Arc::new(NoOpLogger::new())));
        let loader = loader(catalog);
        loader.load_tools(&FilterSelection::default()).await;

        let ticket = loader.begin(&FilterSelection::new(vec!["web".into()], vec![]));
        assert!(loader.is_loading());
        assert_eq!(loader.state().value().map(Vec::len), Some(2));

        assert!(loader.run(ticket).await);
        assert_eq!(loader.state().value().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_stale_response_is_dropped() {
        let catalog = Arc::new(MockCatalog::with_tools(tools(), Arc::new(NoOpLogger::new())));
        let loader = loader(catalog);

        let old = loader.begin(&FilterSelection::new(vec!["web".into()], vec![]));
        let new = loader.begin(&FilterSelection::new(vec!["standards".into()], vec![]));

        assert!(loader.run(new).await);
        assert!(!loader.run(old).await);

        let state = loader.state();
        let value = state.value().unwrap();
        assert_eq!(value.len(), 1);
        assert_eq!(value[0].title, "Tech Radar");
    }
}
