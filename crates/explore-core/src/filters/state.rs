//! Filter state manager

use std::sync::Arc;

use super::navigator::Navigator;
use super::query::QueryParams;
use crate::logging::Logger;
use crate::types::FilterSelection;

/// Query key holding the selected tags
pub const TAGS_KEY: &str = "tags";
/// Query key holding the selected lifecycles
pub const LIFECYCLE_KEY: &str = "lifecycle";

/// Owns the tag and lifecycle selections and mirrors them into the URL
pub struct FilterState {
    params: QueryParams,
    selection: FilterSelection,
    navigator: Arc<dyn Navigator>,
    logger: Arc<dyn Logger>,
}

impl FilterState {
    /// Read the initial selections from a query string snapshot
    ///
    /// Missing keys give empty selections. This is the only time the URL is
    /// read.
    pub fn initialize(
        url_query: &str,
        navigator: Arc<dyn Navigator>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let params = QueryParams::parse(url_query);
        let selection = FilterSelection::new(params.get_all(TAGS_KEY), params.get_all(LIFECYCLE_KEY));

        logger.debug(&format!(
            "[FilterState] Initialized with tags={:?} lifecycle={:?}",
            selection.tags, selection.lifecycle
        ));

        Self {
            params,
            selection,
            navigator,
            logger,
        }
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn tags(&self) -> &[String] {
        &self.selection.tags
    }

    pub fn lifecycle(&self) -> &[String] {
        &self.selection.lifecycle
    }

    /// Query string as last written
    pub fn query_string(&self) -> String {
        self.params.to_query_string()
    }

    /// Replace the selected tags and rewrite the `tags` key
    pub fn set_tags(&mut self, tags: Vec<String>) -> &FilterSelection {
        self.params.set_all(TAGS_KEY, &tags);
        self.selection.tags = tags;
        self.write_back();
        &self.selection
    }

    /// Replace the selected lifecycles and rewrite the `lifecycle` key
    pub fn set_lifecycle(&mut self, lifecycle: Vec<String>) -> &FilterSelection {
        self.params.set_all(LIFECYCLE_KEY, &lifecycle);
        self.selection.lifecycle = lifecycle;
        self.write_back();
        &self.selection
    }

    fn write_back(&self) {
        let query = self.params.to_query_string();
        self.logger.debug(&format!("[FilterState] Replacing location query with '{}'", query));
        self.navigator.replace(&query);
    }
}

impl std::fmt::Debug for FilterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterState")
            .field("selection", &self.selection)
            .field("query", &self.query_string())
            .finish()
    }
}
