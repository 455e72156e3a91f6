//! Explore tools view coordinator

use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;

use super::snapshot::{ContentStatus, ExploreViewSnapshot, FilterWidget, ViewPhase};
use crate::catalog::ToolCatalog;
use crate::config::ExploreViewConfig;
use crate::filters::{FilterState, Navigator};
use crate::loaders::{OptionsLoader, ResultsLoader};
use crate::logging::Logger;
use crate::types::{FilterOptions, FilterSelection, LoadState};

/// Filterable list of tools bound to the URL query string
///
/// Launching is synchronous: `refresh`, `set_tags` and `set_lifecycle` mark
/// both loaders pending before returning, and the returned future drives the
/// two fetches concurrently. A launch that is superseded before its fetch
/// resolves is dropped on arrival.
///
/// # Example
///
/// ```rust,ignore
/// let view = ExploreToolsView::new(catalog, navigator, "?tags=web", config, logger);
/// view.refresh().await;
///
/// view.set_tags(vec!["standards".into()]).await;
/// let snapshot = view.snapshot();
/// ```
pub struct ExploreToolsView {
    config: ExploreViewConfig,
    filters: Mutex<FilterState>,
    results: ResultsLoader,
    options: OptionsLoader,
    logger: Arc<dyn Logger>,
}

impl ExploreToolsView {
    /// Create the view from the query string present at first render
    pub fn new(
        catalog: Arc<dyn ToolCatalog>,
        navigator: Arc<dyn Navigator>,
        url_query: &str,
        config: ExploreViewConfig,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let filters = FilterState::initialize(url_query, navigator, Arc::clone(&logger));
        logger.info(&format!(
            "[ExploreToolsView] '{}' using {} catalog",
            config.title,
            catalog.name()
        ));

        Self {
            config,
            filters: Mutex::new(filters),
            results: ResultsLoader::new(Arc::clone(&catalog), Arc::clone(&logger)),
            options: OptionsLoader::new(catalog, Arc::clone(&logger)),
            logger,
        }
    }

    pub fn config(&self) -> &ExploreViewConfig {
        &self.config
    }

    /// Current filter selection
    pub fn selection(&self) -> FilterSelection {
        self.filters.lock().selection().clone()
    }

    /// Query string as last written back
    pub fn query_string(&self) -> String {
        self.filters.lock().query_string()
    }

    /// Relaunch both loads for the current selection
    pub fn refresh(&self) -> impl Future<Output = ()> + Send + '_ {
        let selection = self.selection();
        self.launch(selection)
    }

    /// Replace the tag selection, rewrite the URL and relaunch both loads
    pub fn set_tags(&self, tags: Vec<String>) -> impl Future<Output = ()> + Send + '_ {
        let selection = self.filters.lock().set_tags(tags).clone();
        self.launch(selection)
    }

    /// Replace the lifecycle selection, rewrite the URL and relaunch both loads
    pub fn set_lifecycle(&self, lifecycle: Vec<String>) -> impl Future<Output = ()> + Send + '_ {
        let selection = self.filters.lock().set_lifecycle(lifecycle).clone();
        self.launch(selection)
    }

    fn launch(&self, selection: FilterSelection) -> impl Future<Output = ()> + Send + '_ {
        let results_ticket = self.results.begin(&selection);
        let options_ticket = self.options.begin();

        async move {
            let (results_applied, options_applied) = futures::join!(
                self.results.run(results_ticket),
                self.options.run(options_ticket)
            );
            if !results_applied || !options_applied {
                self.logger.debug(&format!(
                    "[ExploreToolsView] Superseded while loading (results applied: {}, options applied: {})",
                    results_applied, options_applied
                ));
            }
        }
    }

    /// Options offered by the filter widgets
    pub fn filter_options(&self) -> FilterOptions {
        self.options.options()
    }

    pub fn phase(&self) -> ViewPhase {
        let results = self.results.state();
        let options = self.options.state();
        if matches!(results, LoadState::Idle) && matches!(options, LoadState::Idle) {
            ViewPhase::Idle
        } else if results.is_loading() || options.is_loading() {
            ViewPhase::Loading
        } else {
            ViewPhase::Ready
        }
    }

    /// Fold filter state and both loads into what the surface renders
    pub fn snapshot(&self) -> ExploreViewSnapshot {
        let selection = self.selection();
        let results = self.results.state();
        let options_state = self.options.state();
        let options = options_state.value().cloned().unwrap_or_default();

        let tags_filter = self.config.show_tags_filter.then(|| FilterWidget {
            options: options.tags.clone(),
            selected: selection.tags.clone(),
        });
        let lifecycle_filter = self.config.show_lifecycle_filter.then(|| FilterWidget {
            options: options.lifecycles.clone(),
            selected: selection.lifecycle.clone(),
        });

        ExploreViewSnapshot {
            title: self.config.title.clone(),
            image_fit: self.config.image_fit,
            selection,
            tags_filter,
            lifecycle_filter,
            phase: self.phase(),
            loading: results.is_loading() || options_state.is_loading(),
            error: results.is_failed() || options_state.is_failed(),
            content: ContentStatus::combine(&results, &options_state),
        }
    }
}

impl std::fmt::Debug for ExploreToolsView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExploreToolsView")
            .field("config", &self.config)
            .field("selection", &self.selection())
            .field("phase", &self.phase())
            .finish()
    }
}
