//! Explore Core
//!
//! Runtime-agnostic core of the tool explore view: a filterable list of
//! internal developer tools whose tag and lifecycle filters live in the URL
//! query string.
//!
//! ## Pieces
//!
//! - `catalog`: where tools come from (`ToolCatalog`; HTTP, static, mock)
//! - `filters`: the selection state and its query string mirror
//! - `loaders`: the filtered results load and the unfiltered options load
//! - `view`: wiring of the above plus the snapshot the UI renders
//!
//! ```rust,ignore
//! use explore_core::{ExploreToolsView, ExploreViewConfig, MemoryNavigator, create_catalog};
//!
//! let catalog = create_catalog(&config.catalog, logger.clone())?;
//! let view = ExploreToolsView::new(catalog, navigator, "?tags=web", config.view, logger);
//!
//! // Initial load, already filtered by the URL
//! view.refresh().await;
//!
//! // User picks a tag: the URL is replaced and both loads rerun
//! view.set_tags(vec!["standards".into()]).await;
//! let snapshot = view.snapshot();
//! ```

pub mod types;
pub mod logging;
pub mod config;
pub mod catalog;
pub mod filters;
pub mod loaders;
pub mod view;

// Re-export commonly used types
pub use types::{
    ToolDescriptor, ToolsResponse, ToolsFilter,
    FilterSelection, FilterOptions,
    LoadState,
};

pub use logging::{Logger, LogLevel, NoOpLogger, ConsoleLogger, MemoryLogger};

pub use config::{
    ExploreConfig, ExploreViewConfig, CatalogConfig, ImageFit,
    ConfigProvider, ConfigError, ConfigResult,
    MemoryConfigProvider, FileConfigProvider,
    apply_env_overrides,
};

pub use catalog::{
    ToolCatalog, CatalogError, CatalogResult,
    HttpToolCatalog, StaticToolCatalog, MockCatalog, MockMode,
    create_catalog,
};

pub use filters::{FilterState, QueryParams, Navigator, MemoryNavigator, FnNavigator};

pub use loaders::{OptionsLoader, ResultsLoader, LoadTicket, collect_filter_options};

pub use view::{ExploreToolsView, ExploreViewSnapshot, ContentStatus, FilterWidget, ViewPhase};
