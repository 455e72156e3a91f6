//! The explore tools view
//!
//! `ExploreToolsView` owns the filter state and both loaders. Every filter
//! change rewrites the URL and relaunches the options and results loads as
//! two independent operations; `snapshot` folds their states into what the
//! presentation surface renders.

mod explore;
mod snapshot;

pub use explore::ExploreToolsView;
pub use snapshot::{
    ContentStatus, ExploreViewSnapshot, FilterWidget, ViewPhase,
    EMPTY_RESULTS_TITLE, LOAD_FAILED_TITLE,
};
