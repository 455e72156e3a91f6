//! Presentation snapshot of the explore view

use crate::config::ImageFit;
use crate::types::{FilterSelection, LoadState, ToolDescriptor};

/// Warning shown when either load failed
pub const LOAD_FAILED_TITLE: &str = "Could not load available tools.";
/// Message shown when the filtered list is empty
pub const EMPTY_RESULTS_TITLE: &str = "No tools to display";

/// Where the view is in its load cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    /// Nothing launched yet
    Idle,
    /// At least one of the two loads is in flight
    Loading,
    /// Both loads settled
    Ready,
}

/// A filter widget: the values offered and the values selected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterWidget {
    pub options: Vec<String>,
    pub selected: Vec<String>,
}

/// What the content area renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentStatus {
    /// Progress indicator; the last successful list may still be drawn
    Loading { retained: Option<Vec<ToolDescriptor>> },
    /// Generic failure warning, no cards
    Failed { message: String },
    /// "No results" indicator, no cards
    Empty,
    /// Card grid
    Tools(Vec<ToolDescriptor>),
}

impl ContentStatus {
    /// Cards to draw, if any
    pub fn tools(&self) -> Option<&[ToolDescriptor]> {
        match self {
            ContentStatus::Loading { retained } => retained.as_deref(),
            ContentStatus::Tools(tools) => Some(tools),
            ContentStatus::Failed { .. } | ContentStatus::Empty => None,
        }
    }

    /// Combine the two load states
    ///
    /// Loading wins over failure, failure over an empty list. An empty
    /// options list is never a failure; only the results decide `Empty`.
    /// Results that were never requested count as loading.
    pub(crate) fn combine<O>(results: &LoadState<Vec<ToolDescriptor>>, options: &LoadState<O>) -> Self {
        let not_started = matches!(results, LoadState::Idle);
        if not_started || results.is_loading() || options.is_loading() {
            return ContentStatus::Loading {
                retained: results.value().cloned(),
            };
        }

        if let Some(error) = results.error().or_else(|| options.error()) {
            return ContentStatus::Failed {
                message: error.to_string(),
            };
        }

        match results.value() {
            Some(tools) if !tools.is_empty() => ContentStatus::Tools(tools.clone()),
            _ => ContentStatus::Empty,
        }
    }
}

/// Everything the presentation surface needs to draw the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploreViewSnapshot {
    pub title: String,
    pub image_fit: Option<ImageFit>,
    pub selection: FilterSelection,
    /// Present only when the tags filter is enabled
    pub tags_filter: Option<FilterWidget>,
    /// Present only when the lifecycle filter is enabled
    pub lifecycle_filter: Option<FilterWidget>,
    pub phase: ViewPhase,
    /// Either load is in flight
    pub loading: bool,
    /// Either load failed
    pub error: bool,
    pub content: ContentStatus,
}

impl ExploreViewSnapshot {
    /// Title of the warning banner, when one is shown
    pub fn warning(&self) -> Option<&'static str> {
        if self.error && !self.loading {
            Some(LOAD_FAILED_TITLE)
        } else {
            None
        }
    }

    /// Text of the "no results" indicator, when the filtered list is empty
    pub fn empty_notice(&self) -> Option<&'static str> {
        match self.content {
            ContentStatus::Empty => Some(EMPTY_RESULTS_TITLE),
            _ => None,
        }
    }

    /// Cards to draw, if any
    pub fn tools(&self) -> Option<&[ToolDescriptor]> {
        self.content.tools()
    }
}
