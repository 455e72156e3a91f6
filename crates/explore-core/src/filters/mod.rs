//! Filter selection state, kept in sync with the URL query string
//!
//! The query string is read once, when the view is created. After that the
//! in-memory `FilterState` is the source of truth and every change is written
//! back through an injected `Navigator` as a replace-style update.

mod query;
mod navigator;
mod state;

pub use query::QueryParams;
pub use navigator::{Navigator, MemoryNavigator, FnNavigator};
pub use state::{FilterState, TAGS_KEY, LIFECYCLE_KEY};
