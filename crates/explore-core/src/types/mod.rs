//! Core types shared by catalogs, loaders and the view

mod tool;
mod filter;
mod load_state;

pub use tool::{ToolDescriptor, ToolsResponse};
pub use filter::{FilterSelection, FilterOptions, ToolsFilter};
pub use load_state::LoadState;
