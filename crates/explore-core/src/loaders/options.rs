//! Derived filter options

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

use super::{LoadTicket, Slot};
use crate::catalog::ToolCatalog;
use crate::logging::Logger;
use crate::types::{FilterOptions, FilterSelection, LoadState, ToolDescriptor};

fn push_unique(values: &mut Vec<String>, seen: &mut HashSet<String>, value: &str) {
    if seen.insert(value.to_string()) {
        values.push(value.to_string());
    }
}

/// Collect the distinct tags and lifecycles of a tool list
///
/// Both lists keep first-seen order across the input order. Tools without a
/// lifecycle contribute nothing to `lifecycles`.
pub fn collect_filter_options(tools: &[ToolDescriptor]) -> FilterOptions {
    let mut options = FilterOptions::default();
    let mut seen_tags = HashSet::new();
    let mut seen_lifecycles = HashSet::new();

    for tool in tools {
        for tag in tool.tag_list() {
            push_unique(&mut options.tags, &mut seen_tags, tag);
        }
        if let Some(ref lifecycle) = tool.lifecycle {
            push_unique(&mut options.lifecycles, &mut seen_lifecycles, lifecycle);
        }
    }

    options
}

/// Computes the filter options from the full, unfiltered catalog
///
/// The current selection never narrows the options, so a user who already
/// filtered can still widen the filter again. On failure the previous options
/// stay in place and the failure is only visible through the state.
pub struct OptionsLoader {
    catalog: Arc<dyn ToolCatalog>,
    slot: Mutex<Slot<FilterOptions>>,
    logger: Arc<dyn Logger>,
}

impl OptionsLoader {
    pub fn new(catalog: Arc<dyn ToolCatalog>, logger: Arc<dyn Logger>) -> Self {
        Self {
            catalog,
            slot: Mutex::new(Slot::default()),
            logger,
        }
    }

    /// Mark the loader pending
    pub fn begin(&self) -> LoadTicket {
        let ticket = self.slot.lock().launch(FilterSelection::default());
        self.logger.debug(&format!("[OptionsLoader] Launch #{}", ticket.seq));
        ticket
    }

    /// Fetch the full catalog for `ticket` and apply the outcome if current
    pub async fn run(&self, ticket: LoadTicket) -> bool {
        let outcome = self.catalog.get_tools(None).await;

        let mut slot = self.slot.lock();
        if !slot.is_current(&ticket) {
            self.logger.debug(&format!(
                "[OptionsLoader] Dropping stale response #{} (latest #{})",
                ticket.seq,
                slot.launched()
            ));
            return false;
        }

        match outcome {
            Ok(response) => {
                let options = collect_filter_options(&response.tools);
                self.logger.debug(&format!(
                    "[OptionsLoader] {} tags, {} lifecycles",
                    options.tags.len(),
                    options.lifecycles.len()
                ));
                slot.state.succeed(options);
            }
            Err(e) => {
                self.logger.warn(&format!(
                    "[OptionsLoader] Failed to load filter options from {} catalog: {}",
                    self.catalog.name(),
                    e
                ));
                slot.state.fail(e.to_string(), true);
            }
        }
        true
    }

    /// Recompute the options and return them
    ///
    /// Never fails: a fetch error leaves the previous options (or empty ones)
    /// and flags the state as failed.
    pub async fn compute_options(&self) -> FilterOptions {
        let ticket = self.begin();
        self.run(ticket).await;
        self.options()
    }

    /// Current options, empty until the first successful load
    pub fn options(&self) -> FilterOptions {
        self.slot.lock().state.value().cloned().unwrap_or_default()
    }

    pub fn state(&self) -> LoadState<FilterOptions> {
        self.slot.lock().state.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.slot.lock().state.is_loading()
    }

    pub fn is_failed(&self) -> bool {
        self.slot.lock().state.is_failed()
    }
}
