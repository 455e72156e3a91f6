//! Asynchronous loaders behind the explore view
//!
//! Both loaders work in two steps: `begin` marks the slot pending and hands
//! out a `LoadTicket`, `run` performs the fetch and applies the outcome only
//! if the ticket is still the latest one launched. Older responses that
//! resolve late are dropped instead of overwriting newer state.

mod options;
mod results;

pub use options::{OptionsLoader, collect_filter_options};
pub use results::{ResultsLoader, fetch_tools};

use crate::types::{FilterSelection, LoadState};

/// Key of one launched fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    /// Launch sequence number, increasing per loader
    pub seq: u64,
    /// Selection the fetch was launched for
    pub selection: FilterSelection,
}

/// Load state plus the bookkeeping needed to recognize stale responses
#[derive(Debug)]
pub(crate) struct Slot<T> {
    pub(crate) state: LoadState<T>,
    latest: Option<LoadTicket>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            state: LoadState::Idle,
            latest: None,
        }
    }
}

impl<T> Slot<T> {
    /// Start a new launch for `selection`
    pub(crate) fn launch(&mut self, selection: FilterSelection) -> LoadTicket {
        let seq = self.latest.as_ref().map(|t| t.seq + 1).unwrap_or(1);
        let ticket = LoadTicket { seq, selection };
        self.latest = Some(ticket.clone());
        self.state.begin();
        ticket
    }

    /// Whether a response for `ticket` may still be applied
    pub(crate) fn is_current(&self, ticket: &LoadTicket) -> bool {
        self.latest.as_ref() == Some(ticket)
    }

    pub(crate) fn launched(&self) -> u64 {
        self.latest.as_ref().map(|t| t.seq).unwrap_or(0)
    }
}
