//! Navigation capability used to write the query string back

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

/// Replace-style navigation update
///
/// `replace` swaps the current location's query string for `query` without
/// adding a history entry. `query` is either empty or starts with `?`.
pub trait Navigator: Send + Sync {
    fn replace(&self, query: &str);
}

/// Navigator that keeps the location in memory
///
/// `replace_count` tells how many rewrites happened.
#[derive(Debug, Default)]
pub struct MemoryNavigator {
    query: Mutex<String>,
    replaces: AtomicUsize,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing query string
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: Mutex::new(query.into()),
            replaces: AtomicUsize::new(0),
        }
    }

    /// Current query string
    pub fn query(&self) -> String {
        self.query.lock().clone()
    }

    pub fn replace_count(&self) -> usize {
        self.replaces.load(Ordering::SeqCst)
    }
}

impl Navigator for MemoryNavigator {
    fn replace(&self, query: &str) {
        *self.query.lock() = query.to_string();
        self.replaces.fetch_add(1, Ordering::SeqCst);
    }
}

/// Navigator that forwards to a closure
pub struct FnNavigator<F> {
    f: F,
}

impl<F> FnNavigator<F>
where
    F: Fn(&str) + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Navigator for FnNavigator<F>
where
    F: Fn(&str) + Send + Sync,
{
    fn replace(&self, query: &str) {
        (self.f)(query)
    }
}

impl<F> std::fmt::Debug for FnNavigator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnNavigator").finish()
    }
}
