//! Tri-state result slot for asynchronous loads

/// State of one asynchronous load
///
/// `Pending` and `Failed` may carry the last successful value; whether a
/// failure keeps it is up to the loader owning the slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    /// Nothing requested yet
    Idle,
    /// A request is in flight
    Pending { retained: Option<T> },
    /// The last request failed
    Failed { error: String, retained: Option<T> },
    /// The last request succeeded
    Succeeded(T),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Pending { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed { .. })
    }

    /// Error message of a failed load
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// The value to display: the fresh one, or whatever was retained
    pub fn value(&self) -> Option<&T> {
        match self {
            LoadState::Idle => None,
            LoadState::Pending { retained } => retained.as_ref(),
            LoadState::Failed { retained, .. } => retained.as_ref(),
            LoadState::Succeeded(value) => Some(value),
        }
    }

    /// Move to `Pending`, retaining the current value
    pub fn begin(&mut self) {
        let retained = match std::mem::take(self) {
            LoadState::Idle => None,
            LoadState::Pending { retained } => retained,
            LoadState::Failed { retained, .. } => retained,
            LoadState::Succeeded(value) => Some(value),
        };
        *self = LoadState::Pending { retained };
    }

    pub fn succeed(&mut self, value: T) {
        *self = LoadState::Succeeded(value);
    }

    /// Move to `Failed`, keeping the current value only if `keep_value`
    pub fn fail(&mut self, error: impl Into<String>, keep_value: bool) {
        let retained = match std::mem::take(self) {
            LoadState::Idle => None,
            LoadState::Pending { retained } => retained,
            LoadState::Failed { retained, .. } => retained,
            LoadState::Succeeded(value) => Some(value),
        };
        *self = LoadState::Failed {
            error: error.into(),
            retained: if keep_value { retained } else { None },
        };
    }
}
