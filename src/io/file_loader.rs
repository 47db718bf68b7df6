//! Import file loading state.

/// Holds the state of a background import read.
///
/// Only the in_progress flag is shared; file contents come through a channel.
/// Wrapped in an `Arc<Mutex<>>` so the reader thread can clear it when done.
pub struct LoadingState {
    /// True while an import file is being read
    pub in_progress: bool,
}

impl LoadingState {
    /// Creates a new loading state that is not in progress.
    pub fn new() -> Self {
        Self {
            in_progress: false,
        }
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}
