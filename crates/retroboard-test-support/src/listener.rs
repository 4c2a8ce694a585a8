//! Test listener — counts session departures.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use retroboard_core::listener::SessionListener;

/// A session listener that counts `on_leave` calls. Clones share the count,
/// so a test can keep one handle and give the session another.
#[derive(Debug, Clone, Default)]
pub struct RecordingListener {
    calls: Arc<AtomicUsize>,
}

impl RecordingListener {
    /// Create a listener that has not been called.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `on_leave` has been called on any clone.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SessionListener for RecordingListener {
    fn on_leave(&mut self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}
