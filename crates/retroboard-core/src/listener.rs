//! Session lifecycle listener port.

/// Collaborator notified when the user leaves the session.
pub trait SessionListener: Send {
    /// Called once, after progress has been persisted.
    fn on_leave(&mut self);
}

impl<F: FnMut() + Send> SessionListener for F {
    fn on_leave(&mut self) {
        self();
    }
}
