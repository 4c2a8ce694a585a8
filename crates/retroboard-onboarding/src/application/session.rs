//! Onboarding session lifecycle.
//!
//! An `OnboardingSession` owns the state for one browser session. It is
//! resumed from durable storage when the session begins and flushed exactly
//! once when it ends; in between, the state only changes through commands.

use retroboard_core::error::DomainError;
pub use retroboard_core::listener::SessionListener;
use retroboard_core::store::DurableStore;
use tracing::info;

use crate::application::{command_handlers, persistence};
use crate::domain::commands::OnboardingCommand;
use crate::domain::phase::Phase;
use crate::domain::state::OnboardingState;

/// The onboarding state of one browser session together with its store.
pub struct OnboardingSession<S: DurableStore> {
    store: S,
    state: OnboardingState,
    listeners: Vec<Box<dyn SessionListener>>,
    ended: bool,
}

impl<S: DurableStore> std::fmt::Debug for OnboardingSession<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnboardingSession")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .field("ended", &self.ended)
            .finish_non_exhaustive()
    }
}

impl<S: DurableStore> OnboardingSession<S> {
    /// Begins a session, resuming whatever progress `store` holds.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the store cannot be read.
    pub fn begin(store: S) -> Result<Self, DomainError> {
        let state = persistence::load(&store)?;
        info!(phase = %state.phase, step = state.step, "onboarding session started");
        Ok(Self {
            store,
            state,
            listeners: Vec::new(),
            ended: false,
        })
    }

    /// Registers a collaborator to notify when the session ends.
    #[must_use]
    pub fn with_listener(mut self, listener: impl SessionListener + 'static) -> Self {
        self.listeners.push(Box::new(listener));
        self
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &OnboardingState {
        &self.state
    }

    /// Whether [`end`](Self::end) has already run.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// The backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Applies `command` and returns the new state.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SessionEnded` if the session has ended.
    pub fn dispatch(
        &mut self,
        command: &OnboardingCommand,
    ) -> Result<&OnboardingState, DomainError> {
        if self.ended {
            return Err(DomainError::SessionEnded);
        }
        let current = std::mem::take(&mut self.state);
        self.state = command_handlers::handle(current, command);
        Ok(&self.state)
    }

    /// Writes the full state to the store without ending the session.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SessionEnded` if the session has ended, or the
    /// store's error if it cannot be written.
    pub fn checkpoint(&mut self) -> Result<(), DomainError> {
        if self.ended {
            return Err(DomainError::SessionEnded);
        }
        persistence::save(&mut self.store, &self.state)
    }

    /// Ends the session: persists progress, resets the in-memory state to
    /// idle, and notifies listeners.
    ///
    /// Returns `false` without doing anything if the session already ended.
    ///
    /// # Errors
    ///
    /// Returns the store's error if progress cannot be written. The session
    /// stays open in that case so the host may retry.
    pub fn end(&mut self) -> Result<bool, DomainError> {
        if self.ended {
            return Ok(false);
        }
        persistence::save_progress(&mut self.store, &self.state)?;
        info!(phase = %self.state.phase, step = self.state.step, "onboarding session ended");

        self.ended = true;
        let current = std::mem::take(&mut self.state);
        let current = command_handlers::handle(
            current,
            &OnboardingCommand::ChangePhase { phase: Phase::Idle },
        );
        self.state = command_handlers::handle(current, &OnboardingCommand::ClearOnboardingColumns);

        for listener in &mut self.listeners {
            listener.on_leave();
        }
        Ok(true)
    }

    /// Consumes the session and returns its store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}
