//! Domain model for the onboarding context.

pub mod boards;
pub mod commands;
pub mod phase;
pub mod state;
pub mod transitions;
