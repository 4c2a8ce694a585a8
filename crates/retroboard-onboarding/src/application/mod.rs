//! Application services for the onboarding context.

pub mod command_handlers;
pub mod persistence;
pub mod query_handlers;
pub mod session;
