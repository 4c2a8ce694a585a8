//! Retroboard host — drives the onboarding engine from a line-based command
//! stream and persists its progress to a file store.

pub mod board_creator;
pub mod config;
pub mod error;
pub mod runner;
