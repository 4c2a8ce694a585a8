//! Retroboard Core — shared domain abstractions.
//!
//! This crate defines the fundamental traits and types that all bounded
//! contexts depend on. It contains no infrastructure code.

pub mod board;
pub mod command;
pub mod error;
pub mod listener;
pub mod store;
