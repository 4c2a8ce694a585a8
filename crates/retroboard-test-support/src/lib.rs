//! Shared test mocks and utilities for the Retroboard client engine.

mod board;
mod listener;
mod store;

pub use board::{BoardCreatorCall, FailingBoardCreator, FixedBoardCreator};
pub use listener::RecordingListener;
pub use store::{FailingStore, RecordingStore};
