//! Test board creators — mock `BoardCreator` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use retroboard_core::board::{AccessPolicyDescriptor, BoardCreator, BoardId, ColumnSpec};
use retroboard_core::error::DomainError;

/// Arguments of one `create_board` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCreatorCall {
    /// Requested board name.
    pub name: Option<String>,
    /// Requested access policy.
    pub access: AccessPolicyDescriptor,
    /// Requested columns.
    pub columns: Vec<ColumnSpec>,
}

/// A board creator that always returns the same identifier and records
/// every call.
#[derive(Debug)]
pub struct FixedBoardCreator {
    board_id: BoardId,
    calls: Mutex<Vec<BoardCreatorCall>>,
}

impl FixedBoardCreator {
    /// Create a creator that answers every call with `board_id`.
    #[must_use]
    pub fn new(board_id: BoardId) -> Self {
        Self {
            board_id,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all calls received.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<BoardCreatorCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BoardCreator for FixedBoardCreator {
    async fn create_board(
        &self,
        name: Option<&str>,
        access: &AccessPolicyDescriptor,
        columns: &[ColumnSpec],
    ) -> Result<BoardId, DomainError> {
        self.calls.lock().unwrap().push(BoardCreatorCall {
            name: name.map(str::to_owned),
            access: access.clone(),
            columns: columns.to_vec(),
        });
        Ok(self.board_id)
    }
}

/// A board creator that always returns an infrastructure error.
#[derive(Debug)]
pub struct FailingBoardCreator;

#[async_trait]
impl BoardCreator for FailingBoardCreator {
    async fn create_board(
        &self,
        _name: Option<&str>,
        _access: &AccessPolicyDescriptor,
        _columns: &[ColumnSpec],
    ) -> Result<BoardId, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
