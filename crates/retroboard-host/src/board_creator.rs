//! Offline `BoardCreator` used by the host.

use async_trait::async_trait;
use retroboard_core::board::{AccessPolicyDescriptor, BoardCreator, BoardId, ColumnSpec};
use retroboard_core::error::DomainError;
use tracing::info;
use uuid::Uuid;

/// Board creator that mints identifiers locally instead of calling the
/// backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalBoardCreator;

#[async_trait]
impl BoardCreator for LocalBoardCreator {
    async fn create_board(
        &self,
        name: Option<&str>,
        access: &AccessPolicyDescriptor,
        columns: &[ColumnSpec],
    ) -> Result<BoardId, DomainError> {
        let board_id = BoardId(Uuid::new_v4());
        info!(
            %board_id,
            name = name.unwrap_or_default(),
            policy = ?access.policy,
            columns = columns.len(),
            "minted local board"
        );
        Ok(board_id)
    }
}
