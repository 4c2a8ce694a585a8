//! Board creation abstractions.
//!
//! Boards are owned by the remote backend. Client contexts only describe the
//! board they want and receive its identifier back.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a board created by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardId(pub Uuid);

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Who may join a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessPolicy {
    /// Anyone with the link.
    Public,
    /// Participants must know a passphrase.
    ByPassphrase,
    /// Participants must be admitted by a moderator.
    ByInvite,
}

/// Access policy as sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicyDescriptor {
    /// The policy type.
    #[serde(rename = "type")]
    pub policy: AccessPolicy,
    /// Passphrase, present only for `ByPassphrase`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
}

/// A column the backend should create on a new board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column title.
    pub name: String,
    /// Accent color name.
    pub color: String,
    /// Whether participants can see the column.
    pub visible: bool,
}

/// Port for the remote board-creation call.
#[async_trait]
pub trait BoardCreator: Send + Sync {
    /// Creates a board and returns its identifier.
    ///
    /// `name` is optional; the backend picks a default title when absent.
    async fn create_board(
        &self,
        name: Option<&str>,
        access: &AccessPolicyDescriptor,
        columns: &[ColumnSpec],
    ) -> Result<BoardId, DomainError>;
}
