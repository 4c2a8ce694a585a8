//! Board creation requests from the new-board screen.

use retroboard_core::board::{AccessPolicy, AccessPolicyDescriptor, BoardId, ColumnSpec};
use retroboard_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Column layouts offered on the new-board screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnTemplate {
    /// Mad, Sad, Glad plus an actions column.
    MadSadGlad,
    /// Start, Stop, Continue plus an actions column.
    StartStopContinue,
    /// A single topic column plus an actions column.
    LeanCoffee,
    /// Positive, Negative plus an actions column.
    PositiveNegative,
}

impl ColumnTemplate {
    /// Columns the backend creates for this template.
    #[must_use]
    pub fn columns(self) -> Vec<ColumnSpec> {
        let layout: &[(&str, &str)] = match self {
            Self::MadSadGlad => &[
                ("Mad", "planning-pink"),
                ("Sad", "backlog-blue"),
                ("Glad", "grooming-green"),
                ("Actions", "value-violet"),
            ],
            Self::StartStopContinue => &[
                ("Start", "grooming-green"),
                ("Stop", "planning-pink"),
                ("Continue", "backlog-blue"),
                ("Actions", "value-violet"),
            ],
            Self::LeanCoffee => &[("Lean Coffee", "backlog-blue"), ("Actions", "value-violet")],
            Self::PositiveNegative => &[
                ("Positive", "grooming-green"),
                ("Negative", "planning-pink"),
                ("Actions", "value-violet"),
            ],
        };
        layout
            .iter()
            .map(|(name, color)| ColumnSpec {
                name: (*name).to_owned(),
                color: (*color).to_owned(),
                visible: true,
            })
            .collect()
    }
}

/// What the user filled in on the new-board screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardRequest {
    /// Optional board title.
    #[serde(default)]
    pub name: Option<String>,
    /// Who may join.
    pub access_policy: AccessPolicy,
    /// Passphrase typed by the user; only used with `ByPassphrase`.
    #[serde(default)]
    pub passphrase: Option<String>,
    /// Chosen column layout.
    #[serde(default)]
    pub template: Option<ColumnTemplate>,
}

impl CreateBoardRequest {
    fn passphrase(&self) -> Option<&str> {
        self.passphrase.as_deref().filter(|p| !p.is_empty())
    }

    /// Validates the request and returns the template to create.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if no template was chosen, or if the
    /// policy is `ByPassphrase` and no passphrase was given.
    pub fn validate(&self) -> Result<ColumnTemplate, DomainError> {
        let template = self
            .template
            .ok_or_else(|| DomainError::Validation("a column template is required".to_owned()))?;
        if self.access_policy == AccessPolicy::ByPassphrase && self.passphrase().is_none() {
            return Err(DomainError::Validation(
                "a passphrase is required for passphrase-protected boards".to_owned(),
            ));
        }
        Ok(template)
    }

    /// The access policy as sent to the backend.
    #[must_use]
    pub fn access_descriptor(&self) -> AccessPolicyDescriptor {
        let passphrase = match self.access_policy {
            AccessPolicy::ByPassphrase => self.passphrase().map(str::to_owned),
            AccessPolicy::Public | AccessPolicy::ByInvite => None,
        };
        AccessPolicyDescriptor {
            policy: self.access_policy,
            passphrase,
        }
    }
}

/// Where the client navigates after a board has been created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardRoute {
    /// The regular board view.
    Board(BoardId),
    /// The guided onboarding board view.
    OnboardingBoard(BoardId),
}

impl BoardRoute {
    /// The board this route points at.
    #[must_use]
    pub fn board_id(self) -> BoardId {
        match self {
            Self::Board(id) | Self::OnboardingBoard(id) => id,
        }
    }

    /// The client path of this route.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Board(id) => format!("/board/{id}"),
            Self::OnboardingBoard(id) => format!("/onboarding-board/{id}"),
        }
    }
}
