//! Onboarding state.

use serde::{Deserialize, Serialize};

use super::phase::Phase;

/// Board column names that take part in the guided flow.
pub const ONBOARDING_COLUMN_NAMES: [&str; 7] =
    ["Mad", "Sad", "Glad", "Actions", "Start", "Stop", "Continue"];

/// A board column as reported by the board view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardColumn {
    /// Column identifier.
    pub id: String,
    /// Column title.
    pub name: String,
    /// Accent color name.
    #[serde(default)]
    pub color: Option<String>,
    /// Whether the column is hidden from participants.
    #[serde(default)]
    pub hidden: bool,
}

/// A board column that takes part in the guided flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingColumn {
    /// Column identifier.
    pub id: String,
    /// Column title.
    pub name: String,
}

impl OnboardingColumn {
    /// Returns the onboarding projection of `column` if its name is on the
    /// allow-list.
    #[must_use]
    pub fn from_board_column(column: &BoardColumn) -> Option<Self> {
        ONBOARDING_COLUMN_NAMES
            .contains(&column.name.as_str())
            .then(|| Self {
                id: column.id.clone(),
                name: column.name.clone(),
            })
    }
}

/// Progression state of the guided onboarding flow.
///
/// `step` is 1-indexed and lies within `1..=phase.steps()` for every phase
/// that has steps. For [`Phase::Idle`] it carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingState {
    /// Current phase.
    pub phase: Phase,
    /// Current step inside the phase.
    pub step: u32,
    /// Whether the guidance panel of the current step is expanded.
    pub step_open: bool,
    /// Board columns recognized as part of the guided flow.
    pub onboarding_columns: Vec<OnboardingColumn>,
    /// Set while the user performs a free interaction that must not
    /// auto-advance.
    pub in_user_task: bool,
    /// Whether the demo voting overlay is shown.
    pub fake_votes_open: bool,
    /// Whether demo notes were already spawned into the board phases.
    pub spawned_board_notes: bool,
    /// Whether demo notes were already spawned into the actions phase.
    pub spawned_action_notes: bool,
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            step: 1,
            step_open: true,
            onboarding_columns: Vec::new(),
            in_user_task: false,
            fake_votes_open: false,
            spawned_board_notes: false,
            spawned_action_notes: false,
        }
    }
}

impl OnboardingState {
    /// Whether the user is currently onboarding.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Whether `step` is consistent with `phase`.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.phase.steps() == 0 || self.phase.contains_step(self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(id: &str, name: &str) -> BoardColumn {
        BoardColumn {
            id: id.to_owned(),
            name: name.to_owned(),
            color: Some("backlog-blue".to_owned()),
            hidden: false,
        }
    }

    #[test]
    fn test_default_state_is_idle() {
        let state = OnboardingState::default();

        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.step, 1);
        assert!(state.step_open);
        assert!(state.onboarding_columns.is_empty());
        assert!(!state.in_user_task);
        assert!(!state.fake_votes_open);
        assert!(!state.spawned_board_notes);
        assert!(!state.spawned_action_notes);
        assert!(!state.is_active());
    }

    #[test]
    fn test_from_board_column_keeps_only_id_and_name() {
        let projected = OnboardingColumn::from_board_column(&column("c1", "Glad"));

        assert_eq!(
            projected,
            Some(OnboardingColumn {
                id: "c1".to_owned(),
                name: "Glad".to_owned(),
            })
        );
    }

    #[test]
    fn test_from_board_column_is_case_sensitive() {
        assert!(OnboardingColumn::from_board_column(&column("c1", "glad")).is_none());
        assert!(OnboardingColumn::from_board_column(&column("c2", "Lean Coffee")).is_none());
    }

    #[test]
    fn test_is_consistent_checks_step_range() {
        let mut state = OnboardingState {
            phase: Phase::BoardData,
            step: 5,
            ..OnboardingState::default()
        };
        assert!(state.is_consistent());

        state.step = 6;
        assert!(!state.is_consistent());

        state.phase = Phase::Idle;
        state.step = 0;
        assert!(state.is_consistent());
    }

    #[test]
    fn test_state_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(OnboardingState::default()).unwrap();

        assert_eq!(json["phase"], "none");
        assert_eq!(json["stepOpen"], true);
        assert_eq!(json["onboardingColumns"], serde_json::json!([]));
        assert_eq!(json["spawnedActionNotes"], false);
    }
}
