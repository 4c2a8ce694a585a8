//! Commands for the onboarding context.

use retroboard_core::command::Command;
use serde::{Deserialize, Serialize};

use super::phase::Phase;
use super::state::BoardColumn;

/// Which demo content a spawn-once flag guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotesTarget {
    /// Notes spawned into the board phases.
    Board,
    /// Notes spawned into the actions phase.
    Action,
    /// Any target name the engine does not know.
    #[serde(other)]
    Other,
}

fn one() -> u32 {
    1
}

/// A discrete action driving the onboarding progression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OnboardingCommand {
    /// Jump to the first step of `phase`.
    ChangePhase {
        /// Target phase.
        phase: Phase,
    },
    /// Advance `amount` steps, moving to the next phase on overflow.
    IncrementStep {
        /// Number of steps.
        #[serde(default = "one")]
        amount: u32,
    },
    /// Retreat `amount` steps, moving to the last step of the previous phase
    /// on underflow.
    DecrementStep {
        /// Number of steps.
        #[serde(default = "one")]
        amount: u32,
    },
    /// Jump to a specific step; ignored unless the phase is known and the
    /// step lies inside it.
    SwitchPhaseStep {
        /// Target phase name.
        phase: String,
        /// Target step.
        step: i64,
    },
    /// Expand or collapse the current step's guidance panel.
    ToggleStepOpen,
    /// Replace the onboarding columns with the allow-listed subset of
    /// `columns`.
    RegisterOnboardingColumns {
        /// Columns currently on the board.
        columns: Vec<BoardColumn>,
    },
    /// Forget the onboarding columns.
    ClearOnboardingColumns,
    /// Mark whether the user is inside a free interaction step.
    SetInUserTask {
        /// New value.
        flag: bool,
    },
    /// Show or hide the demo voting overlay.
    SetFakeVotesOpen {
        /// New value.
        flag: bool,
    },
    /// Set a spawn-once flag.
    SetSpawnedNotes {
        /// Which flag.
        target: NotesTarget,
        /// New value.
        flag: bool,
    },
}

impl OnboardingCommand {
    /// `IncrementStep` by one.
    #[must_use]
    pub fn next_step() -> Self {
        Self::IncrementStep { amount: 1 }
    }

    /// `DecrementStep` by one.
    #[must_use]
    pub fn previous_step() -> Self {
        Self::DecrementStep { amount: 1 }
    }

    /// `SwitchPhaseStep` addressed by a typed phase.
    #[must_use]
    pub fn switch_to(phase: Phase, step: u32) -> Self {
        Self::SwitchPhaseStep {
            phase: phase.as_str().to_owned(),
            step: i64::from(step),
        }
    }
}

impl Command for OnboardingCommand {
    fn command_type(&self) -> &'static str {
        match self {
            Self::ChangePhase { .. } => "onboarding.change_phase",
            Self::IncrementStep { .. } => "onboarding.increment_step",
            Self::DecrementStep { .. } => "onboarding.decrement_step",
            Self::SwitchPhaseStep { .. } => "onboarding.switch_phase_step",
            Self::ToggleStepOpen => "onboarding.toggle_step_open",
            Self::RegisterOnboardingColumns { .. } => "onboarding.register_onboarding_columns",
            Self::ClearOnboardingColumns => "onboarding.clear_onboarding_columns",
            Self::SetInUserTask { .. } => "onboarding.set_in_user_task",
            Self::SetFakeVotesOpen { .. } => "onboarding.set_fake_votes_open",
            Self::SetSpawnedNotes { .. } => "onboarding.set_spawned_notes",
        }
    }
}
