//! Query handlers for the onboarding context.
//!
//! This module turns the state into a read-only view DTO for the
//! onboarding controller UI.

use serde::Serialize;

use crate::domain::phase::Phase;
use crate::domain::state::{OnboardingColumn, OnboardingState};

/// Read-only view of the onboarding progression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingView {
    /// Current phase.
    pub phase: Phase,
    /// Current step.
    pub step: u32,
    /// Number of steps in the current phase.
    pub total_steps: u32,
    /// Whether the guidance panel is expanded.
    pub step_open: bool,
    /// Whether going back would leave the current phase.
    pub is_first_step: bool,
    /// Whether going forward would leave the current phase.
    pub is_last_step: bool,
    /// Whether the user is onboarding at all.
    pub is_active: bool,
    /// Whether the user is inside a free interaction step.
    pub in_user_task: bool,
    /// Whether the demo voting overlay is shown.
    pub fake_votes_open: bool,
    /// Board columns taking part in the guided flow.
    pub onboarding_columns: Vec<OnboardingColumn>,
    /// Whether board demo notes were already spawned.
    pub spawned_board_notes: bool,
    /// Whether action demo notes were already spawned.
    pub spawned_action_notes: bool,
}

/// Builds the view of `state`.
#[must_use]
pub fn view(state: &OnboardingState) -> OnboardingView {
    let total_steps = state.phase.steps();
    OnboardingView {
        phase: state.phase,
        step: state.step,
        total_steps,
        step_open: state.step_open,
        is_first_step: state.step <= 1,
        is_last_step: state.step >= total_steps,
        is_active: state.is_active(),
        in_user_task: state.in_user_task,
        fake_votes_open: state.fake_votes_open,
        onboarding_columns: state.onboarding_columns.clone(),
        spawned_board_notes: state.spawned_board_notes,
        spawned_action_notes: state.spawned_action_notes,
    }
}
