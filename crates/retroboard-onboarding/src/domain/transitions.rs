//! The onboarding transition function.
//!
//! `transition` is pure and total: every command maps every state to a
//! state. Requests that make no sense (a step outside the target phase, an
//! unknown spawn target) return the input unchanged.

use super::commands::{NotesTarget, OnboardingCommand};
use super::phase::Phase;
use super::state::{OnboardingColumn, OnboardingState};

/// Applies `command` to `state` and returns the resulting state.
#[must_use]
pub fn transition(state: OnboardingState, command: &OnboardingCommand) -> OnboardingState {
    match command {
        OnboardingCommand::ChangePhase { phase } => enter(state, *phase, 1),
        OnboardingCommand::IncrementStep { amount } => increment(state, *amount),
        OnboardingCommand::DecrementStep { amount } => decrement(state, *amount),
        OnboardingCommand::SwitchPhaseStep { phase, step } => switch(state, phase, *step),
        OnboardingCommand::ToggleStepOpen => OnboardingState {
            step_open: !state.step_open,
            ..state
        },
        OnboardingCommand::RegisterOnboardingColumns { columns } => {
            if !state.is_active() {
                return state;
            }
            OnboardingState {
                onboarding_columns: columns
                    .iter()
                    .filter_map(OnboardingColumn::from_board_column)
                    .collect(),
                ..state
            }
        }
        OnboardingCommand::ClearOnboardingColumns => OnboardingState {
            onboarding_columns: Vec::new(),
            ..state
        },
        OnboardingCommand::SetInUserTask { flag } => OnboardingState {
            in_user_task: *flag,
            ..state
        },
        OnboardingCommand::SetFakeVotesOpen { flag } => OnboardingState {
            fake_votes_open: *flag,
            ..state
        },
        OnboardingCommand::SetSpawnedNotes { target, flag } => match target {
            NotesTarget::Board => OnboardingState {
                spawned_board_notes: *flag,
                ..state
            },
            NotesTarget::Action => OnboardingState {
                spawned_action_notes: *flag,
                ..state
            },
            NotesTarget::Other => state,
        },
    }
}

/// Lands on `step` of `phase` with the guidance panel open and no user task.
fn enter(state: OnboardingState, phase: Phase, step: u32) -> OnboardingState {
    OnboardingState {
        phase,
        step,
        step_open: true,
        in_user_task: false,
        ..state
    }
}

fn increment(state: OnboardingState, amount: u32) -> OnboardingState {
    let entry = state.phase.entry();
    let target = state.step.saturating_add(amount);
    if target <= entry.steps {
        return OnboardingState {
            step: target,
            step_open: true,
            ..state
        };
    }
    match entry.next {
        Some(next) => enter(state, next, 1),
        // Past the end of the flow: stay on the last step of the last phase.
        None => enter(state, entry.phase, entry.steps.max(1)),
    }
}

fn decrement(state: OnboardingState, amount: u32) -> OnboardingState {
    let phase = state.phase;
    if amount < state.step {
        let step = state.step - amount;
        return enter(state, phase, step);
    }
    match phase.prev() {
        Some(prev) => enter(state, prev, prev.steps()),
        None => enter(state, phase, 1),
    }
}

fn switch(state: OnboardingState, phase: &str, step: i64) -> OnboardingState {
    let Ok(phase) = phase.parse::<Phase>() else {
        return state;
    };
    match u32::try_from(step) {
        Ok(step) if phase.contains_step(step) => enter(state, phase, step),
        _ => state,
    }
}
