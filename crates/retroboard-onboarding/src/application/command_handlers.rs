//! Command handlers for the onboarding context.
//!
//! This module contains application-level command handler functions that
//! wrap the pure transition function with logging, and orchestrate the
//! board-creation flow against the remote board API.

use retroboard_core::board::BoardCreator;
use retroboard_core::command::Command;
use retroboard_core::error::DomainError;
use retroboard_core::store::DurableStore;
use tracing::{debug, info};

use crate::application::session::OnboardingSession;
use crate::domain::boards::{BoardRoute, CreateBoardRequest};
use crate::domain::commands::{NotesTarget, OnboardingCommand};
use crate::domain::phase::Phase;
use crate::domain::state::OnboardingState;
use crate::domain::transitions::transition;

/// Applies `command` to `state`, logging the resulting move.
#[must_use]
pub fn handle(state: OnboardingState, command: &OnboardingCommand) -> OnboardingState {
    let (from_phase, from_step) = (state.phase, state.step);
    let next = transition(state, command);
    debug!(
        command_type = command.command_type(),
        %from_phase,
        from_step,
        to_phase = %next.phase,
        to_step = next.step,
        "applied onboarding command"
    );
    next
}

/// Handles a submitted new-board form: validates it, creates the board, and
/// returns where to navigate.
///
/// When `onboarding` is set, the session moves to the first board phase and
/// the demo flags are reset so the board phases spawn their content afresh.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the form is incomplete, the
/// creator's error if the board cannot be created, or
/// `DomainError::SessionEnded` if the session has ended.
pub async fn handle_create_board<S: DurableStore>(
    request: &CreateBoardRequest,
    onboarding: bool,
    session: &mut OnboardingSession<S>,
    creator: &dyn BoardCreator,
) -> Result<BoardRoute, DomainError> {
    let template = request.validate()?;
    if session.is_ended() {
        return Err(DomainError::SessionEnded);
    }

    let board_id = creator
        .create_board(
            request.name.as_deref(),
            &request.access_descriptor(),
            &template.columns(),
        )
        .await?;
    info!(%board_id, onboarding, "board created");

    if !onboarding {
        return Ok(BoardRoute::Board(board_id));
    }

    for command in [
        OnboardingCommand::ChangePhase {
            phase: Phase::BoardCheckIn,
        },
        OnboardingCommand::SetFakeVotesOpen { flag: false },
        OnboardingCommand::SetSpawnedNotes {
            target: NotesTarget::Action,
            flag: false,
        },
        OnboardingCommand::SetSpawnedNotes {
            target: NotesTarget::Board,
            flag: false,
        },
    ] {
        session.dispatch(&command)?;
    }
    Ok(BoardRoute::OnboardingBoard(board_id))
}

/// Handles the user leaving the new-board screen mid-flow.
///
/// # Errors
///
/// Returns `DomainError::SessionEnded` if the session has ended.
pub fn handle_abort_onboarding<S: DurableStore>(
    session: &mut OnboardingSession<S>,
) -> Result<&OnboardingState, DomainError> {
    info!(phase = %session.state().phase, "onboarding aborted");
    session.dispatch(&OnboardingCommand::ChangePhase { phase: Phase::Idle })
}
