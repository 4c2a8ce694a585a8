//! Line-based command loop.
//!
//! Each input line is one JSON command. After every applied command the
//! host writes one JSON response line. When the input ends the session is
//! ended, which persists progress exactly once.

use retroboard_core::board::BoardCreator;
use retroboard_core::command::Command;
use retroboard_core::error::DomainError;
use retroboard_core::store::DurableStore;
use retroboard_onboarding::application::command_handlers;
use retroboard_onboarding::application::query_handlers::{self, OnboardingView};
use retroboard_onboarding::application::session::OnboardingSession;
use retroboard_onboarding::domain::boards::CreateBoardRequest;
use retroboard_onboarding::domain::commands::OnboardingCommand;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument, warn};

use crate::error::AppError;

/// Commands handled by the host rather than the engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostCommand {
    /// Submit the new-board form.
    CreateBoard(CreateBoardRequest),
    /// Leave the new-board screen and stop onboarding.
    Abort,
}

/// One decoded input line.
#[derive(Debug, Clone)]
pub enum HostLine {
    /// An engine command.
    Onboarding(OnboardingCommand),
    /// A host command.
    Host(HostCommand),
}

/// One output line.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HostResponse {
    /// The state after a command.
    View(OnboardingView),
    /// Navigation target after a board was created.
    Route {
        /// Client path.
        path: String,
    },
    /// A request that was refused.
    Rejected {
        /// Why it was refused.
        message: String,
    },
    /// A request that was valid but could not be carried out.
    Failed {
        /// What went wrong.
        message: String,
    },
}

/// Decodes one input line.
///
/// Engine commands are tried first. When the line is not a host command
/// either, the engine's decode error is returned, since it names the
/// offending field or value.
///
/// # Errors
///
/// Returns the engine command decode error if the line matches neither
/// command set.
pub fn decode_line(line: &str) -> Result<HostLine, serde_json::Error> {
    match serde_json::from_str::<OnboardingCommand>(line) {
        Ok(command) => Ok(HostLine::Onboarding(command)),
        Err(engine_err) => serde_json::from_str::<HostCommand>(line)
            .map(HostLine::Host)
            .map_err(|host_err| {
                debug!(%host_err, "line is not a host command");
                engine_err
            }),
    }
}

/// Runs the command loop until `input` is exhausted, then ends the session.
///
/// # Errors
///
/// Returns `AppError::Io` if reading or writing fails, or
/// `AppError::Domain` if the store fails. The session is ended even when
/// the loop fails.
pub async fn run<R, W, S>(
    input: R,
    output: &mut W,
    session: &mut OnboardingSession<S>,
    creator: &dyn BoardCreator,
    onboarding: bool,
) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    S: DurableStore,
{
    let outcome = process(input, output, session, creator, onboarding).await;
    let persisted = session.end()?;
    info!(persisted, "input exhausted");
    outcome
}

async fn process<R, W, S>(
    input: R,
    output: &mut W,
    session: &mut OnboardingSession<S>,
    creator: &dyn BoardCreator,
    onboarding: bool,
) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    S: DurableStore,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let decoded = match decode_line(line) {
            Ok(decoded) => decoded,
            Err(err) => {
                warn!(%err, "skipping undecodable command line");
                continue;
            }
        };
        for response in handle_line(decoded, session, creator, onboarding).await? {
            let mut encoded = serde_json::to_vec(&response)?;
            encoded.push(b'\n');
            output.write_all(&encoded).await?;
        }
        output.flush().await?;
    }
    Ok(())
}

#[instrument(skip_all)]
async fn handle_line<S: DurableStore>(
    line: HostLine,
    session: &mut OnboardingSession<S>,
    creator: &dyn BoardCreator,
    onboarding: bool,
) -> Result<Vec<HostResponse>, AppError> {
    let mut responses = Vec::new();
    match line {
        HostLine::Onboarding(command) => {
            info!(command_type = command.command_type(), "handling onboarding command");
            session.dispatch(&command)?;
        }
        HostLine::Host(HostCommand::CreateBoard(request)) => {
            match command_handlers::handle_create_board(&request, onboarding, session, creator)
                .await
            {
                Ok(route) => responses.push(HostResponse::Route { path: route.path() }),
                Err(DomainError::Validation(message)) => {
                    responses.push(HostResponse::Rejected { message });
                }
                Err(DomainError::Infrastructure(message)) => {
                    warn!(%message, "board creation failed");
                    responses.push(HostResponse::Failed { message });
                }
                Err(err) => return Err(err.into()),
            }
        }
        HostLine::Host(HostCommand::Abort) => {
            command_handlers::handle_abort_onboarding(session)?;
        }
    }
    responses.push(HostResponse::View(query_handlers::view(session.state())));
    Ok(responses)
}

#[cfg(test)]
mod tests {
    use retroboard_core::board::BoardId;
    use retroboard_onboarding::domain::phase::Phase;
    use retroboard_test_support::{FailingBoardCreator, FixedBoardCreator, RecordingStore};
    use serde_json::Value;
    use uuid::Uuid;

    use super::*;

    async fn run_script(
        script: &str,
        onboarding: bool,
    ) -> (Vec<Value>, OnboardingSession<RecordingStore>) {
        let mut session = OnboardingSession::begin(RecordingStore::new()).unwrap();
        let creator = FixedBoardCreator::new(BoardId(Uuid::nil()));
        let mut output = Vec::new();

        run(script.as_bytes(), &mut output, &mut session, &creator, onboarding)
            .await
            .unwrap();

        let lines = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        (lines, session)
    }

    #[test]
    fn test_host_line_decodes_engine_and_host_commands() {
        let engine = decode_line(r#"{"type":"decrement_step"}"#).unwrap();
        let host = decode_line(r#"{"type":"abort"}"#).unwrap();

        assert!(matches!(
            engine,
            HostLine::Onboarding(OnboardingCommand::DecrementStep { amount: 1 })
        ));
        assert!(matches!(host, HostLine::Host(HostCommand::Abort)));
    }

    #[tokio::test]
    async fn test_run_prints_a_view_per_command_and_ends_session() {
        // Arrange
        let script = concat!(
            r#"{"type":"change_phase","phase":"intro"}"#,
            "\n",
            "\n",
            r#"{"type":"increment_step","amount":2}"#,
            "\n",
            r#"{"type":"toggle_step_open"}"#,
            "\n",
        );

        // Act
        let (lines, session) = run_script(script, true).await;

        // Assert
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1]["view"]["phase"], "intro");
        assert_eq!(lines[1]["view"]["step"], 3);
        assert_eq!(lines[2]["view"]["stepOpen"], false);

        assert!(session.is_ended());
        assert_eq!(session.store().value("onboarding_step").as_deref(), Some("3"));
        assert_eq!(
            session.store().value("onboarding_stepOpen").as_deref(),
            Some("false")
        );
    }

    #[test]
    fn test_decode_line_reports_the_engine_error() {
        let err = decode_line(r#"{"type":"change_phase","phase":"lobby"}"#).unwrap_err();

        assert!(err.to_string().contains("lobby"));
    }

    #[tokio::test]
    async fn test_run_skips_malformed_lines() {
        let script = "not json\n{\"type\":\"change_phase\",\"phase\":\"lobby\"}\n{\"type\":\"change_phase\",\"phase\":\"outro\"}\n";

        let (lines, _) = run_script(script, true).await;

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["view"]["phase"], "outro");
    }

    #[tokio::test]
    async fn test_run_create_board_in_onboarding_routes_to_onboarding_board() {
        let script = concat!(
            r#"{"type":"switch_phase_step","phase":"newBoard","step":4}"#,
            "\n",
            r#"{"type":"create_board","name":"Retro","accessPolicy":"PUBLIC","template":"mad_sad_glad"}"#,
            "\n",
        );

        let (lines, _) = run_script(script, true).await;

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1]["route"]["path"],
            "/onboarding-board/00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(lines[2]["view"]["phase"], "board_check_in");
    }

    #[tokio::test]
    async fn test_run_rejects_incomplete_board_form() {
        let script = r#"{"type":"create_board","accessPolicy":"BY_PASSPHRASE","template":"lean_coffee"}"#;

        let (lines, _) = run_script(script, false).await;

        assert_eq!(lines.len(), 2);
        assert!(lines[0]["rejected"]["message"].as_str().unwrap().contains("passphrase"));
    }

    #[tokio::test]
    async fn test_run_keeps_going_after_board_creation_fails() {
        // Arrange
        let script = concat!(
            r#"{"type":"switch_phase_step","phase":"newBoard","step":4}"#,
            "\n",
            r#"{"type":"create_board","name":"Retro","accessPolicy":"PUBLIC","template":"mad_sad_glad"}"#,
            "\n",
            r#"{"type":"toggle_step_open"}"#,
            "\n",
        );
        let mut session = OnboardingSession::begin(RecordingStore::new()).unwrap();
        let mut output = Vec::new();

        // Act
        run(
            script.as_bytes(),
            &mut output,
            &mut session,
            &FailingBoardCreator,
            true,
        )
        .await
        .unwrap();

        // Assert
        let lines: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1]["failed"]["message"], "connection refused");
        assert_eq!(lines[2]["view"]["phase"], "newBoard");
        assert_eq!(lines[3]["view"]["stepOpen"], false);
        assert!(session.is_ended());
        assert_eq!(
            session.store().value("onboarding_phase").as_deref(),
            Some("\"newBoard\"")
        );
    }

    #[tokio::test]
    async fn test_run_abort_returns_to_idle() {
        let script = concat!(
            r#"{"type":"change_phase","phase":"newBoard"}"#,
            "\n",
            r#"{"type":"abort"}"#,
            "\n",
        );

        let (lines, session) = run_script(script, true).await;

        assert_eq!(lines[1]["view"]["phase"], "none");
        assert_eq!(session.state().phase, Phase::Idle);
    }
}
