//! Persistence bridge between `OnboardingState` and a `DurableStore`.
//!
//! Every field lives under its own key as JSON text, so a reload can resume
//! the flow even if only some keys were written. Reading never fails on bad
//! data: absent or malformed values fall back to the defaults of
//! [`OnboardingState::default`], and a stale phase name falls back to
//! `none`. Only failures of the store itself are propagated.

use retroboard_core::error::DomainError;
use retroboard_core::store::DurableStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domain::phase::Phase;
use crate::domain::state::{OnboardingColumn, OnboardingState};

/// Storage key of the current phase.
pub const PHASE_KEY: &str = "onboarding_phase";
/// Storage key of the current step.
pub const STEP_KEY: &str = "onboarding_step";
/// Storage key of the guidance panel flag.
pub const STEP_OPEN_KEY: &str = "onboarding_stepOpen";
/// Storage key of the onboarding columns.
pub const COLUMNS_KEY: &str = "onboarding_columns";
/// Storage key of the user task flag.
pub const IN_USER_TASK_KEY: &str = "onboarding_inUserTask";
/// Storage key of the demo voting overlay flag.
pub const FAKE_VOTES_OPEN_KEY: &str = "onboarding_fakeVotesOpen";
/// Storage key of the action notes spawn-once flag.
pub const SPAWNED_ACTION_NOTES_KEY: &str = "onboarding_spawnedActionNotes";
/// Storage key of the board notes spawn-once flag.
pub const SPAWNED_BOARD_NOTES_KEY: &str = "onboarding_spawnedBoardNotes";

/// Every key owned by the onboarding context.
pub const ALL_KEYS: [&str; 8] = [
    PHASE_KEY,
    STEP_KEY,
    STEP_OPEN_KEY,
    COLUMNS_KEY,
    IN_USER_TASK_KEY,
    FAKE_VOTES_OPEN_KEY,
    SPAWNED_ACTION_NOTES_KEY,
    SPAWNED_BOARD_NOTES_KEY,
];

/// Reads the onboarding state from `store`.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the store cannot be read.
pub fn load<S: DurableStore + ?Sized>(store: &S) -> Result<OnboardingState, DomainError> {
    let defaults = OnboardingState::default();

    let phase = match store.get(PHASE_KEY)? {
        Some(raw) => parse_phase(&raw),
        None => defaults.phase,
    };
    let mut step = read(store, STEP_KEY)?.unwrap_or(defaults.step);
    if phase.steps() > 0 && !phase.contains_step(step) {
        warn!(%phase, step, "stored onboarding step out of range, restarting phase");
        step = 1;
    }
    let mut onboarding_columns = read::<_, Vec<OnboardingColumn>>(store, COLUMNS_KEY)?
        .unwrap_or(defaults.onboarding_columns);
    if phase == Phase::Idle && !onboarding_columns.is_empty() {
        warn!(
            columns = onboarding_columns.len(),
            "stored onboarding columns outlived the flow, dropping them"
        );
        onboarding_columns.clear();
    }

    Ok(OnboardingState {
        phase,
        step,
        step_open: read(store, STEP_OPEN_KEY)?.unwrap_or(defaults.step_open),
        onboarding_columns,
        in_user_task: read(store, IN_USER_TASK_KEY)?.unwrap_or(defaults.in_user_task),
        fake_votes_open: read(store, FAKE_VOTES_OPEN_KEY)?.unwrap_or(defaults.fake_votes_open),
        spawned_board_notes: read(store, SPAWNED_BOARD_NOTES_KEY)?
            .unwrap_or(defaults.spawned_board_notes),
        spawned_action_notes: read(store, SPAWNED_ACTION_NOTES_KEY)?
            .unwrap_or(defaults.spawned_action_notes),
    })
}

/// Writes the progression keys (`phase`, `step`, `stepOpen`) to `store`.
///
/// This is what a session persists when it ends.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the store cannot be written.
pub fn save_progress<S: DurableStore + ?Sized>(
    store: &mut S,
    state: &OnboardingState,
) -> Result<(), DomainError> {
    write(store, PHASE_KEY, &state.phase)?;
    write(store, STEP_KEY, &state.step)?;
    write(store, STEP_OPEN_KEY, &state.step_open)
}

/// Writes every onboarding key to `store`.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the store cannot be written.
pub fn save<S: DurableStore + ?Sized>(
    store: &mut S,
    state: &OnboardingState,
) -> Result<(), DomainError> {
    save_progress(store, state)?;
    write(store, COLUMNS_KEY, &state.onboarding_columns)?;
    write(store, IN_USER_TASK_KEY, &state.in_user_task)?;
    write(store, FAKE_VOTES_OPEN_KEY, &state.fake_votes_open)?;
    write(store, SPAWNED_ACTION_NOTES_KEY, &state.spawned_action_notes)?;
    write(store, SPAWNED_BOARD_NOTES_KEY, &state.spawned_board_notes)
}

/// Removes every onboarding key from `store`.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the store cannot be written.
pub fn clear<S: DurableStore + ?Sized>(store: &mut S) -> Result<(), DomainError> {
    for key in ALL_KEYS {
        store.remove(key)?;
    }
    Ok(())
}

/// Accepts both the JSON-encoded form (`"intro"`) and a bare name (`intro`).
fn parse_phase(raw: &str) -> Phase {
    let name = serde_json::from_str::<String>(raw).unwrap_or_else(|_| raw.trim().to_owned());
    name.parse().unwrap_or_else(|err| {
        warn!(%err, "stored onboarding phase is stale, falling back to none");
        Phase::Idle
    })
}

fn read<S, T>(store: &S, key: &str) -> Result<Option<T>, DomainError>
where
    S: DurableStore + ?Sized,
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            warn!(key, %err, "ignoring malformed onboarding value");
            Ok(None)
        }
    }
}

fn write<S, T>(store: &mut S, key: &str, value: &T) -> Result<(), DomainError>
where
    S: DurableStore + ?Sized,
    T: Serialize + ?Sized,
{
    let encoded = serde_json::to_string(value)
        .map_err(|e| DomainError::Serialization(format!("failed to encode {key}: {e}")))?;
    store.set(key, &encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use retroboard_test_support::{FailingStore, RecordingStore};

    #[test]
    fn test_load_from_empty_store_returns_defaults() {
        let store = RecordingStore::new();

        let state = load(&store).unwrap();

        assert_eq!(state, OnboardingState::default());
    }

    #[test]
    fn test_progress_round_trips() {
        // Arrange
        let mut store = RecordingStore::new();
        let state = OnboardingState {
            phase: Phase::BoardInsights,
            step: 4,
            step_open: false,
            ..OnboardingState::default()
        };

        // Act
        save_progress(&mut store, &state).unwrap();
        let loaded = load(&store).unwrap();

        // Assert
        assert_eq!(loaded.phase, Phase::BoardInsights);
        assert_eq!(loaded.step, 4);
        assert!(!loaded.step_open);
    }

    #[test]
    fn test_save_progress_writes_only_progress_keys() {
        let mut store = RecordingStore::new();

        save_progress(&mut store, &OnboardingState::default()).unwrap();

        let keys: Vec<String> = store.writes().into_iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec![PHASE_KEY, STEP_KEY, STEP_OPEN_KEY]);
    }

    #[test]
    fn test_save_writes_json_values() {
        let mut store = RecordingStore::new();
        let state = OnboardingState {
            phase: Phase::NewBoard,
            step: 2,
            onboarding_columns: vec![OnboardingColumn {
                id: "c1".to_owned(),
                name: "Mad".to_owned(),
            }],
            spawned_board_notes: true,
            ..OnboardingState::default()
        };

        save(&mut store, &state).unwrap();

        assert_eq!(store.value(PHASE_KEY).as_deref(), Some("\"newBoard\""));
        assert_eq!(store.value(STEP_KEY).as_deref(), Some("2"));
        assert_eq!(
            store.value(COLUMNS_KEY).as_deref(),
            Some(r#"[{"id":"c1","name":"Mad"}]"#)
        );
        assert_eq!(store.value(SPAWNED_BOARD_NOTES_KEY).as_deref(), Some("true"));
        assert_eq!(load(&store).unwrap(), state);
    }

    #[test]
    fn test_load_normalizes_stale_phase_to_none() {
        let store = RecordingStore::with_entries([(PHASE_KEY, "\"board_column\"")]);

        let state = load(&store).unwrap();

        assert_eq!(state.phase, Phase::Idle);
    }

    #[test]
    fn test_load_drops_columns_stored_next_to_idle_phase() {
        // Arrange
        let store = RecordingStore::with_entries([
            (PHASE_KEY, "\"none\""),
            (COLUMNS_KEY, r#"[{"id":"c1","name":"Mad"}]"#),
            (FAKE_VOTES_OPEN_KEY, "true"),
        ]);

        // Act
        let state = load(&store).unwrap();

        // Assert
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.onboarding_columns.is_empty());
        assert!(state.fake_votes_open);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_load_drops_columns_when_stale_phase_falls_back_to_none() {
        let store = RecordingStore::with_entries([
            (PHASE_KEY, "\"board_column\""),
            (COLUMNS_KEY, r#"[{"id":"c1","name":"Mad"}]"#),
        ]);

        let state = load(&store).unwrap();

        assert_eq!(state.phase, Phase::Idle);
        assert!(state.onboarding_columns.is_empty());
    }

    #[test]
    fn test_load_accepts_bare_phase_name() {
        let store = RecordingStore::with_entries([(PHASE_KEY, "board_data"), (STEP_KEY, "5")]);

        let state = load(&store).unwrap();

        assert_eq!(state.phase, Phase::BoardData);
        assert_eq!(state.step, 5);
    }

    #[test]
    fn test_load_restarts_phase_when_step_out_of_range() {
        let store = RecordingStore::with_entries([(PHASE_KEY, "\"intro\""), (STEP_KEY, "9")]);

        let state = load(&store).unwrap();

        assert_eq!(state.phase, Phase::Intro);
        assert_eq!(state.step, 1);
    }

    #[test]
    fn test_load_ignores_malformed_values() {
        let store = RecordingStore::with_entries([
            (PHASE_KEY, "\"outro\""),
            (STEP_OPEN_KEY, "maybe"),
            (COLUMNS_KEY, "{\"id\":1}"),
            (FAKE_VOTES_OPEN_KEY, "true"),
        ]);

        let state = load(&store).unwrap();

        assert_eq!(state.phase, Phase::Outro);
        assert!(state.step_open);
        assert!(state.onboarding_columns.is_empty());
        assert!(state.fake_votes_open);
    }

    #[test]
    fn test_clear_removes_every_key() {
        let mut store = RecordingStore::new();
        save(&mut store, &OnboardingState::default()).unwrap();

        clear(&mut store).unwrap();

        assert!(ALL_KEYS.iter().all(|key| store.value(key).is_none()));
    }

    #[test]
    fn test_store_failures_propagate() {
        let mut store = FailingStore;

        assert!(matches!(load(&store), Err(DomainError::Infrastructure(_))));
        assert!(matches!(
            save(&mut store, &OnboardingState::default()),
            Err(DomainError::Infrastructure(_))
        ));
    }
}
