//! Onboarding phase topology.
//!
//! The guided flow is a fixed, ordered sequence of phases, each with a fixed
//! number of steps. Neighbor lookups go through a precomputed table indexed
//! by the phase discriminant, so no search is needed at transition time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named stage of the guided onboarding flow.
///
/// Variants are declared in flow order; the discriminant is the phase's
/// position in [`TOPOLOGY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Not onboarding.
    #[default]
    #[serde(rename = "none")]
    Idle,
    /// Welcome screens.
    #[serde(rename = "intro")]
    Intro,
    /// Board creation screen.
    #[serde(rename = "newBoard")]
    NewBoard,
    /// Check-in round on the board.
    #[serde(rename = "board_check_in")]
    BoardCheckIn,
    /// Data gathering round.
    #[serde(rename = "board_data")]
    BoardData,
    /// Insights round.
    #[serde(rename = "board_insights")]
    BoardInsights,
    /// Action items round.
    #[serde(rename = "board_actions")]
    BoardActions,
    /// Check-out round.
    #[serde(rename = "board_check_out")]
    BoardCheckOut,
    /// Closing screen.
    #[serde(rename = "outro")]
    Outro,
}

/// One row of the phase topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseEntry {
    /// The phase this row describes.
    pub phase: Phase,
    /// Position in the flow.
    pub index: usize,
    /// Number of steps inside the phase.
    pub steps: u32,
    /// The phase before this one, if any.
    pub prev: Option<Phase>,
    /// The phase after this one, if any.
    pub next: Option<Phase>,
}

const fn row(phase: Phase, steps: u32, prev: Option<Phase>, next: Option<Phase>) -> PhaseEntry {
    PhaseEntry {
        phase,
        index: phase as usize,
        steps,
        prev,
        next,
    }
}

/// The immutable phase table, in flow order.
pub static TOPOLOGY: [PhaseEntry; 9] = [
    row(Phase::Idle, 0, None, Some(Phase::Intro)),
    row(Phase::Intro, 3, Some(Phase::Idle), Some(Phase::NewBoard)),
    row(Phase::NewBoard, 4, Some(Phase::Intro), Some(Phase::BoardCheckIn)),
    row(Phase::BoardCheckIn, 3, Some(Phase::NewBoard), Some(Phase::BoardData)),
    row(Phase::BoardData, 5, Some(Phase::BoardCheckIn), Some(Phase::BoardInsights)),
    row(Phase::BoardInsights, 5, Some(Phase::BoardData), Some(Phase::BoardActions)),
    row(Phase::BoardActions, 4, Some(Phase::BoardInsights), Some(Phase::BoardCheckOut)),
    row(Phase::BoardCheckOut, 3, Some(Phase::BoardActions), Some(Phase::Outro)),
    row(Phase::Outro, 1, Some(Phase::BoardCheckOut), None),
];

impl Phase {
    /// All phases in flow order.
    pub const ALL: [Phase; 9] = [
        Phase::Idle,
        Phase::Intro,
        Phase::NewBoard,
        Phase::BoardCheckIn,
        Phase::BoardData,
        Phase::BoardInsights,
        Phase::BoardActions,
        Phase::BoardCheckOut,
        Phase::Outro,
    ];

    /// Returns this phase's row in the topology table.
    #[must_use]
    pub fn entry(self) -> &'static PhaseEntry {
        &TOPOLOGY[self as usize]
    }

    /// Number of steps inside this phase.
    #[must_use]
    pub fn steps(self) -> u32 {
        self.entry().steps
    }

    /// The phase after this one, or `None` for the last phase.
    #[must_use]
    pub fn next(self) -> Option<Phase> {
        self.entry().next
    }

    /// The phase before this one, or `None` for the first phase.
    #[must_use]
    pub fn prev(self) -> Option<Phase> {
        self.entry().prev
    }

    /// Whether this is the first phase of the flow.
    #[must_use]
    pub fn is_first(self) -> bool {
        self.entry().prev.is_none()
    }

    /// Whether this is the last phase of the flow.
    #[must_use]
    pub fn is_last(self) -> bool {
        self.entry().next.is_none()
    }

    /// Whether `step` is a valid 1-indexed step of this phase.
    #[must_use]
    pub fn contains_step(self, step: u32) -> bool {
        step >= 1 && step <= self.steps()
    }

    /// The wire name of this phase.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Idle => "none",
            Phase::Intro => "intro",
            Phase::NewBoard => "newBoard",
            Phase::BoardCheckIn => "board_check_in",
            Phase::BoardData => "board_data",
            Phase::BoardInsights => "board_insights",
            Phase::BoardActions => "board_actions",
            Phase::BoardCheckOut => "board_check_out",
            Phase::Outro => "outro",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known phase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown onboarding phase: {0}")]
pub struct UnknownPhase(pub String);

impl FromStr for Phase {
    type Err = UnknownPhase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::ALL
            .into_iter()
            .find(|phase| phase.as_str() == s)
            .ok_or_else(|| UnknownPhase(s.to_owned()))
    }
}
