//! Outcome and phase types for the round state machine.

use super::Marker;
use serde::{Deserialize, Serialize};

/// Result of judging a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line complete and squares still open.
    Pending,
    /// A marker owns a complete line.
    Winner(Marker),
    /// Every square marked, no line complete.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            Outcome::Winner(marker) => Some(*marker),
            Outcome::Pending | Outcome::Tie => None,
        }
    }

    /// Returns true once the game can't continue.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Pending)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Pending => write!(f, "In progress"),
            Outcome::Winner(marker) => write!(f, "{} wins", marker),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Where a match stands within the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the active contestant to move.
    #[default]
    AwaitingMove,
    /// The game ended in a win or tie; reset before playing again.
    RoundConcluded,
}
