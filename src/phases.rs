//! Game phase and outcome types.
//!
//! Both are derived views over engine state: the phase follows from the
//! remaining stock counts and the outcome from the board contents. Neither
//! is stored, so neither can go stale.

use serde::{Deserialize, Serialize};

use crate::types::Player;

/// Phase of the game, derived from the stock counts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Phase {
    /// Players still hold unplaced stock; stones are added, not moved.
    Placement,
    /// All stock placed; players relocate their own stones.
    Movement,
}

/// Outcome of the game, recomputed from the board on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No alignment on the board yet.
    InProgress,
    /// The player holds three aligned stones.
    Won(Player),
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::InProgress => None,
        }
    }

    /// Returns true once the game has been won.
    pub fn is_won(&self) -> bool {
        matches!(self, Outcome::Won(_))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Won(player) => write!(f, "player {} wins", player),
        }
    }
}
