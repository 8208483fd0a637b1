//! Action results and rejection types.
//!
//! Every mutating operation either succeeds with a [`TurnReport`] or is
//! rejected with an [`ActionError`]. Rejections are recoverable and leave
//! the engine state untouched; the caller retries with corrected input.

use serde::{Deserialize, Serialize};

use crate::phases::{Outcome, Phase};
use crate::types::Player;

/// Report returned by a successful placement or relocation.
///
/// Mirrors the legacy three-value contract: whether a selection is active,
/// whose turn it is now, and the freshly recomputed outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Whether a stone selection is currently active.
    pub selection_active: bool,
    /// The player to act next (unchanged from the actor when the game
    /// was won by this action, since alternation stops on a win).
    pub current_player: Player,
    /// Outcome recomputed from the board after the action.
    pub outcome: Outcome,
}

/// Rejection of a mutating action.
///
/// All variants are recoverable: the engine state is byte-for-byte
/// unchanged and the caller may retry with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ActionError {
    /// The action is not legal in the current phase.
    #[display("action requires the {expected} phase")]
    OutOfPhase {
        /// Phase in which the action would be legal.
        expected: Phase,
    },

    /// Coordinates fall outside the board.
    #[display("({_0}, {_1}) is outside the board")]
    OutOfBounds(usize, usize),

    /// The target cell already holds a stone.
    #[display("cell ({_0}, {_1}) is already occupied")]
    CellOccupied(usize, usize),

    /// The acting player has no stones left to place.
    #[display("{_0} has no stock remaining")]
    NoStockRemaining(Player),

    /// The cell does not hold one of the current player's stones.
    #[display("cell ({_0}, {_1}) does not hold the current player's stone")]
    NotPlayersStone(usize, usize),

    /// Relocation was attempted without a selected stone.
    #[display("no stone is selected")]
    NoActiveSelection,

    /// Relocation target equals the selected stone's cell.
    #[display("move target ({_0}, {_1}) equals the selected stone")]
    NullMove(usize, usize),

    /// The game has already been won; no further actions are accepted.
    #[display("game is already over")]
    GameOver,

    /// A postcondition failed after applying the action (debug builds).
    #[display("invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for ActionError {}

/// Construction-time configuration rejection. Fatal: no engine is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ConfigError {
    /// Board dimension below the minimum of 3.
    #[display("board size must be at least 3, got {_0}")]
    BoardTooSmall(usize),

    /// Each player needs at least one stone.
    #[display("stones per player must be at least 1")]
    NoStock,

    /// The combined stock would not fit on the board with room to move.
    #[display("{stones} stones per player cannot fit a {cells}-cell board")]
    StockExceedsBoard {
        /// Requested stones per player.
        stones: usize,
        /// Total cells on the requested board.
        cells: usize,
    },
}

impl std::error::Error for ConfigError {}
