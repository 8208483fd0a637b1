//! Serializable game snapshot.
//!
//! The engine itself is not serialized directly; a [`GameSnapshot`]
//! captures everything needed to resume deterministically — board cells,
//! stock counts, current player, active selection, and the played-stones
//! sequence. Restoring validates the snapshot against the invariant set,
//! so a corrupted snapshot can never produce an inconsistent engine.

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::action::ConfigError;
use crate::engine::Game;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::types::{Board, Player, Stone};

/// Complete capture of one game's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board cells.
    pub board: Board,
    /// Played stones in insertion order.
    pub stones: Vec<Stone>,
    /// Remaining stock per player, indexed by [`Player::index`].
    pub stock: [usize; 2],
    /// Stock each player started with.
    pub stones_per_player: usize,
    /// Player to act next.
    pub current_player: Player,
    /// Active selection, if any.
    pub selection: Option<(usize, usize)>,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        Self {
            board: game.board().clone(),
            stones: game.stones().to_vec(),
            stock: [game.stock(Player::X), game.stock(Player::O)],
            stones_per_player: game.stones_per_player(),
            current_player: game.current_player(),
            selection: game.selection(),
        }
    }
}

/// Rejection of a snapshot during restore.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SnapshotError {
    /// The snapshot's configuration would not construct a valid game.
    #[display("invalid configuration: {_0}")]
    InvalidConfiguration(ConfigError),

    /// Cell storage does not match the declared board dimension.
    #[display("board cell count does not match its dimension")]
    MalformedBoard,

    /// Stock counts exceed the declared stones per player.
    #[display("stock counts exceed stones per player")]
    ExcessStock,

    /// The snapshot violates a game invariant.
    #[display("inconsistent snapshot: {_0}")]
    Inconsistent(String),
}

impl std::error::Error for SnapshotError {}

impl From<ConfigError> for SnapshotError {
    fn from(error: ConfigError) -> Self {
        SnapshotError::InvalidConfiguration(error)
    }
}

impl Game {
    /// Captures the current state as a serializable snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }

    /// Rebuilds an engine from a snapshot, validating it first.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if the snapshot's configuration is
    /// invalid, its board storage is malformed, or it violates any game
    /// invariant (stones diverging from the board, stock not conserved,
    /// or an unusable selection).
    #[instrument(skip(snapshot))]
    pub fn restore(snapshot: GameSnapshot) -> Result<Self, SnapshotError> {
        let size = snapshot.board.size();
        if snapshot.board.cells().len() != size * size {
            return Err(SnapshotError::MalformedBoard);
        }

        // Reject configurations Game::new would reject.
        Game::new(size, snapshot.stones_per_player)?;

        if snapshot.stock.iter().any(|&s| s > snapshot.stones_per_player) {
            return Err(SnapshotError::ExcessStock);
        }

        let game = Game {
            board: snapshot.board,
            stones: snapshot.stones,
            stock: snapshot.stock,
            stones_per_player: snapshot.stones_per_player,
            current_player: snapshot.current_player,
            selection: snapshot.selection,
        };

        GameInvariants::check_all(&game).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|violation| violation.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "snapshot rejected");
            SnapshotError::Inconsistent(descriptions)
        })?;

        Ok(game)
    }
}
