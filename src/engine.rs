//! The game engine: a pure state machine over one shared board.
//!
//! The engine owns the board, the per-player stock, the turn, and the
//! active selection. Mutating operations take `&mut self`, check their
//! contract preconditions, apply the transition, and verify the invariant
//! set as a postcondition in debug builds. Rejected actions leave the
//! state byte-for-byte unchanged.
//!
//! The engine performs no I/O. Rendering and input sequencing belong to
//! the caller, as does any mutual-exclusion boundary if the engine is
//! shared between threads.

use tracing::{debug, instrument};

use crate::action::{ActionError, ConfigError, TurnReport};
use crate::contracts::{Contract, PlacementContract, RelocationContract, SelectionContract};
use crate::phases::{Outcome, Phase};
use crate::rules;
use crate::types::{Board, Cell, Player, Stone};

/// Engine for one game. Holds no cross-game state; a new game requires a
/// fresh instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) stones: Vec<Stone>,
    pub(crate) stock: [usize; 2],
    pub(crate) stones_per_player: usize,
    pub(crate) current_player: Player,
    pub(crate) selection: Option<(usize, usize)>,
}

impl Game {
    /// Creates a new engine with an empty `board_size` × `board_size`
    /// board and `stones_per_player` stock for each player.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the board is smaller than 3×3, the stock
    /// is zero, or the combined stock exceeds the number of cells.
    #[instrument]
    pub fn new(board_size: usize, stones_per_player: usize) -> Result<Self, ConfigError> {
        if board_size < 3 {
            return Err(ConfigError::BoardTooSmall(board_size));
        }
        if stones_per_player < 1 {
            return Err(ConfigError::NoStock);
        }
        let cells = board_size * board_size;
        if 2 * stones_per_player > cells {
            return Err(ConfigError::StockExceedsBoard {
                stones: stones_per_player,
                cells,
            });
        }
        Ok(Self {
            board: Board::new(board_size),
            stones: Vec::with_capacity(2 * stones_per_player),
            stock: [stones_per_player; 2],
            stones_per_player,
            current_player: Player::X,
            selection: None,
        })
    }

    // ─────────────────────────────────────────────────────────────
    //  Mutating operations
    // ─────────────────────────────────────────────────────────────

    /// Places a stone of the current player on an empty cell.
    ///
    /// Only legal during the [`Phase::Placement`] phase. On success the
    /// current player's stock is decremented, the stone is appended to the
    /// played-stones sequence, and the turn flips unless this placement
    /// won the game.
    ///
    /// # Errors
    ///
    /// [`ActionError::GameOver`], [`ActionError::OutOfPhase`],
    /// [`ActionError::OutOfBounds`], [`ActionError::CellOccupied`], or
    /// [`ActionError::NoStockRemaining`]. Rejections do not mutate state.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place(&mut self, row: usize, col: usize) -> Result<TurnReport, ActionError> {
        PlacementContract::pre(self, &(row, col))?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board
            .set(row, col, Cell::Occupied(self.current_player))
            .map_err(|_| ActionError::OutOfBounds(row, col))?;
        self.stones.push(Stone::new(row, col, self.current_player));
        self.stock[self.current_player.index()] -= 1;

        self.finish_turn();

        #[cfg(debug_assertions)]
        PlacementContract::post(&before, self)?;

        Ok(self.report())
    }

    /// Selects a stone of the current player as the relocation source.
    ///
    /// Only meaningful during the [`Phase::Movement`] phase. A new
    /// selection overwrites any prior one; no release step exists.
    ///
    /// Returns `false`, without touching the existing selection, if the
    /// game is over, the phase is still `Placement`, the coordinates are
    /// out of range, or the cell does not hold one of the current
    /// player's stones.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn select(&mut self, row: usize, col: usize) -> bool {
        match SelectionContract::pre(self, &(row, col)) {
            Ok(()) => {
                self.selection = Some((row, col));
                true
            }
            Err(error) => {
                debug!(%error, "selection rejected");
                false
            }
        }
    }

    /// Relocates the selected stone to an empty cell.
    ///
    /// On success the source cell is vacated, the stone record is replaced
    /// in place (preserving the insertion order of the sequence), the
    /// selection is cleared, and the turn flips unless the move won the
    /// game.
    ///
    /// # Errors
    ///
    /// [`ActionError::GameOver`], [`ActionError::OutOfPhase`],
    /// [`ActionError::OutOfBounds`], [`ActionError::NoActiveSelection`],
    /// [`ActionError::NullMove`] (target equals the selected cell), or
    /// [`ActionError::CellOccupied`]. Rejections leave board, selection,
    /// and turn unchanged.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn move_selected(&mut self, row: usize, col: usize) -> Result<TurnReport, ActionError> {
        RelocationContract::pre(self, &(row, col))?;

        let Some((src_row, src_col)) = self.selection else {
            return Err(ActionError::NoActiveSelection);
        };
        let index = self
            .stones
            .iter()
            .position(|stone| stone.row == src_row && stone.col == src_col)
            .ok_or_else(|| {
                ActionError::InvariantViolation(
                    "selected cell has no stone record".to_string(),
                )
            })?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board
            .set(src_row, src_col, Cell::Empty)
            .map_err(|_| ActionError::OutOfBounds(src_row, src_col))?;
        self.board
            .set(row, col, Cell::Occupied(self.current_player))
            .map_err(|_| ActionError::OutOfBounds(row, col))?;
        self.stones[index] = Stone::new(row, col, self.current_player);
        self.selection = None;

        self.finish_turn();

        #[cfg(debug_assertions)]
        RelocationContract::post(&before, self)?;

        Ok(self.report())
    }

    /// Flips the turn unless the acting player just won. Alternation stops
    /// once the game is won.
    fn finish_turn(&mut self) {
        if !self.outcome().is_won() {
            self.current_player = self.current_player.opponent();
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// The ordered sequence of stones currently on the board.
    pub fn stones(&self) -> &[Stone] {
        &self.stones
    }

    /// Current phase, derived from the stock counts. The transition from
    /// `Placement` to `Movement` happens exactly once, when both stocks
    /// reach zero, and never reverts.
    pub fn phase(&self) -> Phase {
        if self.stock.iter().any(|&remaining| remaining > 0) {
            Phase::Placement
        } else {
            Phase::Movement
        }
    }

    /// Current outcome, recomputed from the board. Never cached, so it can
    /// never be stale.
    pub fn outcome(&self) -> Outcome {
        match rules::check_alignment(&self.board) {
            Some(winner) => Outcome::Won(winner),
            None => Outcome::InProgress,
        }
    }

    /// The player to act next.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Coordinates of the actively selected stone, if any.
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection
    }

    /// Remaining unplaced stock for the given player.
    pub fn stock(&self, player: Player) -> usize {
        self.stock[player.index()]
    }

    /// Stock each player started the game with.
    pub fn stones_per_player(&self) -> usize {
        self.stones_per_player
    }

    /// Builds the three-value report returned by mutating operations.
    fn report(&self) -> TurnReport {
        TurnReport {
            selection_active: self.selection.is_some(),
            current_player: self.current_player,
            outcome: self.outcome(),
        }
    }
}
