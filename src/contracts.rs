//! Contract-based validation for engine actions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! Preconditions produce the rejection taxonomy the caller sees;
//! postconditions verify the invariant set after a transition and only run
//! in debug builds.

use tracing::warn;

use crate::action::ActionError;
use crate::engine::Game;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::phases::Phase;
use crate::types::Cell;

/// A contract defines preconditions and postconditions for state
/// transitions: {P(state, action)} action {Q(before, after)}.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), ActionError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ActionError>;
}

// ─────────────────────────────────────────────────────────────
//  Individual preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not been won yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects every action once a winning alignment exists.
    pub fn check(game: &Game) -> Result<(), ActionError> {
        if game.outcome().is_won() {
            Err(ActionError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the game is in the required phase.
pub struct PhaseIs;

impl PhaseIs {
    /// Rejects actions performed in the wrong phase.
    pub fn check(game: &Game, expected: Phase) -> Result<(), ActionError> {
        if game.phase() == expected {
            Ok(())
        } else {
            Err(ActionError::OutOfPhase { expected })
        }
    }
}

/// Precondition: the coordinates fall inside the board.
pub struct InBounds;

impl InBounds {
    /// Rejects out-of-range coordinates.
    pub fn check(game: &Game, row: usize, col: usize) -> Result<(), ActionError> {
        if game.board().in_bounds(row, col) {
            Ok(())
        } else {
            Err(ActionError::OutOfBounds(row, col))
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellVacant;

impl CellVacant {
    /// Rejects targets that already hold a stone.
    pub fn check(game: &Game, row: usize, col: usize) -> Result<(), ActionError> {
        if game.board().is_empty(row, col) {
            Ok(())
        } else {
            Err(ActionError::CellOccupied(row, col))
        }
    }
}

/// Precondition: the cell holds a stone of the current player.
pub struct OwnStone;

impl OwnStone {
    /// Rejects empty cells and opponent stones.
    pub fn check(game: &Game, row: usize, col: usize) -> Result<(), ActionError> {
        if game.board().get(row, col) == Some(Cell::Occupied(game.current_player())) {
            Ok(())
        } else {
            Err(ActionError::NotPlayersStone(row, col))
        }
    }
}

/// Precondition: the current player still has stock to place.
pub struct StockAvailable;

impl StockAvailable {
    /// Rejects placement with an exhausted stock. Unreachable while the
    /// phase invariant holds, but checked defensively.
    pub fn check(game: &Game) -> Result<(), ActionError> {
        if game.stock(game.current_player()) > 0 {
            Ok(())
        } else {
            Err(ActionError::NoStockRemaining(game.current_player()))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Per-operation contracts
// ─────────────────────────────────────────────────────────────

/// Verifies the full invariant set, mapping violations to an error.
fn check_invariants(game: &Game) -> Result<(), ActionError> {
    GameInvariants::check_all(game).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|violation| violation.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "postcondition failed");
        ActionError::InvariantViolation(format!("postcondition failed: {}", descriptions))
    })
}

/// Contract for placing a stone during the placement phase.
pub struct PlacementContract;

impl Contract<Game, (usize, usize)> for PlacementContract {
    fn pre(game: &Game, &(row, col): &(usize, usize)) -> Result<(), ActionError> {
        GameNotOver::check(game)?;
        PhaseIs::check(game, Phase::Placement)?;
        InBounds::check(game, row, col)?;
        CellVacant::check(game, row, col)?;
        StockAvailable::check(game)?;
        Ok(())
    }

    fn post(_before: &Game, after: &Game) -> Result<(), ActionError> {
        check_invariants(after)
    }
}

/// Contract for selecting a stone to relocate.
pub struct SelectionContract;

impl Contract<Game, (usize, usize)> for SelectionContract {
    fn pre(game: &Game, &(row, col): &(usize, usize)) -> Result<(), ActionError> {
        GameNotOver::check(game)?;
        PhaseIs::check(game, Phase::Movement)?;
        InBounds::check(game, row, col)?;
        OwnStone::check(game, row, col)?;
        Ok(())
    }

    fn post(_before: &Game, after: &Game) -> Result<(), ActionError> {
        check_invariants(after)
    }
}

/// Contract for relocating the selected stone.
pub struct RelocationContract;

impl Contract<Game, (usize, usize)> for RelocationContract {
    fn pre(game: &Game, &(row, col): &(usize, usize)) -> Result<(), ActionError> {
        GameNotOver::check(game)?;
        PhaseIs::check(game, Phase::Movement)?;
        InBounds::check(game, row, col)?;
        let Some((src_row, src_col)) = game.selection() else {
            return Err(ActionError::NoActiveSelection);
        };
        // Checked before occupancy: the source cell is occupied by
        // definition, and the caller should learn it picked a null move.
        if (row, col) == (src_row, src_col) {
            return Err(ActionError::NullMove(row, col));
        }
        CellVacant::check(game, row, col)?;
        Ok(())
    }

    fn post(_before: &Game, after: &Game) -> Result<(), ActionError> {
        check_invariants(after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movement_phase_game() -> Game {
        let mut game = Game::new(3, 3).expect("valid configuration");
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (2, 1), (2, 2)] {
            game.place(row, col).expect("valid placement");
        }
        game
    }

    #[test]
    fn test_placement_pre_accepts_empty_cell() {
        let game = Game::new(3, 3).expect("valid configuration");
        assert!(PlacementContract::pre(&game, &(1, 1)).is_ok());
    }

    #[test]
    fn test_placement_pre_rejects_occupied_cell() {
        let mut game = Game::new(3, 3).expect("valid configuration");
        game.place(1, 1).expect("valid placement");
        assert_eq!(
            PlacementContract::pre(&game, &(1, 1)),
            Err(ActionError::CellOccupied(1, 1))
        );
    }

    #[test]
    fn test_placement_pre_rejects_out_of_bounds() {
        let game = Game::new(3, 3).expect("valid configuration");
        assert_eq!(
            PlacementContract::pre(&game, &(3, 0)),
            Err(ActionError::OutOfBounds(3, 0))
        );
    }

    #[test]
    fn test_placement_pre_rejects_movement_phase() {
        let game = movement_phase_game();
        assert_eq!(
            PlacementContract::pre(&game, &(2, 0)),
            Err(ActionError::OutOfPhase {
                expected: Phase::Placement
            })
        );
    }

    #[test]
    fn test_selection_pre_rejects_placement_phase() {
        let game = Game::new(3, 3).expect("valid configuration");
        assert_eq!(
            SelectionContract::pre(&game, &(0, 0)),
            Err(ActionError::OutOfPhase {
                expected: Phase::Movement
            })
        );
    }

    #[test]
    fn test_selection_pre_rejects_opponent_stone() {
        let game = movement_phase_game();
        // (1, 0) belongs to O; X is to move.
        assert_eq!(
            SelectionContract::pre(&game, &(1, 0)),
            Err(ActionError::NotPlayersStone(1, 0))
        );
    }

    #[test]
    fn test_relocation_pre_requires_selection() {
        let game = movement_phase_game();
        assert_eq!(
            RelocationContract::pre(&game, &(2, 0)),
            Err(ActionError::NoActiveSelection)
        );
    }

    #[test]
    fn test_relocation_pre_rejects_null_move() {
        let mut game = movement_phase_game();
        assert!(game.select(0, 0));
        assert_eq!(
            RelocationContract::pre(&game, &(0, 0)),
            Err(ActionError::NullMove(0, 0))
        );
    }

    #[test]
    fn test_postcondition_holds_after_placement() {
        let before = Game::new(3, 3).expect("valid configuration");
        let mut after = before.clone();
        after.place(0, 0).expect("valid placement");
        assert!(PlacementContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Game::new(3, 3).expect("valid configuration");
        let mut after = before.clone();
        after.place(0, 0).expect("valid placement");

        after.stones.clear();
        assert!(matches!(
            PlacementContract::post(&before, &after),
            Err(ActionError::InvariantViolation(_))
        ));
    }
}
