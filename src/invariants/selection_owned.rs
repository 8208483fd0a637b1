//! Selection validity invariant: a selection always points at one of the
//! current player's stones, and only during the movement phase.

use super::Invariant;
use crate::engine::Game;
use crate::phases::Phase;
use crate::types::Cell;

/// Invariant: an active selection exists only in the movement phase and
/// refers to a cell occupied by the current player.
pub struct SelectionOwnedInvariant;

impl Invariant<Game> for SelectionOwnedInvariant {
    fn holds(game: &Game) -> bool {
        match game.selection() {
            None => true,
            Some((row, col)) => {
                game.phase() == Phase::Movement
                    && game.board().get(row, col) == Some(Cell::Occupied(game.current_player()))
            }
        }
    }

    fn description() -> &'static str {
        "Active selection is a movement-phase reference to the current player's stone"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_selection_holds() {
        let game = Game::new(3, 3).expect("valid configuration");
        assert!(SelectionOwnedInvariant::holds(&game));
    }

    #[test]
    fn test_valid_selection_holds() {
        let mut game = Game::new(3, 3).expect("valid configuration");
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (2, 1), (2, 2)] {
            game.place(row, col).expect("valid placement");
        }
        assert!(game.select(0, 0));
        assert!(SelectionOwnedInvariant::holds(&game));
    }

    #[test]
    fn test_selection_during_placement_violates() {
        let mut game = Game::new(3, 3).expect("valid configuration");
        game.place(0, 0).expect("valid placement");

        game.selection = Some((0, 0));
        assert!(!SelectionOwnedInvariant::holds(&game));
    }

    #[test]
    fn test_selection_of_vacated_cell_violates() {
        let mut game = Game::new(3, 3).expect("valid configuration");
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (2, 1), (2, 2)] {
            game.place(row, col).expect("valid placement");
        }
        assert!(game.select(0, 0));

        game.board.set(0, 0, Cell::Empty).unwrap();
        assert!(!SelectionOwnedInvariant::holds(&game));
    }
}
