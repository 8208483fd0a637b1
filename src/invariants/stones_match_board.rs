//! Stone-list consistency invariant: the played-stones sequence and the
//! occupied cells are the same set.

use super::Invariant;
use crate::engine::Game;
use crate::types::Cell;

/// Invariant: the stone sequence mirrors the board exactly.
///
/// Every recorded stone sits on a cell occupied by its owner, no two
/// records share a cell, and every occupied cell has a record. Relocation
/// must not leave a removed stone lingering in the sequence.
pub struct StonesMatchBoardInvariant;

impl Invariant<Game> for StonesMatchBoardInvariant {
    fn holds(game: &Game) -> bool {
        let stones = game.stones();

        for (index, stone) in stones.iter().enumerate() {
            if game.board().get(stone.row, stone.col) != Some(Cell::Occupied(stone.owner)) {
                return false;
            }
            // No duplicate records for one cell.
            if stones[..index]
                .iter()
                .any(|other| other.row == stone.row && other.col == stone.col)
            {
                return false;
            }
        }

        stones.len() == game.board().occupied_count()
    }

    fn description() -> &'static str {
        "Played-stones sequence matches the occupied cells exactly"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_fresh_game_holds() {
        let game = Game::new(3, 3).expect("valid configuration");
        assert!(StonesMatchBoardInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_placement() {
        let mut game = Game::new(3, 3).expect("valid configuration");
        game.place(1, 1).expect("valid placement");
        assert!(StonesMatchBoardInvariant::holds(&game));
        assert_eq!(game.stones().len(), 1);
    }

    #[test]
    fn test_holds_after_relocation() {
        let mut game = Game::new(3, 3).expect("valid configuration");
        // Exhaust both stocks without aligning anyone.
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (2, 1), (2, 2)] {
            game.place(row, col).expect("valid placement");
        }
        assert!(game.select(0, 0));
        game.move_selected(2, 0).expect("valid relocation");

        assert!(StonesMatchBoardInvariant::holds(&game));
        assert_eq!(game.stones().len(), 6);
    }

    #[test]
    fn test_unrecorded_cell_violates() {
        let mut game = Game::new(3, 3).expect("valid configuration");
        game.place(0, 0).expect("valid placement");

        game.board.set(2, 2, Cell::Occupied(Player::O)).unwrap();
        assert!(!StonesMatchBoardInvariant::holds(&game));
    }

    #[test]
    fn test_stale_record_violates() {
        let mut game = Game::new(3, 3).expect("valid configuration");
        game.place(0, 0).expect("valid placement");

        game.board.set(0, 0, Cell::Empty).unwrap();
        assert!(!StonesMatchBoardInvariant::holds(&game));
    }
}
