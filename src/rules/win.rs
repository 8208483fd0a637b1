//! Alignment (win) detection.

use tracing::instrument;

use crate::types::{Board, Cell, Player};

/// Length of a winning run.
pub const RUN_LENGTH: usize = 3;

/// Scan directions: along a row, down a column, and both diagonals.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Checks whether any player holds three consecutively aligned stones.
///
/// Runs are detected with sliding windows of length 3 anchored anywhere on
/// the board, in all four directions. On a 3×3 board this coincides with
/// the classic whole-row/column/diagonal test; on larger boards it finds
/// runs that full-length line checks would miss.
///
/// Always a full-board scan, never incremental, so the result depends only
/// on the current board and not on move history.
#[instrument(skip(board))]
pub fn check_alignment(board: &Board) -> Option<Player> {
    let n = board.size();
    for row in 0..n {
        for col in 0..n {
            let Some(Cell::Occupied(player)) = board.get(row, col) else {
                continue;
            };
            for (dr, dc) in DIRECTIONS {
                if run_from(board, row, col, dr, dc, player) {
                    return Some(player);
                }
            }
        }
    }
    None
}

/// Tests a single window of `RUN_LENGTH` cells starting at the anchor.
fn run_from(board: &Board, row: usize, col: usize, dr: isize, dc: isize, player: Player) -> bool {
    (1..RUN_LENGTH as isize).all(|step| {
        let r = row as isize + dr * step;
        let c = col as isize + dc * step;
        r >= 0
            && c >= 0
            && board.get(r as usize, c as usize) == Some(Cell::Occupied(player))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupy(board: &mut Board, cells: &[(usize, usize)], player: Player) {
        for &(row, col) in cells {
            board.set(row, col, Cell::Occupied(player)).unwrap();
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(3);
        assert_eq!(check_alignment(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new(3);
        occupy(&mut board, &[(0, 0), (0, 1), (0, 2)], Player::X);
        assert_eq!(check_alignment(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new(3);
        occupy(&mut board, &[(0, 2), (1, 2), (2, 2)], Player::O);
        assert_eq!(check_alignment(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_main_diagonal() {
        let mut board = Board::new(3);
        occupy(&mut board, &[(0, 0), (1, 1), (2, 2)], Player::X);
        assert_eq!(check_alignment(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new(3);
        occupy(&mut board, &[(0, 2), (1, 1), (2, 0)], Player::O);
        assert_eq!(check_alignment(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete_run() {
        let mut board = Board::new(3);
        occupy(&mut board, &[(0, 0), (0, 1)], Player::X);
        assert_eq!(check_alignment(&board), None);
    }

    #[test]
    fn test_no_winner_mixed_run() {
        let mut board = Board::new(3);
        occupy(&mut board, &[(0, 0), (0, 2)], Player::X);
        occupy(&mut board, &[(0, 1)], Player::O);
        assert_eq!(check_alignment(&board), None);
    }

    #[test]
    fn test_anchored_run_on_larger_board() {
        // A run in the middle of a 5x5 board, not touching any edge and
        // not part of any full-length line.
        let mut board = Board::new(5);
        occupy(&mut board, &[(2, 1), (2, 2), (2, 3)], Player::X);
        assert_eq!(check_alignment(&board), Some(Player::X));
    }

    #[test]
    fn test_anchored_diagonal_on_larger_board() {
        let mut board = Board::new(5);
        occupy(&mut board, &[(1, 3), (2, 2), (3, 1)], Player::O);
        assert_eq!(check_alignment(&board), Some(Player::O));
    }

    #[test]
    fn test_broken_run_on_larger_board() {
        let mut board = Board::new(5);
        occupy(&mut board, &[(2, 0), (2, 1), (2, 3)], Player::X);
        assert_eq!(check_alignment(&board), None);
    }
}
