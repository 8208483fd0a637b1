//! Stock conservation invariant: stones are neither created nor destroyed.

use strum::IntoEnumIterator;

use super::Invariant;
use crate::engine::Game;
use crate::types::Player;

/// Invariant: per player, stones on the board plus remaining stock equals
/// the stock the game started with.
///
/// Placement converts stock into a stone one at a time; relocation touches
/// neither count.
pub struct StockConservedInvariant;

impl Invariant<Game> for StockConservedInvariant {
    fn holds(game: &Game) -> bool {
        Player::iter().all(|player| {
            let on_board = game
                .stones()
                .iter()
                .filter(|stone| stone.owner == player)
                .count();
            on_board + game.stock(player) == game.stones_per_player()
        })
    }

    fn description() -> &'static str {
        "Per player, stones on board plus remaining stock equals the initial stock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_holds() {
        let game = Game::new(3, 3).expect("valid configuration");
        assert!(StockConservedInvariant::holds(&game));
        assert_eq!(game.stock(Player::X), 3);
        assert_eq!(game.stock(Player::O), 3);
    }

    #[test]
    fn test_placement_spends_stock() {
        let mut game = Game::new(3, 3).expect("valid configuration");
        game.place(0, 0).expect("valid placement");
        game.place(1, 1).expect("valid placement");

        assert!(StockConservedInvariant::holds(&game));
        assert_eq!(game.stock(Player::X), 2);
        assert_eq!(game.stock(Player::O), 2);
    }

    #[test]
    fn test_relocation_leaves_stock_untouched() {
        let mut game = Game::new(3, 3).expect("valid configuration");
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (2, 1), (2, 2)] {
            game.place(row, col).expect("valid placement");
        }
        assert!(game.select(0, 0));
        game.move_selected(2, 0).expect("valid relocation");

        assert!(StockConservedInvariant::holds(&game));
        assert_eq!(game.stock(Player::X), 0);
        assert_eq!(game.stock(Player::O), 0);
    }

    #[test]
    fn test_lost_stone_violates() {
        let mut game = Game::new(3, 3).expect("valid configuration");
        game.place(0, 0).expect("valid placement");

        game.stones.clear();
        assert!(!StockConservedInvariant::holds(&game));
    }
}
