//! Tres en raya - rule engine for a two-player stone-movement board game.
//!
//! A tic-tac-toe variant: players alternately place a fixed stock of
//! stones on an N×N board, and once all stock is placed they keep playing
//! by relocating their own stones to empty cells. Three aligned stones in
//! any direction win.
//!
//! # Architecture
//!
//! - **Engine**: [`Game`], a pure state machine with no I/O
//! - **Rules**: pure win-detection functions over the board
//! - **Contracts**: precondition/postcondition validation per action
//! - **Invariants**: first-class, independently testable state properties
//! - **Snapshot**: serializable capture for save/load
//!
//! The engine is single-threaded and synchronous; callers sharing it
//! across threads must serialize every call behind one lock, reads
//! included.
//!
//! # Example
//!
//! ```
//! use tres_en_raya::{Game, Phase};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = Game::new(3, 3)?;
//!
//! // Placement phase: stones come from each player's stock.
//! game.place(0, 0)?; // X
//! game.place(1, 0)?; // O
//! assert_eq!(game.phase(), Phase::Placement);
//!
//! // Movement phase begins once both stocks are empty; players then
//! // select one of their stones and relocate it to an empty cell.
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod engine;
mod phases;
mod snapshot;
mod types;

// Public for composition into external test harnesses and tooling.
pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - core types
pub use types::{Board, Cell, Player, Stone};

// Crate-level exports - phases and outcome
pub use phases::{Outcome, Phase};

// Crate-level exports - engine and action results
pub use action::{ActionError, ConfigError, TurnReport};
pub use engine::Game;

// Crate-level exports - snapshot
pub use snapshot::{GameSnapshot, SnapshotError};
