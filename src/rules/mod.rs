//! Game rules for the stone-movement game.
//!
//! Pure functions over board state, separated from the engine so they can
//! be composed into contracts and tested in isolation.

pub mod win;

pub use win::{RUN_LENGTH, check_alignment};
