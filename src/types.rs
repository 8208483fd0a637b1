//! Core domain types for the stone-movement game.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Index into per-player tables (stock counts).
    pub fn index(self) -> usize {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player's stone.
    Occupied(Player),
}

/// Square N×N board with runtime size.
///
/// Cells are stored in row-major order. All accessors are bounds-checked;
/// out-of-range coordinates read as `None` rather than panicking, so the
/// engine can turn them into rejections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a new empty board of the given dimension.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Board dimension N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the cell at the given coordinates, or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Sets the cell at the given coordinates.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), &'static str> {
        if row >= self.size || col >= self.size {
            return Err("coordinates out of bounds");
        }
        self.cells[row * self.size + col] = cell;
        Ok(())
    }

    /// Checks whether the cell at the given coordinates is empty.
    ///
    /// Out-of-range coordinates are not empty (there is no cell there).
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Returns true if the coordinates fall inside the board.
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }
}

impl std::fmt::Display for Board {
    /// ASCII rendering of the grid, one row per line with `|` separators.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let mark = match self.cells[row * self.size + col] {
                    Cell::Empty => ' ',
                    Cell::Occupied(Player::X) => 'X',
                    Cell::Occupied(Player::O) => 'O',
                };
                write!(f, " {} ", mark)?;
                if col < self.size - 1 {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if row < self.size - 1 {
                writeln!(f, "{}", "-".repeat(self.size * 4 - 1))?;
            }
        }
        Ok(())
    }
}

/// A played stone: its coordinates and owner.
///
/// The sequence of stones held by the engine always mirrors the occupied
/// cells of the board, in placement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stone {
    /// Row coordinate.
    pub row: usize,
    /// Column coordinate.
    pub col: usize,
    /// Owning player.
    pub owner: Player,
}

impl Stone {
    /// Creates a new stone record.
    pub fn new(row: usize, col: usize, owner: Player) -> Self {
        Self { row, col, owner }
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at ({}, {})", self.owner, self.row, self.col)
    }
}
