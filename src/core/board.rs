//! Board storage and cell addressing.
//!
//! Cells live in a flat row-major vector: `index = row * grid_size + col`.
//! The board is owned by the game engine and mutated only through it;
//! everything here is bounds-checked so a rejected write never lands.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// One slot on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    Empty,
    /// Marked by a player.
    Mark(Player),
}

impl Cell {
    /// Check whether the cell is unmarked.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A square board of `grid_size * grid_size` cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid_size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            cells: vec![Cell::Empty; grid_size * grid_size],
        }
    }

    /// Side length of the board.
    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Get the cell at `index`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Convert `(row, col)` to a flat cell index.
    #[must_use]
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.grid_size + col
    }

    /// Convert a flat cell index to `(row, col)`.
    #[must_use]
    pub fn coords_of(&self, index: usize) -> (usize, usize) {
        (index / self.grid_size, index % self.grid_size)
    }

    /// Check whether every cell is marked.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Read-only view of all cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Place a mark without validation. The engine checks bounds and
    /// occupancy before calling this.
    pub(crate) fn mark(&mut self, index: usize, player: Player) {
        self.cells[index] = Cell::Mark(player);
    }

    /// Clear every cell.
    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.grid_size {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.grid_size {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.cells[self.index_of(row, col)] {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Mark(p) => write!(f, "{}", p.symbol())?,
                }
            }
        }
        Ok(())
    }
}
