//! Candidate winning lines.
//!
//! A [`Pattern`] is an ordered run of exactly `win_length` cell indices
//! forming one candidate winning line. Patterns are derived from the game
//! configuration alone and never depend on board contents, so a set is
//! generated once per configuration and shared across games (see
//! [`cache::PatternCache`]).

pub mod cache;
pub mod generator;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub use cache::PatternCache;
pub use generator::generate;

/// Direction family a pattern belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Left-to-right within one row.
    Row,
    /// Top-to-bottom within one column.
    Column,
    /// Top-left to bottom-right.
    DiagonalDown,
    /// Top-right to bottom-left.
    DiagonalUp,
}

/// One candidate winning line: an ordered run of cell indices.
///
/// SmallVec keeps win lengths up to 5 (the common case) inline without
/// heap allocation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pattern {
    direction: Direction,
    cells: SmallVec<[usize; 5]>,
}

impl Pattern {
    /// Build a pattern from a direction and its cell indices.
    pub(crate) fn new(direction: Direction, cells: impl IntoIterator<Item = usize>) -> Self {
        Self {
            direction,
            cells: cells.into_iter().collect(),
        }
    }

    /// Direction family of this line.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cell indices in line order.
    #[must_use]
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Number of cells in the line.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True only for a zero-length line, which the generator never emits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check whether the line passes through a cell.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}
