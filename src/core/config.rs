//! Game configuration.
//!
//! A game is parameterized by two values fixed at creation:
//! - `grid_size`: the board is `grid_size` x `grid_size`
//! - `win_length`: how many marks in a row win the game
//!
//! The configuration is immutable for the lifetime of a game. Pattern
//! sets are derived from it once and cached by `(grid_size, win_length)`.

use serde::{Deserialize, Serialize};

/// Errors from constructing a [`GameConfig`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The grid must hold at least one cell.
    #[error("grid size must be at least 1")]
    GridTooSmall,

    /// The winning length must fit on the grid.
    #[error("win length {win_length} outside [1, {grid_size}]")]
    WinLengthOutOfRange {
        /// Rejected winning length.
        win_length: usize,
        /// Grid size it was checked against.
        grid_size: usize,
    },
}

/// Immutable configuration for one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    grid_size: usize,
    win_length: usize,
}

impl GameConfig {
    /// Create a validated configuration.
    ///
    /// Requires `grid_size >= 1` and `1 <= win_length <= grid_size`.
    pub fn new(grid_size: usize, win_length: usize) -> Result<Self, ConfigError> {
        if grid_size == 0 {
            return Err(ConfigError::GridTooSmall);
        }
        if win_length == 0 || win_length > grid_size {
            return Err(ConfigError::WinLengthOutOfRange {
                win_length,
                grid_size,
            });
        }
        Ok(Self {
            grid_size,
            win_length,
        })
    }

    /// Create a configuration, clamping `win_length` into `[1, grid_size]`.
    ///
    /// Hosts taking free-form input can use this instead of validating
    /// themselves. Only a zero grid size is rejected.
    pub fn clamped(grid_size: usize, win_length: usize) -> Result<Self, ConfigError> {
        if grid_size == 0 {
            return Err(ConfigError::GridTooSmall);
        }
        Ok(Self {
            grid_size,
            win_length: win_length.clamp(1, grid_size),
        })
    }

    /// Side length of the board.
    #[must_use]
    pub const fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Number of marks in a row required to win.
    #[must_use]
    pub const fn win_length(&self) -> usize {
        self.win_length
    }

    /// Total number of cells on the board.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.grid_size * self.grid_size
    }
}

impl std::fmt::Display for GameConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{size}x{size}, {win} in a row",
            size = self.grid_size,
            win = self.win_length
        )
    }
}
