//! Pattern generation.
//!
//! For each of the four direction families a window of `win_length` cells
//! slides across every valid starting position. Emission order is fixed
//! and observable: rows, then columns, then the diagonal pair (down, up)
//! per start cell, each by ascending start position. The engine reports
//! the first matching pattern in this order when a move completes more
//! than one line at once.

use tracing::trace;

use crate::core::GameConfig;

use super::{Direction, Pattern};

/// Generate every candidate winning line for a configuration.
///
/// Pure and deterministic. If `win_length` exceeds `grid_size` (only
/// reachable by bypassing [`GameConfig`] validation) no window fits and
/// the result is empty; such a game can only end in a draw.
#[must_use]
pub fn generate(config: &GameConfig) -> Vec<Pattern> {
    let size = config.grid_size();
    let win = config.win_length();

    let mut patterns = Vec::new();
    if win == 0 || win > size {
        return patterns;
    }

    for row in 0..size {
        for start in 0..=(size - win) {
            patterns.push(Pattern::new(
                Direction::Row,
                (0..win).map(|k| row * size + start + k),
            ));
        }
    }

    for col in 0..size {
        for start in 0..=(size - win) {
            patterns.push(Pattern::new(
                Direction::Column,
                (0..win).map(|k| (start + k) * size + col),
            ));
        }
    }

    for row in 0..=(size - win) {
        for col in 0..=(size - win) {
            patterns.push(Pattern::new(
                Direction::DiagonalDown,
                (0..win).map(|k| (row + k) * size + col + k),
            ));
            patterns.push(Pattern::new(
                Direction::DiagonalUp,
                (0..win).map(|k| (row + k) * size + col + win - 1 - k),
            ));
        }
    }

    trace!(%config, count = patterns.len(), "generated pattern set");
    patterns
}

/// Expected number of patterns for a configuration.
///
/// Rows and columns each contribute `size * (size - win + 1)` windows;
/// each diagonal start cell contributes one down and one up diagonal.
#[must_use]
pub fn pattern_count(config: &GameConfig) -> usize {
    let size = config.grid_size();
    let win = config.win_length();
    if win == 0 || win > size {
        return 0;
    }
    let starts = size - win + 1;
    2 * size * starts + 2 * starts * starts
}
