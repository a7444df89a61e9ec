//! # krow
//!
//! A generalized N-by-N K-in-a-row board game engine: classic
//! tic-tac-toe is the `3x3, 3 in a row` configuration, and any
//! `(grid_size, win_length)` pair with `win_length <= grid_size` works
//! the same way.
//!
//! ## Design Principles
//!
//! 1. **Pure state and rules**: the engine owns board, turn, and phase
//!    state and nothing else. Rendering, input parsing, and restart
//!    affordances belong to the host.
//!
//! 2. **Derived, cached patterns**: every candidate winning line is a
//!    pure function of the configuration, generated once per
//!    `(grid_size, win_length)` and shared across games.
//!
//! 3. **Rejected moves are no-ops**: every failure (`OutOfBounds`,
//!    `CellOccupied`, `GameOver`) is reported as a typed error before
//!    any state changes.
//!
//! ## Modules
//!
//! - `core`: players, cells, boards, configuration
//! - `patterns`: winning-line generation and the configuration-keyed cache
//! - `engine`: the `Game` state machine
//!
//! ## Example
//!
//! ```
//! use krow::{Game, GameConfig, Player};
//!
//! let config = GameConfig::new(3, 3)?;
//! let mut game = Game::new(config);
//!
//! // X takes the top row while O plays the middle.
//! game.place(0)?;
//! game.place(3)?;
//! game.place(1)?;
//! game.place(4)?;
//! let phase = game.place(2)?;
//!
//! assert_eq!(phase.winner(), Some(Player::X));
//! assert_eq!(phase.winning_line().unwrap().cells(), &[0, 1, 2]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod engine;
pub mod patterns;

// Re-export commonly used types
pub use crate::core::{Board, Cell, ConfigError, GameConfig, Player};
pub use crate::engine::{Game, GamePhase, MoveError, MoveRecord};
pub use crate::patterns::{generate, Direction, Pattern, PatternCache};
