//! Core types: players, cells, boards, configuration.
//!
//! These are the fundamental building blocks shared by pattern generation
//! and the game engine. None of them own any rules logic.

pub mod board;
pub mod config;
pub mod player;

pub use board::{Board, Cell};
pub use config::{ConfigError, GameConfig};
pub use player::Player;
