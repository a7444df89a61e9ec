//! Game engine: the state machine hosts drive.
//!
//! One [`Game`] per game session. Hosts call [`Game::place`] for each
//! move and render the [`GamePhase`] that comes back; everything else
//! (input parsing, rendering, restart buttons) stays on the host side.

pub mod game;

pub use game::{Game, GamePhase, MoveError, MoveRecord};
