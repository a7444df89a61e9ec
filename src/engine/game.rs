//! The game state machine.
//!
//! [`Game`] owns a board, the player to move, and the current phase.
//! Hosts drive it through a single entry point, [`Game::place`], and
//! render whatever phase comes back. Rejected moves are no-ops: the
//! engine never mutates state before a move has passed every check.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, Cell, GameConfig, Player};
use crate::patterns::{generate, Pattern, PatternCache};

/// Errors from a rejected move. The board and phase are unchanged
/// whenever one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The index does not address a cell on this board.
    #[error("cell index {index} out of bounds for a board of {cell_count} cells")]
    OutOfBounds {
        /// Rejected index.
        index: usize,
        /// Number of cells on the board.
        cell_count: usize,
    },

    /// The target cell already holds a mark.
    #[error("cell {index} is already occupied")]
    CellOccupied {
        /// Rejected index.
        index: usize,
    },

    /// The game has already ended in a win or draw.
    #[error("game is already over")]
    GameOver,
}

/// Current phase of a game. `Won` and `Draw` are terminal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Moves are still accepted.
    InProgress,
    /// A player completed a winning line.
    Won {
        /// The winning player.
        player: Player,
        /// The completed line, for highlighting.
        line: Pattern,
    },
    /// The board filled with no winner.
    Draw,
}

impl GamePhase {
    /// Check whether the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::InProgress)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GamePhase::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// The completed winning line, if any.
    #[must_use]
    pub fn winning_line(&self) -> Option<&Pattern> {
        match self {
            GamePhase::Won { line, .. } => Some(line),
            _ => None,
        }
    }
}

/// One accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who moved.
    pub player: Player,
    /// Where the mark landed.
    pub index: usize,
}

/// A single game of K-in-a-row.
///
/// Constructed fresh per game; no state carries over between games
/// except the shared pattern set, which depends only on the
/// configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    board: Board,
    current_player: Player,
    phase: GamePhase,
    moves: Vec<MoveRecord>,
    patterns: Arc<[Pattern]>,
}

impl Game {
    /// Start a new game, generating the pattern set for its configuration.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_patterns(config, generate(&config).into())
    }

    /// Start a new game reusing an already-generated pattern set.
    ///
    /// The set must have been generated for the same configuration;
    /// [`Game::from_cache`] is the usual way to get one.
    #[must_use]
    pub fn with_patterns(config: GameConfig, patterns: Arc<[Pattern]>) -> Self {
        Self {
            config,
            board: Board::new(config.grid_size()),
            current_player: Player::X,
            phase: GamePhase::InProgress,
            moves: Vec::new(),
            patterns,
        }
    }

    /// Start a new game with its pattern set taken from (or added to) a cache.
    #[must_use]
    pub fn from_cache(config: GameConfig, cache: &mut PatternCache) -> Self {
        let patterns = cache.patterns(&config);
        Self::with_patterns(config, patterns)
    }

    /// Place the current player's mark at a cell index.
    ///
    /// On success the resulting phase is returned; when it is
    /// [`GamePhase::Won`] it carries the completed line. Checks run in
    /// order: game over, bounds, occupancy.
    pub fn place(&mut self, index: usize) -> Result<GamePhase, MoveError> {
        if self.phase.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let cell = self.board.get(index).ok_or(MoveError::OutOfBounds {
            index,
            cell_count: self.board.cell_count(),
        })?;
        if !cell.is_empty() {
            return Err(MoveError::CellOccupied { index });
        }

        let player = self.current_player;
        self.board.mark(index, player);
        self.moves.push(MoveRecord { player, index });
        debug!(%player, index, "mark placed");

        if let Some(line) = self.completed_line(player) {
            debug!(%player, cells = ?line.cells(), "winning line completed");
            self.phase = GamePhase::Won { player, line };
        } else if self.board.is_full() {
            debug!("board full with no winner");
            self.phase = GamePhase::Draw;
        } else {
            self.current_player = player.opponent();
        }

        Ok(self.phase.clone())
    }

    /// First pattern fully marked by `player`, in generation order.
    ///
    /// Patterns are exactly `win_length` cells, so a full match is the
    /// whole win test; no sub-window scan is needed.
    fn completed_line(&self, player: Player) -> Option<Pattern> {
        self.patterns
            .iter()
            .find(|p| {
                p.cells()
                    .iter()
                    .all(|&i| self.board.get(i) == Some(Cell::Mark(player)))
            })
            .cloned()
    }

    /// Restart under the same configuration, reusing the pattern set.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::X;
        self.phase = GamePhase::InProgress;
        self.moves.clear();
        debug!(config = %self.config, "game reset");
    }

    /// The game's configuration.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    /// The player to move, or `None` once the game has ended.
    #[must_use]
    pub fn current_player(&self) -> Option<Player> {
        if self.phase.is_terminal() {
            None
        } else {
            Some(self.current_player)
        }
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Accepted moves in play order.
    #[must_use]
    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    /// Indices of empty cells, or empty once the game has ended.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.phase.is_terminal() {
            return Vec::new();
        }
        self.board
            .cells()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// The pattern set in use.
    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}
