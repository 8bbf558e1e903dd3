//! Saved-game envelope.
//!
//! A `GameSnapshot` holds everything needed to rebuild a game: the live
//! position, the color to move, the running flag, the rule configuration
//! and the full history with its cursor. Cumulative captures are not
//! stored; they are recomputed from the history on restore.
//!
//! Each stored situation also carries a `passed` flag. An envelope written
//! without it (plain position, turn and captures) still restores, but every
//! situation then counts as a stone move, so the consecutive-pass counter
//! starts at 0 and a game one pass from ending needs two more passes.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::board::{Board, Position};
use crate::core::{Captures, Color, ConfigError, GameConfig};
use crate::history::{History, Situation};
use crate::rules::Game;

/// Why a snapshot could not be encoded, decoded or restored.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot encoding failed: {0}")]
    Encoding(#[from] bincode::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("history is empty")]
    EmptyHistory,

    #[error("cursor {cursor} is outside 1..={len}")]
    Cursor { cursor: usize, len: usize },

    #[error("position for a {actual}x{actual} board in a {expected}x{expected} game")]
    BoardSize { expected: usize, actual: usize },

    #[error("{0} cannot be the color to move")]
    Turn(Color),

    #[error("situation {index} records more captures than the board holds")]
    Captures { index: usize },

    #[error("live position or turn disagrees with the situation at the cursor")]
    Diverged,
}

/// History part of a snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistorySnapshot {
    pub situations: Vec<Situation>,
    /// 1-based.
    pub cursor: usize,
}

/// Everything needed to rebuild a `Game`.
///
/// Situations missing the `passed` flag restore as stone moves; see the
/// module docs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub position: Position,
    pub to_move: Color,
    pub running: bool,
    pub config: GameConfig,
    pub history: HistorySnapshot,
}

impl GameSnapshot {
    /// Capture the full state of a game.
    #[must_use]
    pub fn capture(game: &Game) -> Self {
        let history = game.history();
        Self {
            position: game.board().to_position(),
            to_move: game.to_move(),
            running: game.is_running(),
            config: *game.config(),
            history: HistorySnapshot {
                situations: history.iter().cloned().collect(),
                cursor: history.cursor(),
            },
        }
    }

    /// Rebuild the game, checking that the envelope is consistent.
    pub fn restore(self) -> Result<Game, SnapshotError> {
        let config = self.config;
        config.validate()?;

        let size = config.board_size;
        check_size(size, &self.position)?;
        check_turn(self.to_move)?;

        let HistorySnapshot { situations, cursor } = self.history;
        if situations.is_empty() {
            return Err(SnapshotError::EmptyHistory);
        }
        let cells = u32::try_from(size * size).unwrap_or(u32::MAX);
        let mut total = Captures::default();
        for (i, s) in situations.iter().enumerate() {
            check_size(size, s.position())?;
            check_turn(s.turn())?;
            total = check_captures(cells, total, s.captures())
                .ok_or(SnapshotError::Captures { index: i + 1 })?;
        }

        let len = situations.len();
        let history = History::restore(situations, cursor).ok_or(SnapshotError::Cursor { cursor, len })?;

        let live = Situation::new(self.position, self.to_move);
        if history.current() != Some(&live) {
            return Err(SnapshotError::Diverged);
        }

        debug!(situations = len, cursor, running = self.running, "game restored");
        Ok(Game::from_parts(
            config,
            Board::from_position(live.position()),
            history,
            self.to_move,
            self.running,
        ))
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from [`GameSnapshot::to_bytes`] output.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Game {
    /// Capture this game for persistence.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }

    /// Rebuild a game from a snapshot.
    pub fn restore(snapshot: GameSnapshot) -> Result<Game, SnapshotError> {
        snapshot.restore()
    }
}

fn check_size(expected: usize, position: &Position) -> Result<(), SnapshotError> {
    let actual = position.board_size();
    if actual != expected {
        return Err(SnapshotError::BoardSize { expected, actual });
    }
    Ok(())
}

fn check_turn(turn: Color) -> Result<(), SnapshotError> {
    if !turn.is_stone() {
        return Err(SnapshotError::Turn(turn));
    }
    Ok(())
}

/// Running total after one situation, or `None` if a single move claims
/// more stones than `cells` or the total overflows.
fn check_captures(cells: u32, total: Captures, captures: Captures) -> Option<Captures> {
    if captures.iter().any(|(_, &n)| n > cells) {
        return None;
    }
    total.checked_add(captures)
}
