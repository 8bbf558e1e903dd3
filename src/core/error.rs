//! Error types.
//!
//! Rule violations (`GameError::GameOver`, `Occupied`, `OutOfBounds`,
//! `Suicide`, `Ko`) are ordinary outcomes: the engine reports them and leaves
//! the game untouched. `IllegalPointError` is different in kind, it means a
//! capture query was issued against a cell that holds no stone, which only a
//! logic bug can do.

use thiserror::Error;

use super::color::Color;

/// A liberty or capture query against a cell that is not a stone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("point ({x}, {y}) is {color}, not a stone")]
pub struct IllegalPointError {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

/// Reasons a move or pass is refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The game has finished.
    #[error("game over, no more moves allowed")]
    GameOver,

    /// The target cell already holds a stone.
    #[error("point ({x}, {y}) is occupied")]
    Occupied { x: i32, y: i32 },

    /// The target cell is off the board.
    #[error("point ({x}, {y}) is off the board")]
    OutOfBounds { x: i32, y: i32 },

    /// The move would leave the mover's own chain without liberties.
    #[error("suicide is not allowed")]
    Suicide,

    /// The resulting position violates the ko rule.
    #[error("ko is violated")]
    Ko,

    /// Engine invariant violated.
    #[error(transparent)]
    IllegalPoint(#[from] IllegalPointError),
}

impl GameError {
    /// True for outcomes of the rules, false for engine bugs.
    #[must_use]
    pub fn is_rule_violation(&self) -> bool {
        !matches!(self, GameError::IllegalPoint(_))
    }
}

/// Invalid game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {size} is outside 1..={max}")]
    BoardSize { size: usize, max: usize },
}

/// Malformed position string or color code.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown color code {0:?}")]
    UnknownColor(char),

    #[error("{0} is not storable on a board")]
    NotStorable(Color),

    #[error("position of length {0} is not a square board")]
    NotSquare(usize),
}
