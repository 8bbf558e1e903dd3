//! One step of a game's history.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::board::Position;
use crate::core::{Captures, Color};

/// A board position plus whose turn is next.
///
/// Also carries the stones captured by the move that produced it and
/// whether that move was a pass. Equality and hashing use only the position
/// and the turn: two situations reached by different routes are the same
/// situation for ko purposes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Situation {
    position: Position,
    turn: Color,
    #[serde(default)]
    captures: Captures,
    #[serde(default)]
    passed: bool,
}

impl Situation {
    /// A situation with no captures.
    #[must_use]
    pub fn new(position: Position, turn: Color) -> Self {
        Self {
            position,
            turn,
            captures: Captures::default(),
            passed: false,
        }
    }

    /// Attach the capture tally of the producing move.
    #[must_use]
    pub fn with_captures(mut self, captures: Captures) -> Self {
        self.captures = captures;
        self
    }

    /// Mark as produced by a pass.
    #[must_use]
    pub fn as_pass(mut self) -> Self {
        self.passed = true;
        self
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Color to move after this situation.
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Stones captured by the move that produced this situation.
    #[must_use]
    pub fn captures(&self) -> Captures {
        self.captures
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.passed
    }
}

impl PartialEq for Situation {
    fn eq(&self, other: &Self) -> bool {
        self.turn == other.turn && self.position == other.position
    }
}

impl Eq for Situation {}

impl Hash for Situation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
        self.turn.hash(state);
    }
}
