//! Results of game operations.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Captures;

/// A successful stone placement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Ascending cell indices whose color changed: the placed stone and
    /// every removed stone.
    pub changed: SmallVec<[usize; 4]>,

    /// Stones removed by this move, keyed by their color.
    pub captures: Captures,
}

impl MoveOutcome {
    /// Number of stones removed by this move.
    #[must_use]
    pub fn captured(&self) -> u32 {
        self.captures.total()
    }
}

/// Direction for history navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    Previous,
    Next,
    First,
    Last,
}
