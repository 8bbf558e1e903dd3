//! Ko rules.
//!
//! A candidate situation is compared against the walked part of the
//! history only; an undone future is not part of the game.

use crate::core::KoRule;
use crate::history::{History, Situation};

impl KoRule {
    /// True if appending `candidate` to `history` would repeat a forbidden
    /// state.
    #[must_use]
    pub fn forbids(self, history: &History, candidate: &Situation) -> bool {
        match self {
            KoRule::Positional => history.contains_position(candidate.position()),
            KoRule::Situational => history.contains(candidate),
            // No rule defined yet.
            KoRule::Japanese => false,
        }
    }
}
