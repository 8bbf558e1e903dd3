//! End-of-game detection.
//!
//! Both rules read the tail of the walked history, so navigating to a
//! situation recomputes whether the game is over there.

use smallvec::SmallVec;

use crate::core::Termination;
use crate::history::{History, Situation};

impl Termination {
    /// True if the game is over at the history's cursor.
    #[must_use]
    pub fn is_reached(self, history: &History) -> bool {
        match self {
            Termination::ConsecutivePasses => trailing_passes(history) >= 2,
            Termination::RepeatedPosition => {
                let tail: SmallVec<[&Situation; 3]> = history.recent(3).collect();
                tail.len() == 3 && tail.windows(2).all(|w| w[0].position() == w[1].position())
            }
        }
    }
}

/// Passes at the end of the walked history, capped at 2.
#[must_use]
pub fn trailing_passes(history: &History) -> u8 {
    let tail: SmallVec<[&Situation; 2]> = history.recent(2).collect();
    tail.iter().rev().take_while(|s| s.is_pass()).count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;
    use crate::core::Color;

    fn start() -> History {
        let mut h = History::new();
        h.add(Situation::new(Position::empty(2), Color::Black));
        h
    }

    fn pass(h: &mut History, turn: Color) {
        let position = h.current().unwrap().position().clone();
        h.add(Situation::new(position, turn).as_pass());
    }

    #[test]
    fn test_two_passes_end_the_game() {
        let mut h = start();
        assert_eq!(trailing_passes(&h), 0);

        pass(&mut h, Color::White);
        assert_eq!(trailing_passes(&h), 1);
        assert!(!Termination::ConsecutivePasses.is_reached(&h));

        pass(&mut h, Color::Black);
        assert_eq!(trailing_passes(&h), 2);
        assert!(Termination::ConsecutivePasses.is_reached(&h));

        h.previous();
        assert!(!Termination::ConsecutivePasses.is_reached(&h));
    }

    #[test]
    fn test_move_between_passes_resets() {
        let mut h = start();
        pass(&mut h, Color::White);
        h.add(Situation::new("2202".parse().unwrap(), Color::Black));
        pass(&mut h, Color::White);
        assert_eq!(trailing_passes(&h), 1);
        assert!(!Termination::ConsecutivePasses.is_reached(&h));
    }

    #[test]
    fn test_three_identical_positions() {
        let mut h = start();
        h.add(Situation::new(Position::empty(2), Color::White));
        assert!(!Termination::RepeatedPosition.is_reached(&h));

        h.add(Situation::new(Position::empty(2), Color::Black));
        assert!(Termination::RepeatedPosition.is_reached(&h));
        // Not passes, so the other rule does not fire.
        assert!(!Termination::ConsecutivePasses.is_reached(&h));
    }
}
