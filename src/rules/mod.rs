//! Rules of play.
//!
//! `Game` enforces legality before committing any change:
//! - occupied and off-board points are refused
//! - opponent chains without liberties are captured
//! - suicide is refused unless configured otherwise
//! - the configured ko rule is checked against the walked history
//!
//! The game ends by the configured `Termination` rule.

pub mod engine;
pub mod ko;
pub mod outcome;
pub mod termination;

pub use engine::Game;
pub use outcome::{MoveOutcome, Step};
pub use termination::trailing_passes;
