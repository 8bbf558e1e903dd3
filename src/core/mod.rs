//! Core value types: colors, points, configuration, errors.
//!
//! Everything else in the crate is built from these. None of them own
//! game state.

pub mod color;
pub mod point;
pub mod config;
pub mod error;

pub use color::{Captures, Color, ColorMap};
pub use point::Point;
pub use config::{GameConfig, KoRule, Termination, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
pub use error::{ConfigError, GameError, IllegalPointError, ParseError};
