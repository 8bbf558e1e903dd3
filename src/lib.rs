//! # go-rules
//!
//! A rules engine for the game of Go: move legality, captures, ko and
//! superko, and a navigable move history.
//!
//! ## Design Principles
//!
//! 1. **Strict Ownership**: A `Game` exclusively owns one `Board` and one
//!    `History`. Moves are tried on a board clone that is discarded on
//!    failure, so a rejected move never leaves partial state behind.
//!
//! 2. **Outcomes, Not Unwinding**: Rule violations are returned as
//!    `GameError` values. Only an engine bug (a capture query on a cell
//!    without a stone) is classified differently.
//!
//! 3. **Derived Totals**: Each situation stores only its own move's
//!    captures. Cumulative totals always match the walked part of the
//!    history, across undo, redo and branching.
//!
//! ## Modules
//!
//! - `core`: Colors, points, rule configuration, errors
//! - `board`: Grid algebra and canonical positions
//! - `history`: Situations and the undo/redo timeline
//! - `rules`: The `Game` state machine, ko and termination rules
//! - `persist`: Snapshot envelope for saving and restoring games
//!
//! ## Example
//!
//! ```
//! use go_rules::{Color, Game, GameConfig, KoRule};
//!
//! let config = GameConfig::default()
//!     .with_board_size(9)
//!     .with_ko_rule(KoRule::Situational);
//! let mut game = Game::new(config).unwrap();
//!
//! game.place_stone_at(4, 4).unwrap();
//! game.undo_move();
//! assert_eq!(game.position()[40], Color::Empty);
//!
//! game.redo_move();
//! assert_eq!(game.position()[40], Color::Black);
//! ```

pub mod core;
pub mod board;
pub mod history;
pub mod rules;
pub mod persist;

// Re-export commonly used types
pub use crate::core::{
    Captures, Color, ColorMap, Point,
    GameConfig, KoRule, Termination, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE,
    ConfigError, GameError, IllegalPointError, ParseError,
};

pub use crate::board::{Board, Position};

pub use crate::history::{History, Situation};

pub use crate::rules::{Game, MoveOutcome, Step};

pub use crate::persist::{GameSnapshot, HistorySnapshot, SnapshotError};
