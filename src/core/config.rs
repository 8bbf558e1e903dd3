//! Rule configuration.
//!
//! A game is configured once, at construction:
//! - `KoRule`: which repetitions are forbidden
//! - `suicide_allowed`: whether a self-capturing move is legal
//! - `board_size`: lines per side
//! - `Termination`: what ends the game
//!
//! The engine has no other configuration surface.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Largest supported board.
pub const MAX_BOARD_SIZE: usize = 25;

/// Board size used by [`GameConfig::default`].
pub const DEFAULT_BOARD_SIZE: usize = 19;

/// Ko rule variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KoRule {
    /// A position may not recur, whoever is to move.
    #[default]
    Positional,
    /// A position may not recur with the same player to move.
    Situational,
    /// Reserved. Never rejects a move.
    Japanese,
}

/// What ends a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Termination {
    /// Two passes in a row.
    #[default]
    ConsecutivePasses,
    /// Three identical positions in a row.
    RepeatedPosition,
}

/// Complete rule configuration.
///
/// ## Example
///
/// ```
/// use go_rules::{GameConfig, KoRule};
///
/// let config = GameConfig::default()
///     .with_ko_rule(KoRule::Situational)
///     .with_board_size(9);
///
/// assert!(config.validate().is_ok());
/// assert!(!config.suicide_allowed);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub ko_rule: KoRule,
    pub suicide_allowed: bool,
    /// Lines per side. A 19x19 board has a size of 19.
    pub board_size: usize,
    pub termination: Termination,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ko_rule: KoRule::Positional,
            suicide_allowed: false,
            board_size: DEFAULT_BOARD_SIZE,
            termination: Termination::ConsecutivePasses,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_ko_rule(mut self, ko_rule: KoRule) -> Self {
        self.ko_rule = ko_rule;
        self
    }

    #[must_use]
    pub fn with_suicide_allowed(mut self, allowed: bool) -> Self {
        self.suicide_allowed = allowed;
        self
    }

    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    #[must_use]
    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardSize {
                size: self.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(())
    }
}
