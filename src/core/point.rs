//! Board cell descriptor.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// A cell and its occupant.
///
/// Coordinates are signed so that neighbors of edge cells can be described
/// (they carry `Color::OutOfBounds`). Equality and hashing use all three
/// fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32, color: Color) -> Self {
        Self { x, y, color }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}) {}", self.x, self.y, self.color)
    }
}
