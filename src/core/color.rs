//! Cell colors and per-color storage.
//!
//! ## Color
//!
//! The closed set of values a board query can return. Only `Empty`,
//! `Black` and `White` are ever stored in a grid; `OutOfBounds` is the
//! sentinel for coordinates off the board.
//!
//! ## ColorMap
//!
//! Fixed storage with one slot per stone color, indexed by `Color`.
//! Used for capture tallies.

use serde::{Deserialize, Serialize};
use std::ops::{AddAssign, Index, IndexMut, SubAssign};

use super::error::ParseError;

/// Color of a board cell.
///
/// Each color has a fixed single-character code, used by the canonical
/// position string and by serialization:
///
/// ```
/// use go_rules::Color;
///
/// assert_eq!(Color::White.code(), '0');
/// assert_eq!(Color::Black.code(), '1');
/// assert_eq!(Color::Empty.code(), '2');
/// assert_eq!(Color::from_code('1'), Some(Color::Black));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub enum Color {
    #[default]
    Empty,
    Black,
    White,
    OutOfBounds,
}

impl Color {
    /// Character code for this color.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Color::White => '0',
            Color::Black => '1',
            Color::Empty => '2',
            Color::OutOfBounds => '3',
        }
    }

    /// Decode a character code.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Color> {
        match code {
            '0' => Some(Color::White),
            '1' => Some(Color::Black),
            '2' => Some(Color::Empty),
            '3' => Some(Color::OutOfBounds),
            _ => None,
        }
    }

    /// The opposing stone color.
    ///
    /// Anything that is not a stone inverts to `OutOfBounds`.
    #[must_use]
    pub const fn inverse(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
            _ => Color::OutOfBounds,
        }
    }

    /// True for `Black` and `White`.
    #[must_use]
    pub const fn is_stone(self) -> bool {
        matches!(self, Color::Black | Color::White)
    }

    /// True for the colors a board may store.
    #[must_use]
    pub const fn is_storable(self) -> bool {
        !matches!(self, Color::OutOfBounds)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Empty => "empty",
            Color::Black => "black",
            Color::White => "white",
            Color::OutOfBounds => "out of bounds",
        };
        f.write_str(name)
    }
}

impl From<Color> for char {
    fn from(color: Color) -> char {
        color.code()
    }
}

impl TryFrom<char> for Color {
    type Error = ParseError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        Color::from_code(code).ok_or(ParseError::UnknownColor(code))
    }
}

/// One value per stone color.
///
/// Indexing with a non-stone color panics; use [`ColorMap::get`] when the
/// color is not known to be a stone.
///
/// ## Example
///
/// ```
/// use go_rules::{Color, ColorMap};
///
/// let mut captured: ColorMap<u32> = ColorMap::default();
/// captured[Color::White] += 3;
///
/// assert_eq!(captured[Color::White], 3);
/// assert_eq!(captured.get(Color::Empty), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    pub black: T,
    pub white: T,
}

/// Stones captured, keyed by the color of the removed stones.
pub type Captures = ColorMap<u32>;

impl<T> ColorMap<T> {
    /// Create a map from explicit values.
    pub const fn new(black: T, white: T) -> Self {
        Self { black, white }
    }

    /// Get the value for `color`, or `None` if it is not a stone color.
    #[must_use]
    pub fn get(&self, color: Color) -> Option<&T> {
        match color {
            Color::Black => Some(&self.black),
            Color::White => Some(&self.white),
            _ => None,
        }
    }

    /// Mutable counterpart of [`ColorMap::get`].
    pub fn get_mut(&mut self, color: Color) -> Option<&mut T> {
        match color {
            Color::Black => Some(&mut self.black),
            Color::White => Some(&mut self.white),
            _ => None,
        }
    }

    /// Iterate over `(color, &value)` pairs, black first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        [(Color::Black, &self.black), (Color::White, &self.white)].into_iter()
    }
}

impl ColorMap<u32> {
    /// Sum over both colors.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.black + self.white
    }

    /// True when nothing was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Per-color sum, or `None` if either color overflows.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self::new(
            self.black.checked_add(rhs.black)?,
            self.white.checked_add(rhs.white)?,
        ))
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        match self.get(color) {
            Some(value) => value,
            None => panic!("ColorMap is keyed by stone colors, got {color}"),
        }
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        match self.get_mut(color) {
            Some(value) => value,
            None => panic!("ColorMap is keyed by stone colors, got {color}"),
        }
    }
}

impl AddAssign for ColorMap<u32> {
    fn add_assign(&mut self, rhs: Self) {
        self.black += rhs.black;
        self.white += rhs.white;
    }
}

impl SubAssign for ColorMap<u32> {
    fn sub_assign(&mut self, rhs: Self) {
        self.black -= rhs.black;
        self.white -= rhs.white;
    }
}
