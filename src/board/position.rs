//! Canonical position key.
//!
//! A `Position` is the frozen content of a board: N² colors in row-major
//! order, each `Empty`, `Black` or `White`. Its string form has one color
//! code per cell and is what ko comparison and persistence work on.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{Color, ParseError};

/// Immutable snapshot of a board's cells.
///
/// ```
/// use go_rules::{Color, Position};
///
/// let position: Position = "2122".parse().unwrap();
/// assert_eq!(position.board_size(), 2);
/// assert_eq!(position.cells()[1], Color::Black);
/// assert_eq!(position.to_string(), "2122");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Position {
    size: usize,
    cells: Box<[Color]>,
}

impl Position {
    /// All-empty position.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Color::Empty; size * size].into_boxed_slice(),
        }
    }

    /// Build from cells already known to be a valid grid.
    pub(crate) fn from_cells(size: usize, cells: &[Color]) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        debug_assert!(cells.iter().all(|c| c.is_storable()));
        Self {
            size,
            cells: cells.into(),
        }
    }

    /// Lines per side.
    #[must_use]
    pub fn board_size(&self) -> usize {
        self.size
    }

    /// Cells in row-major order (index = y * size + x).
    #[must_use]
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Number of stones of `color`.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: String = self.cells.iter().map(|c| c.code()).collect();
        f.write_str(&s)
    }
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        let size = (len as f64).sqrt() as usize;
        if size == 0 || size * size != len {
            return Err(ParseError::NotSquare(len));
        }

        let cells = s
            .chars()
            .map(|code| {
                let color = Color::try_from(code)?;
                if color.is_storable() {
                    Ok(color)
                } else {
                    Err(ParseError::NotStorable(color))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            size,
            cells: cells.into_boxed_slice(),
        })
    }
}

impl TryFrom<String> for Position {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Position> for String {
    fn from(position: Position) -> String {
        position.to_string()
    }
}
