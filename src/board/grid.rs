//! The board grid.
//!
//! Pure grid algebra: bounds checks, adjacency, chain discovery and
//! liberty counting. The board knows nothing about turns or legality;
//! `set_stone` writes whatever it is given.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::fmt::Write as _;
use std::str::FromStr;

use super::position::Position;
use crate::core::{Color, IllegalPointError, ParseError, Point};

/// A square Go board.
///
/// Cells are stored row-major, index = `y * size + x`. Only `Empty`,
/// `Black` and `White` are ever stored. Cloning is a deep copy.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Color>,
}

impl Board {
    /// Create an empty board with `size` lines per side.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Color::Empty; size * size],
        }
    }

    /// Rebuild a board from a position.
    #[must_use]
    pub fn from_position(position: &Position) -> Self {
        Self {
            size: position.board_size(),
            cells: position.cells().to_vec(),
        }
    }

    /// Freeze the current cells into a position key.
    #[must_use]
    pub fn to_position(&self) -> Position {
        Position::from_cells(self.size, &self.cells)
    }

    /// Lines per side.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Flat index of `(x, y)`, or `None` when off the board.
    #[must_use]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        let size = self.size as i32;
        if (0..size).contains(&x) && (0..size).contains(&y) {
            Some(y as usize * self.size + x as usize)
        } else {
            None
        }
    }

    /// Coordinates of a flat index.
    #[must_use]
    pub fn coords(&self, index: usize) -> (i32, i32) {
        ((index % self.size) as i32, (index / self.size) as i32)
    }

    /// Color at `(x, y)`; `OutOfBounds` off the board.
    #[must_use]
    pub fn color_at(&self, x: i32, y: i32) -> Color {
        match self.index(x, y) {
            Some(i) => self.cells[i],
            None => Color::OutOfBounds,
        }
    }

    /// Write a color without any rule checks.
    ///
    /// # Panics
    ///
    /// If `(x, y)` is off the board or `color` is `OutOfBounds`.
    pub fn set_stone(&mut self, x: i32, y: i32, color: Color) {
        assert!(color.is_storable(), "cannot store {color} on a board");
        let Some(i) = self.index(x, y) else {
            panic!("({x}, {y}) is off a {0}x{0} board", self.size);
        };
        self.cells[i] = color;
    }

    /// The four orthogonal neighbors: left, right, top, bottom.
    #[must_use]
    pub fn surrounding(&self, x: i32, y: i32) -> [Point; 4] {
        [
            Point::new(x - 1, y, self.color_at(x - 1, y)),
            Point::new(x + 1, y, self.color_at(x + 1, y)),
            Point::new(x, y - 1, self.color_at(x, y - 1)),
            Point::new(x, y + 1, self.color_at(x, y + 1)),
        ]
    }

    /// The connected same-colored stones containing `(x, y)`.
    ///
    /// Empty when `(x, y)` holds no stone.
    #[must_use]
    pub fn chain(&self, x: i32, y: i32) -> FxHashSet<Point> {
        let mut chain = FxHashSet::default();
        let color = self.color_at(x, y);
        if !color.is_stone() {
            return chain;
        }

        let start = Point::new(x, y, color);
        chain.insert(start);
        let mut stack = vec![start];
        while let Some(p) = stack.pop() {
            for n in self.surrounding(p.x, p.y) {
                if n.color == color && chain.insert(n) {
                    stack.push(n);
                }
            }
        }
        chain
    }

    /// Empty cells adjacent to the chain at `(x, y)`.
    #[must_use]
    pub fn liberties(&self, x: i32, y: i32) -> FxHashSet<Point> {
        self.chain(x, y)
            .iter()
            .flat_map(|p| self.surrounding(p.x, p.y))
            .filter(|n| n.color == Color::Empty)
            .collect()
    }

    /// True when the chain at `(x, y)` has no liberties.
    pub fn is_captured(&self, x: i32, y: i32) -> Result<bool, IllegalPointError> {
        let color = self.color_at(x, y);
        if !color.is_stone() {
            return Err(IllegalPointError { x, y, color });
        }

        let has_liberty = self.chain(x, y).iter().any(|p| {
            self.surrounding(p.x, p.y)
                .iter()
                .any(|n| n.color == Color::Empty)
        });
        Ok(!has_liberty)
    }

    /// Empty every given cell.
    pub fn remove_stones<'a>(&mut self, points: impl IntoIterator<Item = &'a Point>) {
        for p in points {
            self.set_stone(p.x, p.y, Color::Empty);
        }
    }

    /// Ascending indices whose color differs between `self` and `other`.
    ///
    /// Both boards must have the same size.
    #[must_use]
    pub fn changed_cells(&self, other: &Board) -> SmallVec<[usize; 4]> {
        debug_assert_eq!(self.size, other.size);
        self.cells
            .iter()
            .zip(&other.cells)
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect()
    }

    /// Human-readable grid with coordinates.
    ///
    /// `X` is black, `O` is white, `+` is empty.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("   ");
        for x in 0..self.size {
            let _ = write!(out, "{x:>3}");
        }
        out.push('\n');

        for (y, row) in self.cells.chunks(self.size.max(1)).enumerate() {
            let _ = write!(out, "{y:>3}");
            for cell in row {
                let glyph = match cell {
                    Color::Black => 'X',
                    Color::White => 'O',
                    _ => '+',
                };
                let _ = write!(out, "  {glyph}");
            }
            out.push('\n');
        }
        out
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: String = self.cells.iter().map(|c| c.code()).collect();
        f.write_str(&s)
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let position: Position = s.parse()?;
        Ok(Board::from_position(&position))
    }
}
