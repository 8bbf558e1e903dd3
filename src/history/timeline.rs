//! Cursor-addressed game history.
//!
//! ## Cursor
//!
//! The cursor is 1-based and points at the current situation. Everything
//! at or before it is the walked path; anything after it is an undone
//! future that only `next`/`last` can reach.
//!
//! ## Branch overwrite
//!
//! Adding a situation while the cursor is behind the end discards the
//! undone future first. Redo never resurrects a discarded branch.
//!
//! ## Captures
//!
//! Each situation stores only the stones its own move captured. The
//! cumulative totals are the sum over the walked path and are kept in step
//! with every cursor move.

use im::Vector;

use super::situation::Situation;
use crate::board::Position;
use crate::core::{Captures, Color};

/// Ordered situations with an undo/redo cursor.
#[derive(Clone, Debug, Default)]
pub struct History {
    situations: Vector<Situation>,
    cursor: usize,
    cumulative: Captures,
}

impl History {
    /// An empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a history from stored situations and a cursor.
    ///
    /// Returns `None` unless `1 <= cursor <= situations.len()` and the
    /// walked capture totals fit in a `u32`.
    #[must_use]
    pub fn restore(situations: impl IntoIterator<Item = Situation>, cursor: usize) -> Option<Self> {
        let situations: Vector<Situation> = situations.into_iter().collect();
        if cursor == 0 || cursor > situations.len() {
            return None;
        }
        let mut history = Self {
            situations,
            cursor,
            cumulative: Captures::default(),
        };
        let cumulative = history
            .walked()
            .try_fold(Captures::default(), |total, s| total.checked_add(s.captures()))?;
        history.cumulative = cumulative;
        Some(history)
    }

    /// Append a situation, discarding any undone future.
    pub fn add(&mut self, situation: Situation) {
        if self.cursor < self.situations.len() {
            self.situations.truncate(self.cursor);
        }
        self.cumulative += situation.captures();
        self.situations.push_back(situation);
        self.cursor = self.situations.len();
        self.check_totals();
    }

    /// Step back one situation. `None` at the start.
    pub fn previous(&mut self) -> Option<&Situation> {
        if self.cursor <= 1 {
            return None;
        }
        self.cumulative -= self.situations[self.cursor - 1].captures();
        self.cursor -= 1;
        self.check_totals();
        self.current()
    }

    /// Step forward one situation. `None` at the end.
    pub fn next(&mut self) -> Option<&Situation> {
        if self.cursor >= self.situations.len() {
            return None;
        }
        self.cursor += 1;
        self.cumulative += self.situations[self.cursor - 1].captures();
        self.check_totals();
        self.current()
    }

    /// Jump to the first situation. `None` if empty.
    pub fn first(&mut self) -> Option<&Situation> {
        if self.situations.is_empty() {
            return None;
        }
        self.cursor = 1;
        self.cumulative = self.walked_captures();
        self.current()
    }

    /// Jump to the last situation. `None` if empty.
    pub fn last(&mut self) -> Option<&Situation> {
        if self.situations.is_empty() {
            return None;
        }
        self.cursor = self.situations.len();
        self.cumulative = self.walked_captures();
        self.current()
    }

    /// Situation at the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&Situation> {
        self.cursor.checked_sub(1).and_then(|i| self.situations.get(i))
    }

    /// 1-based cursor; 0 only when empty.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.situations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.situations.is_empty()
    }

    /// Situations up to and including the cursor.
    pub fn walked(&self) -> impl Iterator<Item = &Situation> + '_ {
        self.situations.iter().take(self.cursor)
    }

    /// The last `n` walked situations, oldest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &Situation> + '_ {
        (self.cursor.saturating_sub(n)..self.cursor).filter_map(move |i| self.situations.get(i))
    }

    /// Every stored situation, including an undone future.
    pub fn iter(&self) -> impl Iterator<Item = &Situation> + '_ {
        self.situations.iter()
    }

    /// True if `situation` occurs on the walked path.
    #[must_use]
    pub fn contains(&self, situation: &Situation) -> bool {
        self.walked().any(|s| s == situation)
    }

    /// True if `position` occurs on the walked path with either turn.
    #[must_use]
    pub fn contains_position(&self, position: &Position) -> bool {
        self.walked().any(|s| s.position() == position)
    }

    /// Stones captured along the walked path.
    #[must_use]
    pub fn cumulative_captures(&self) -> Captures {
        self.cumulative
    }

    /// Walked-path total for one color; 0 for non-stone colors.
    #[must_use]
    pub fn captured(&self, color: Color) -> u32 {
        self.cumulative.get(color).copied().unwrap_or(0)
    }

    fn walked_captures(&self) -> Captures {
        let mut total = Captures::default();
        for s in self.walked() {
            total += s.captures();
        }
        total
    }

    fn check_totals(&self) {
        debug_assert_eq!(self.cumulative, self.walked_captures());
    }
}
