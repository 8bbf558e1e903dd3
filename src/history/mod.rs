//! Game history: situations and the undo/redo timeline.
//!
//! A `Situation` is one step (position + turn + the captures of the move
//! that produced it). `History` orders them, tracks the cursor, and derives
//! the cumulative capture totals of the walked path.

pub mod situation;
pub mod timeline;

pub use situation::Situation;
pub use timeline::History;
