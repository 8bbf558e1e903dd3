//! Board grid and canonical positions.
//!
//! `Board` is the mutable grid a game plays on; `Position` is its frozen,
//! hashable form used as the key for ko comparison and persistence.

pub mod grid;
pub mod position;

pub use grid::Board;
pub use position::Position;
