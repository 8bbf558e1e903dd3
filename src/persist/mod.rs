//! Persistence envelope.
//!
//! The engine owns no file format. `GameSnapshot` is the serializable
//! shape a host stores and hands back; `to_bytes`/`from_bytes` give a
//! compact bincode encoding, and any serde format works as well.

pub mod snapshot;

pub use snapshot::{GameSnapshot, HistorySnapshot, SnapshotError};
