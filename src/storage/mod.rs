//! File-backed persistence for practice data
//!
//! One JSON file per drill and per scheduling state, scoped under a
//! practitioner directory, plus an append-only review log. The
//! scheduler itself never touches the filesystem; this layer owns the
//! read-modify-write cycle around it.

mod models;
mod practice_storage;
pub mod stats;

pub use models::*;
pub use practice_storage::{PracticeStorage, PracticeStorageError};
pub use stats::PracticeStats;
