//! Spaced-repetition scheduling for drum practice
//!
//! This module provides:
//! - The SM-2 review transition (pure, clock passed in by the caller)
//! - Practice-queue classification (overdue / due today / upcoming)
//! - The per-drill scheduling state model

pub mod algorithm;
pub mod models;
pub mod queue;

pub use algorithm::{review, SchedulerError, INITIAL_EASE_FACTOR, MIN_EASE_FACTOR, PASS_THRESHOLD};
pub use models::ReviewItem;
pub use queue::{classify, PracticeQueue};
