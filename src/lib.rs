//! woodshed: spaced-repetition practice scheduling for drummers
//!
//! The core is a pure SM-2 scheduler ([`scheduler`]) that turns a
//! practice grade into the drill's next review date. Around it sits a
//! file-backed storage layer ([`storage`]) that keeps drills, per-drill
//! scheduling state, and a review log per practitioner.

pub mod scheduler;
pub mod storage;

pub use scheduler::{classify, review, PracticeQueue, ReviewItem, SchedulerError};
pub use storage::{PracticeStorage, PracticeStorageError};
