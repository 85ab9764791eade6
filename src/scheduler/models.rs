//! Scheduling state for practiced drills

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Spaced-repetition state for one drill, scoped to one practitioner.
///
/// `due_at` is always derived from the last review plus the current
/// interval; it is never set independently. A fresh item (interval 0,
/// no `last_reviewed_at`) is due immediately.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub item_id: Uuid,
    pub owner_id: Uuid,
    /// SM-2 ease factor (default 2.5, floor 1.3)
    #[serde(default = "default_ease_factor")]
    pub ease_factor: f32,
    /// Current interval in days; 0 means new/unseen
    #[serde(default)]
    pub interval_days: i32,
    /// Consecutive successful reviews; resets on failure
    #[serde(default)]
    pub repetitions: i32,
    /// When the drill next becomes reviewable
    pub due_at: DateTime<Utc>,
    /// Most recent review, absent if never reviewed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed_at: Option<DateTime<Utc>>,
}

fn default_ease_factor() -> f32 {
    super::algorithm::INITIAL_EASE_FACTOR
}

impl ReviewItem {
    /// Fresh state for a drill first encountered at `now`
    pub fn new(owner_id: Uuid, item_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            item_id,
            owner_id,
            ease_factor: default_ease_factor(),
            interval_days: 0,
            repetitions: 0,
            due_at: now,
            last_reviewed_at: None,
        }
    }

    /// Check whether the drill is reviewable at `now` (calendar-day granularity)
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.last_reviewed_at.is_none() || self.due_at.date_naive() <= now.date_naive()
    }
}
