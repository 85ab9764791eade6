//! Data models for practice storage

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scheduler::ReviewItem;

/// A practitioner owns a set of drills and their scheduling state.
/// Authentication is an external concern; this is scoping only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Practitioner {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Practitioner {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            created_at: Utc::now(),
        }
    }
}

/// Category of practiced unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DrillKind {
    /// Sticking pattern (paradiddles, flams, rolls)
    Rudiment,
    /// Time-keeping pattern
    Groove,
    /// Short transitional phrase
    Fill,
    /// Full song or section
    Song,
}

impl Default for DrillKind {
    fn default() -> Self {
        Self::Rudiment
    }
}

/// A practiced unit: a pattern or exercise the practitioner works on
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drill {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub kind: DrillKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Target tempo in BPM, if the drill has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_tempo: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Drill {
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            kind: DrillKind::default(),
            description: None,
            tags: Vec::new(),
            target_tempo: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A drill joined with its scheduling state, used for practice sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrillWithState {
    pub drill: Drill,
    pub state: ReviewItem,
}

/// The day's bucketed practice plan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeSheet {
    pub overdue: Vec<DrillWithState>,
    pub due_today: Vec<DrillWithState>,
    pub upcoming: Vec<DrillWithState>,
}

/// A record of a single review outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub id: Uuid,
    pub item_id: Uuid,
    /// Grade given by the practitioner (0-5, SM-2 scale)
    pub grade: i32,
    /// Interval in days after applying the review
    pub interval_days: i32,
    /// Ease factor after applying the review
    pub ease_factor: f32,
    /// When the review occurred
    pub reviewed_at: DateTime<Utc>,
}

impl ReviewRecord {
    pub fn new(
        item_id: Uuid,
        grade: i32,
        interval_days: i32,
        ease_factor: f32,
        reviewed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            item_id,
            grade,
            interval_days,
            ease_factor,
            reviewed_at,
        }
    }
}
