//! Storage operations for drills and scheduling state
//!
//! Directory structure per practitioner:
//! ```text
//! practitioners.json           # Registry of practitioners
//! practitioners/{owner-id}/
//! ├── drills/
//! │   └── {drill-id}.json      # Drill content
//! ├── items/
//! │   └── {drill-id}.json      # Spaced repetition state
//! └── reviews.json             # Append-only review log
//! ```

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::scheduler::{self, classify, ReviewItem, SchedulerError, PASS_THRESHOLD};

use super::models::*;
use super::stats::{streak_days, PracticeStats};

#[derive(Error, Debug)]
pub enum PracticeStorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Drill not found: {0}")]
    DrillNotFound(Uuid),

    #[error(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("Could not determine data directory")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, PracticeStorageError>;

/// Storage manager for practice data
pub struct PracticeStorage {
    /// Base path for practice data (e.g., ~/.local/share/woodshed)
    base_path: PathBuf,
}

impl PracticeStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("woodshed"))
            .ok_or(PracticeStorageError::DataDirNotFound)
    }

    /// Get the practitioners.json path
    fn practitioners_path(&self) -> PathBuf {
        self.base_path.join("practitioners.json")
    }

    /// Get the data directory for a practitioner
    fn owner_dir(&self, owner_id: Uuid) -> PathBuf {
        self.base_path
            .join("practitioners")
            .join(owner_id.to_string())
    }

    /// Get the drills directory for a practitioner
    fn drills_dir(&self, owner_id: Uuid) -> PathBuf {
        self.owner_dir(owner_id).join("drills")
    }

    /// Get the scheduling-state directory for a practitioner
    fn items_dir(&self, owner_id: Uuid) -> PathBuf {
        self.owner_dir(owner_id).join("items")
    }

    /// Get the review-log path for a practitioner
    fn reviews_path(&self, owner_id: Uuid) -> PathBuf {
        self.owner_dir(owner_id).join("reviews.json")
    }

    /// Get the path for a specific drill
    fn drill_path(&self, owner_id: Uuid, drill_id: Uuid) -> PathBuf {
        self.drills_dir(owner_id).join(format!("{}.json", drill_id))
    }

    /// Get the path for a drill's scheduling state
    fn item_path(&self, owner_id: Uuid, drill_id: Uuid) -> PathBuf {
        self.items_dir(owner_id).join(format!("{}.json", drill_id))
    }

    /// Initialize storage for a practitioner
    pub fn init(&self, owner_id: Uuid) -> Result<()> {
        fs::create_dir_all(self.drills_dir(owner_id))?;
        fs::create_dir_all(self.items_dir(owner_id))?;
        Ok(())
    }

    // ==================== Practitioner Operations ====================

    /// List all registered practitioners
    pub fn list_practitioners(&self) -> Result<Vec<Practitioner>> {
        let path = self.practitioners_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        let practitioners: Vec<Practitioner> = serde_json::from_str(&content)?;
        Ok(practitioners)
    }

    /// Find a practitioner by name (case-insensitive), creating them on
    /// first use
    pub fn get_or_create_practitioner(&self, name: &str) -> Result<Practitioner> {
        let mut practitioners = self.list_practitioners()?;

        if let Some(existing) = practitioners
            .iter()
            .find(|p| p.name.to_lowercase() == name.to_lowercase())
        {
            return Ok(existing.clone());
        }

        fs::create_dir_all(&self.base_path)?;

        let practitioner = Practitioner::new(name.to_string());
        self.init(practitioner.id)?;
        practitioners.push(practitioner.clone());
        fs::write(
            self.practitioners_path(),
            serde_json::to_string_pretty(&practitioners)?,
        )?;

        log::info!("Registered practitioner '{}' ({})", name, practitioner.id);
        Ok(practitioner)
    }

    // ==================== Drill Operations ====================

    /// List all drills for a practitioner, sorted by name
    pub fn list_drills(&self, owner_id: Uuid) -> Result<Vec<Drill>> {
        let drills_dir = self.drills_dir(owner_id);
        if !drills_dir.exists() {
            return Ok(Vec::new());
        }

        let mut drills = Vec::new();
        for entry in fs::read_dir(&drills_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                let content = fs::read_to_string(&path)?;
                let drill: Drill = serde_json::from_str(&content)?;
                drills.push(drill);
            }
        }

        drills.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(drills)
    }

    /// Get a specific drill
    pub fn get_drill(&self, owner_id: Uuid, drill_id: Uuid) -> Result<Drill> {
        let drill_path = self.drill_path(owner_id, drill_id);
        if !drill_path.exists() {
            return Err(PracticeStorageError::DrillNotFound(drill_id));
        }

        let content = fs::read_to_string(&drill_path)?;
        let drill: Drill = serde_json::from_str(&content)?;
        Ok(drill)
    }

    /// Create a new drill with fresh scheduling state
    pub fn create_drill(
        &self,
        owner_id: Uuid,
        name: String,
        kind: Option<DrillKind>,
        description: Option<String>,
        tags: Option<Vec<String>>,
        target_tempo: Option<i32>,
    ) -> Result<Drill> {
        self.init(owner_id)?;

        let mut drill = Drill::new(name);
        if let Some(k) = kind {
            drill.kind = k;
        }
        drill.description = description;
        if let Some(t) = tags {
            drill.tags = t;
        }
        drill.target_tempo = target_tempo;

        fs::write(
            self.drill_path(owner_id, drill.id),
            serde_json::to_string_pretty(&drill)?,
        )?;

        // Create initial scheduling state: due immediately
        let item = ReviewItem::new(owner_id, drill.id, Utc::now());
        fs::write(
            self.item_path(owner_id, drill.id),
            serde_json::to_string_pretty(&item)?,
        )?;

        log::info!("Created drill '{}' ({})", drill.name, drill.id);
        Ok(drill)
    }

    /// Update a drill
    pub fn update_drill(&self, owner_id: Uuid, drill: &Drill) -> Result<()> {
        let drill_path = self.drill_path(owner_id, drill.id);
        if !drill_path.exists() {
            return Err(PracticeStorageError::DrillNotFound(drill.id));
        }

        let mut drill = drill.clone();
        drill.updated_at = Utc::now();
        fs::write(&drill_path, serde_json::to_string_pretty(&drill)?)?;
        Ok(())
    }

    /// Delete a drill and its scheduling state
    pub fn delete_drill(&self, owner_id: Uuid, drill_id: Uuid) -> Result<()> {
        let drill_path = self.drill_path(owner_id, drill_id);
        if !drill_path.exists() {
            return Err(PracticeStorageError::DrillNotFound(drill_id));
        }
        fs::remove_file(&drill_path)?;

        let item_path = self.item_path(owner_id, drill_id);
        if item_path.exists() {
            fs::remove_file(&item_path)?;
        }

        log::info!("Deleted drill {}", drill_id);
        Ok(())
    }

    // ==================== State Operations ====================

    /// Get the scheduling state for a drill, a fresh state if none is stored
    pub fn get_item(&self, owner_id: Uuid, drill_id: Uuid) -> Result<ReviewItem> {
        let item_path = self.item_path(owner_id, drill_id);
        if !item_path.exists() {
            return Ok(ReviewItem::new(owner_id, drill_id, Utc::now()));
        }

        let content = fs::read_to_string(&item_path)?;
        let item: ReviewItem = serde_json::from_str(&content)?;
        Ok(item)
    }

    /// Persist the scheduling state for a drill
    pub fn update_item(&self, owner_id: Uuid, item: &ReviewItem) -> Result<()> {
        fs::create_dir_all(self.items_dir(owner_id))?;
        fs::write(
            self.item_path(owner_id, item.item_id),
            serde_json::to_string_pretty(item)?,
        )?;
        Ok(())
    }

    // ==================== Review Operations ====================

    /// List all review records for a practitioner
    pub fn list_reviews(&self, owner_id: Uuid) -> Result<Vec<ReviewRecord>> {
        let path = self.reviews_path(owner_id);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        let records: Vec<ReviewRecord> = serde_json::from_str(&content)?;
        Ok(records)
    }

    fn append_review_record(&self, owner_id: Uuid, record: ReviewRecord) -> Result<()> {
        let mut records = self.list_reviews(owner_id)?;
        records.push(record);
        fs::write(
            self.reviews_path(owner_id),
            serde_json::to_string_pretty(&records)?,
        )?;
        Ok(())
    }

    /// Record a review outcome for a drill.
    ///
    /// Loads the current state, runs the pure scheduler transition at
    /// the current time, persists the result, and appends to the
    /// review log.
    pub fn submit_review(&self, owner_id: Uuid, drill_id: Uuid, grade: i32) -> Result<ReviewItem> {
        // Reject reviews against unknown drills
        let drill = self.get_drill(owner_id, drill_id)?;

        let item = self.get_item(owner_id, drill_id)?;
        let now = Utc::now();
        let next = scheduler::review(&item, grade, now)?;

        self.update_item(owner_id, &next)?;
        self.append_review_record(
            owner_id,
            ReviewRecord::new(drill_id, grade, next.interval_days, next.ease_factor, now),
        )?;

        log::info!(
            "Reviewed '{}' with grade {}, next due {}",
            drill.name,
            grade,
            next.due_at.format("%Y-%m-%d")
        );
        Ok(next)
    }

    /// Build the day's practice sheet: drills joined with state and
    /// bucketed by the scheduler
    pub fn practice_sheet(&self, owner_id: Uuid, now: DateTime<Utc>) -> Result<PracticeSheet> {
        let drills = self.list_drills(owner_id)?;

        let mut states = Vec::with_capacity(drills.len());
        for drill in &drills {
            states.push(self.get_item(owner_id, drill.id)?);
        }

        let queue = classify(&states, now);

        let join = |bucket: Vec<ReviewItem>| -> Vec<DrillWithState> {
            bucket
                .into_iter()
                .filter_map(|state| {
                    drills
                        .iter()
                        .find(|d| d.id == state.item_id)
                        .cloned()
                        .map(|drill| DrillWithState { drill, state })
                })
                .collect()
        };

        Ok(PracticeSheet {
            overdue: join(queue.overdue),
            due_today: join(queue.due_today),
            upcoming: join(queue.upcoming),
        })
    }

    /// Compute practice statistics for a practitioner
    pub fn stats(&self, owner_id: Uuid, now: DateTime<Utc>) -> Result<PracticeStats> {
        let drills = self.list_drills(owner_id)?;

        let mut states = Vec::with_capacity(drills.len());
        for drill in &drills {
            states.push(self.get_item(owner_id, drill.id)?);
        }

        let queue = classify(&states, now);
        let records = self.list_reviews(owner_id)?;

        let today = now.date_naive();
        let todays: Vec<&ReviewRecord> = records
            .iter()
            .filter(|r| r.reviewed_at.date_naive() == today)
            .collect();

        Ok(PracticeStats {
            total_drills: drills.len(),
            new_drills: states
                .iter()
                .filter(|s| s.last_reviewed_at.is_none())
                .count(),
            due_drills: queue.overdue.len() + queue.due_today.len(),
            reviews_today: todays.len(),
            passes_today: todays.iter().filter(|r| r.grade >= PASS_THRESHOLD).count(),
            streak_days: streak_days(&records, now),
        })
    }
}
