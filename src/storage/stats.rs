//! Progress statistics

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::models::ReviewRecord;

/// Practice statistics for one practitioner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeStats {
    pub total_drills: usize,
    /// Drills never practiced
    pub new_drills: usize,
    /// Drills overdue or due today
    pub due_drills: usize,
    pub reviews_today: usize,
    pub passes_today: usize,
    /// Consecutive calendar days with at least one review, ending today
    pub streak_days: i32,
}

/// Count consecutive practice days ending on the day of `now`.
/// Zero if nothing was reviewed today.
pub fn streak_days(records: &[ReviewRecord], now: DateTime<Utc>) -> i32 {
    let practiced: HashSet<NaiveDate> = records.iter().map(|r| r.reviewed_at.date_naive()).collect();

    let mut day = now.date_naive();
    let mut streak = 0;
    while practiced.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use uuid::Uuid;

    fn record_at(reviewed_at: DateTime<Utc>) -> ReviewRecord {
        ReviewRecord::new(Uuid::new_v4(), 4, 1, 2.5, reviewed_at)
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 10, 20, 0, 0).unwrap()
    }

    #[test]
    fn test_streak_counts_consecutive_days() {
        let now = fixed_now();
        let records = vec![
            record_at(now),
            record_at(now - Duration::days(1)),
            record_at(now - Duration::days(2)),
            // Gap at day 3
            record_at(now - Duration::days(4)),
        ];

        assert_eq!(streak_days(&records, now), 3);
    }

    #[test]
    fn test_streak_zero_without_review_today() {
        let now = fixed_now();
        let records = vec![
            record_at(now - Duration::days(1)),
            record_at(now - Duration::days(2)),
        ];

        assert_eq!(streak_days(&records, now), 0);
    }

    #[test]
    fn test_streak_multiple_reviews_same_day() {
        let now = fixed_now();
        let records = vec![
            record_at(now),
            record_at(now - Duration::hours(2)),
            record_at(now - Duration::days(1)),
        ];

        assert_eq!(streak_days(&records, now), 2);
    }
}
