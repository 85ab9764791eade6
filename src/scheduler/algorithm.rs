//! SM-2 Spaced Repetition Algorithm
//!
//! Implementation of the SuperMemo 2 algorithm for calculating
//! optimal practice intervals based on recall quality.
//!
//! Grades (0-5):
//! - 0: Complete blackout, could not play the pattern at all
//! - 1: Wrong, but recognized it once shown again
//! - 2: Wrong, but it felt close
//! - 3: Played it, with serious difficulty
//! - 4: Played it after some hesitation
//! - 5: Perfect, effortless

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use super::models::ReviewItem;

/// Ease factor assigned to a drill never practiced before
pub const INITIAL_EASE_FACTOR: f32 = 2.5;

/// Minimum ease factor allowed
pub const MIN_EASE_FACTOR: f32 = 1.3;

/// Grades at or above this count as a successful review
pub const PASS_THRESHOLD: i32 = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("invalid grade {0}: expected an integer from 0 to 5")]
    InvalidGrade(i32),
}

/// Apply one review outcome to a drill's scheduling state.
///
/// Pure function: takes the current state, the practitioner's grade
/// (0-5) and the review timestamp, and returns the next state. The
/// caller owns persistence. Out-of-range grades are rejected, never
/// clamped.
///
/// SM-2 transition:
/// - grade < 3: repetitions reset to 0 and the drill comes back tomorrow
/// - grade >= 3: interval progresses 1 day, then 6 days, then grows by
///   the ease factor (rounded to the nearest day)
/// - the ease factor is recomputed for every grade and floored at 1.3
pub fn review(
    item: &ReviewItem,
    grade: i32,
    now: DateTime<Utc>,
) -> Result<ReviewItem, SchedulerError> {
    if !(0..=5).contains(&grade) {
        return Err(SchedulerError::InvalidGrade(grade));
    }

    let mut next = item.clone();

    if grade >= PASS_THRESHOLD {
        next.interval_days = match item.repetitions {
            0 => 1,
            1 => 6,
            _ => (item.interval_days as f32 * item.ease_factor).round() as i32,
        };
        next.repetitions = item.repetitions + 1;
    } else {
        // Failed: restart the streak, re-test tomorrow
        next.repetitions = 0;
        next.interval_days = 1;
    }

    // EF' = EF + (0.1 - (5-q) * (0.08 + (5-q) * 0.02)), floored at 1.3
    let miss = (5 - grade) as f32;
    next.ease_factor = (item.ease_factor + (0.1 - miss * (0.08 + miss * 0.02)))
        .max(MIN_EASE_FACTOR);

    next.last_reviewed_at = Some(now);
    next.due_at = now + Duration::days(next.interval_days as i64);

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap()
    }

    fn new_item() -> ReviewItem {
        ReviewItem::new(Uuid::new_v4(), Uuid::new_v4(), fixed_now())
    }

    #[test]
    fn test_first_review_pass() {
        let item = new_item();
        let next = review(&item, 4, fixed_now()).unwrap();

        assert_eq!(next.repetitions, 1);
        assert_eq!(next.interval_days, 1);
        // (5-4)=1: 0.1 - 1*(0.08 + 0.02) = 0, ease unchanged
        assert!((next.ease_factor - 2.5).abs() < 1e-6);
        assert_eq!(next.due_at, fixed_now() + Duration::days(1));
        assert_eq!(next.last_reviewed_at, Some(fixed_now()));
    }

    #[test]
    fn test_first_review_hard_pass_lowers_ease() {
        let item = new_item();
        let next = review(&item, 3, fixed_now()).unwrap();

        assert_eq!(next.repetitions, 1);
        assert_eq!(next.interval_days, 1);
        // (5-3)=2: 0.1 - 2*(0.08 + 2*0.02) = -0.14
        assert!((next.ease_factor - 2.36).abs() < 1e-4);
    }

    #[test]
    fn test_second_review_pass() {
        let mut item = new_item();
        item.repetitions = 1;
        item.interval_days = 1;

        let next = review(&item, 5, fixed_now()).unwrap();

        assert_eq!(next.repetitions, 2);
        assert_eq!(next.interval_days, 6);
        // Perfect recall: ease grows by 0.1
        assert!((next.ease_factor - 2.6).abs() < 1e-6);
    }

    #[test]
    fn test_subsequent_review_multiplies_interval() {
        let mut item = new_item();
        item.repetitions = 5;
        item.interval_days = 10;
        item.ease_factor = 2.5;

        let next = review(&item, 4, fixed_now()).unwrap();

        // 10 * 2.5 = 25
        assert_eq!(next.interval_days, 25);
        assert_eq!(next.repetitions, 6);
        assert_eq!(next.due_at, fixed_now() + Duration::days(25));
    }

    #[test]
    fn test_failure_resets_streak() {
        let mut item = new_item();
        item.repetitions = 6;
        item.interval_days = 30;
        item.ease_factor = 2.6;

        let next = review(&item, 2, fixed_now()).unwrap();

        assert_eq!(next.repetitions, 0);
        assert_eq!(next.interval_days, 1);
        // Ease is still recomputed: (5-2)=3: 0.1 - 3*(0.08 + 0.06) = -0.32
        assert!((next.ease_factor - 2.28).abs() < 1e-4);
        assert_eq!(next.due_at, fixed_now() + Duration::days(1));
    }

    #[test]
    fn test_ease_factor_floor() {
        let mut item = new_item();
        item.ease_factor = 1.35;
        item.repetitions = 4;
        item.interval_days = 8;

        let next = review(&item, 0, fixed_now()).unwrap();
        assert!(next.ease_factor >= MIN_EASE_FACTOR);

        let again = review(&next, 0, fixed_now()).unwrap();
        assert!((again.ease_factor - MIN_EASE_FACTOR).abs() < 1e-6);
    }

    #[test]
    fn test_interval_grows_on_success_streak() {
        let mut item = new_item();
        item.repetitions = 2;
        item.interval_days = 6;

        for grade in 3..=5 {
            let next = review(&item, grade, fixed_now()).unwrap();
            assert!(next.interval_days > item.interval_days);
        }
    }

    #[test]
    fn test_invalid_grade_rejected() {
        let item = new_item();

        assert_eq!(
            review(&item, 7, fixed_now()).unwrap_err(),
            SchedulerError::InvalidGrade(7)
        );
        assert_eq!(
            review(&item, -1, fixed_now()).unwrap_err(),
            SchedulerError::InvalidGrade(-1)
        );
    }

    #[test]
    fn test_review_is_pure() {
        let item = new_item();
        let before = item.clone();

        let a = review(&item, 4, fixed_now()).unwrap();
        let b = review(&item, 4, fixed_now()).unwrap();

        assert_eq!(item.interval_days, before.interval_days);
        assert_eq!(a.interval_days, b.interval_days);
        assert_eq!(a.due_at, b.due_at);
    }
}
