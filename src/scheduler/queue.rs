//! Building the day's practice queue
//!
//! Partitions scheduling states into overdue / due-today / upcoming
//! buckets. Due dates are compared at calendar-day granularity, so a
//! drill due earlier today still counts as due today rather than
//! overdue.

use chrono::{DateTime, Utc};

use super::models::ReviewItem;

/// The three disjoint scheduling buckets for a set of drills
#[derive(Debug, Clone, Default)]
pub struct PracticeQueue {
    /// Due before today, oldest first. Never-practiced drills lead this
    /// bucket (ordered by item id for determinism).
    pub overdue: Vec<ReviewItem>,
    /// Due on the current calendar day
    pub due_today: Vec<ReviewItem>,
    /// Due after today, soonest first; excluded from the day's queue
    pub upcoming: Vec<ReviewItem>,
}

impl PracticeQueue {
    /// The drills to practice now: overdue first, then due today
    pub fn today(&self) -> impl Iterator<Item = &ReviewItem> + '_ {
        self.overdue.iter().chain(self.due_today.iter())
    }
}

/// Partition `items` into practice buckets relative to `now`.
///
/// Pure and deterministic: the same items and `now` always produce the
/// same buckets in the same order. Every input item lands in exactly
/// one bucket.
pub fn classify(items: &[ReviewItem], now: DateTime<Utc>) -> PracticeQueue {
    let today = now.date_naive();

    let mut never_reviewed = Vec::new();
    let mut queue = PracticeQueue::default();

    for item in items {
        if item.last_reviewed_at.is_none() {
            never_reviewed.push(item.clone());
            continue;
        }

        let due_day = item.due_at.date_naive();
        if due_day < today {
            queue.overdue.push(item.clone());
        } else if due_day == today {
            queue.due_today.push(item.clone());
        } else {
            queue.upcoming.push(item.clone());
        }
    }

    never_reviewed.sort_by(|a, b| a.item_id.cmp(&b.item_id));
    queue
        .overdue
        .sort_by(|a, b| a.due_at.cmp(&b.due_at).then(a.item_id.cmp(&b.item_id)));
    queue
        .due_today
        .sort_by(|a, b| a.due_at.cmp(&b.due_at).then(a.item_id.cmp(&b.item_id)));
    queue
        .upcoming
        .sort_by(|a, b| a.due_at.cmp(&b.due_at).then(a.item_id.cmp(&b.item_id)));

    // New drills take priority over everything already scheduled
    never_reviewed.append(&mut queue.overdue);
    queue.overdue = never_reviewed;

    queue
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use uuid::Uuid;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap()
    }

    fn reviewed_item(due_offset_days: i64, now: DateTime<Utc>) -> ReviewItem {
        let mut item = ReviewItem::new(Uuid::new_v4(), Uuid::new_v4(), now);
        item.interval_days = 1;
        item.repetitions = 1;
        item.last_reviewed_at = Some(now - Duration::days(3));
        item.due_at = now + Duration::days(due_offset_days);
        item
    }

    #[test]
    fn test_partition_is_total_and_disjoint() {
        let now = fixed_now();
        let items = vec![
            reviewed_item(-5, now),
            reviewed_item(-1, now),
            reviewed_item(0, now),
            reviewed_item(3, now),
            ReviewItem::new(Uuid::new_v4(), Uuid::new_v4(), now),
        ];

        let queue = classify(&items, now);

        let total = queue.overdue.len() + queue.due_today.len() + queue.upcoming.len();
        assert_eq!(total, items.len());

        let mut seen: Vec<Uuid> = queue
            .overdue
            .iter()
            .chain(queue.due_today.iter())
            .chain(queue.upcoming.iter())
            .map(|i| i.item_id)
            .collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), items.len());
    }

    #[test]
    fn test_overdue_sorted_oldest_first() {
        let now = fixed_now();
        let recent = reviewed_item(-1, now);
        let old = reviewed_item(-10, now);

        let queue = classify(&[recent.clone(), old.clone()], now);

        assert_eq!(queue.overdue.len(), 2);
        assert_eq!(queue.overdue[0].item_id, old.item_id);
        assert_eq!(queue.overdue[1].item_id, recent.item_id);
    }

    #[test]
    fn test_never_reviewed_leads_overdue() {
        let now = fixed_now();
        let ancient = reviewed_item(-30, now);
        let fresh = ReviewItem::new(Uuid::new_v4(), Uuid::new_v4(), now);

        let queue = classify(&[ancient.clone(), fresh.clone()], now);

        assert_eq!(queue.overdue[0].item_id, fresh.item_id);
        assert_eq!(queue.overdue[1].item_id, ancient.item_id);
    }

    #[test]
    fn test_never_reviewed_ties_broken_by_item_id() {
        let now = fixed_now();
        let mut fresh: Vec<ReviewItem> = (0..4)
            .map(|_| ReviewItem::new(Uuid::new_v4(), Uuid::new_v4(), now))
            .collect();

        let queue = classify(&fresh, now);

        fresh.sort_by(|a, b| a.item_id.cmp(&b.item_id));
        let got: Vec<Uuid> = queue.overdue.iter().map(|i| i.item_id).collect();
        let want: Vec<Uuid> = fresh.iter().map(|i| i.item_id).collect();
        assert_eq!(got, want);
    }

    #[test]
    fn test_due_earlier_today_is_due_today() {
        let now = fixed_now();
        let mut item = reviewed_item(0, now);
        // Due this morning, a few hours before `now`
        item.due_at = now - Duration::hours(3);

        let queue = classify(&[item], now);

        assert!(queue.overdue.is_empty());
        assert_eq!(queue.due_today.len(), 1);
    }

    #[test]
    fn test_upcoming_excluded_from_today() {
        let now = fixed_now();
        let soon = reviewed_item(2, now);
        let later = reviewed_item(9, now);
        let due = reviewed_item(0, now);

        let queue = classify(&[later.clone(), soon.clone(), due], now);

        assert_eq!(queue.upcoming.len(), 2);
        assert_eq!(queue.upcoming[0].item_id, soon.item_id);
        assert_eq!(queue.upcoming[1].item_id, later.item_id);

        let today: Vec<Uuid> = queue.today().map(|i| i.item_id).collect();
        assert!(!today.contains(&soon.item_id));
        assert!(!today.contains(&later.item_id));
    }

    #[test]
    fn test_classify_is_idempotent() {
        let now = fixed_now();
        let items = vec![
            reviewed_item(-2, now),
            reviewed_item(0, now),
            reviewed_item(4, now),
            ReviewItem::new(Uuid::new_v4(), Uuid::new_v4(), now),
        ];

        let first = classify(&items, now);
        let second = classify(&items, now);

        let ids = |bucket: &[ReviewItem]| bucket.iter().map(|i| i.item_id).collect::<Vec<_>>();
        assert_eq!(ids(&first.overdue), ids(&second.overdue));
        assert_eq!(ids(&first.due_today), ids(&second.due_today));
        assert_eq!(ids(&first.upcoming), ids(&second.upcoming));
    }
}
