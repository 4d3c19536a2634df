//! Dashboard counters derived from a single consistent snapshot.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Item, ItemStatus, ItemType, StatsSummary, User};

/// Trailing window length for the "recent items" counter.
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Computes every counter in one pass over the given snapshot. `now` is
/// passed in rather than read from the clock so the window edges stay
/// testable.
pub fn aggregate(items: &[Item], users: &[User], now: DateTime<Utc>) -> StatsSummary {
    let window_start = now - Duration::days(RECENT_WINDOW_DAYS);

    let mut summary = StatsSummary {
        total_items: items.len(),
        total_users: users.len(),
        ..StatsSummary::default()
    };

    for item in items {
        match item.item_type {
            ItemType::Lost => summary.lost_items += 1,
            ItemType::Found => summary.found_items += 1,
        }
        match item.status {
            ItemStatus::Active => summary.active_items += 1,
            ItemStatus::Resolved => summary.resolved_items += 1,
        }
        // Both window edges count; future-dated records do not.
        if item.date_reported >= window_start && item.date_reported <= now {
            summary.recent_items += 1;
        }
    }

    if summary.total_items > 0 {
        let share = summary.resolved_items as f64 / summary.total_items as f64;
        summary.resolution_rate = (share * 100.0).round() as u32;
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(item_type: ItemType, status: ItemStatus, date: DateTime<Utc>) -> Item {
        Item {
            id: "i1".to_string(),
            title: "Keys".to_string(),
            description: "Set of keys".to_string(),
            category: "Keys".to_string(),
            item_type,
            location: "Bus Stop".to_string(),
            date_reported: date,
            status,
            owner_id: "u2".to_string(),
            owner_name: "John Doe".to_string(),
            owner_email: "student@kiit.ac.in".to_string(),
            owner_phone: "+91 9876543211".to_string(),
            images: vec![],
            tags: vec![],
            reward: None,
            updated_at: None,
        }
    }

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            email: format!("{id}@kiit.ac.in"),
            name: "Someone".to_string(),
            role: crate::models::Role::Student,
            student_id: "KIIT2024001".to_string(),
            phone: "+91 9876543211".to_string(),
            joined_date: "2024-01-10T00:00:00Z".parse().unwrap(),
            status: crate::models::UserStatus::Active,
        }
    }

    #[test]
    fn test_empty_store_is_all_zero() {
        let summary = aggregate(&[], &[], Utc::now());
        assert_eq!(summary, StatsSummary::default());
        assert_eq!(summary.resolution_rate, 0);
    }

    #[test]
    fn test_counts_by_type_and_status() {
        let now = Utc::now();
        let items = vec![
            item(ItemType::Found, ItemStatus::Active, now),
            item(ItemType::Lost, ItemStatus::Active, now),
            item(ItemType::Found, ItemStatus::Active, now),
            item(ItemType::Lost, ItemStatus::Resolved, now),
        ];
        let users = vec![user("u1"), user("u2")];

        let summary = aggregate(&items, &users, now);
        assert_eq!(summary.total_items, 4);
        assert_eq!(summary.lost_items, 2);
        assert_eq!(summary.found_items, 2);
        assert_eq!(summary.active_items, 3);
        assert_eq!(summary.resolved_items, 1);
        assert_eq!(summary.total_users, 2);
        assert_eq!(summary.resolution_rate, 25);
    }

    #[test]
    fn test_recent_window_edges() {
        let now: DateTime<Utc> = "2024-01-20T12:00:00Z".parse().unwrap();
        let items = vec![
            // Exactly on the lower edge: counts.
            item(
                ItemType::Lost,
                ItemStatus::Active,
                now - Duration::days(RECENT_WINDOW_DAYS),
            ),
            // One second older than the window: does not count.
            item(
                ItemType::Lost,
                ItemStatus::Active,
                now - Duration::days(RECENT_WINDOW_DAYS) - Duration::seconds(1),
            ),
            // Exactly now: counts.
            item(ItemType::Lost, ItemStatus::Active, now),
            // Future-dated: does not count.
            item(ItemType::Lost, ItemStatus::Active, now + Duration::seconds(1)),
        ];

        let summary = aggregate(&items, &[], now);
        assert_eq!(summary.recent_items, 2);
    }

    #[test]
    fn test_resolution_rate_rounds_to_nearest_percent() {
        let now = Utc::now();
        // 1 of 3 resolved -> 33.33% -> 33.
        let items = vec![
            item(ItemType::Lost, ItemStatus::Resolved, now),
            item(ItemType::Lost, ItemStatus::Active, now),
            item(ItemType::Lost, ItemStatus::Active, now),
        ];
        assert_eq!(aggregate(&items, &[], now).resolution_rate, 33);

        // 2 of 3 resolved -> 66.67% -> 67.
        let items = vec![
            item(ItemType::Lost, ItemStatus::Resolved, now),
            item(ItemType::Lost, ItemStatus::Resolved, now),
            item(ItemType::Lost, ItemStatus::Active, now),
        ];
        assert_eq!(aggregate(&items, &[], now).resolution_rate, 67);
    }
}
