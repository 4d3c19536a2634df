//! Demo fixtures for local runs and tests.
//!
//! Four item reports and two accounts, enough to light up every dashboard
//! counter: two found/active, one lost/active, one lost/resolved.

use chrono::{DateTime, Utc};

use crate::models::{Item, ItemStatus, ItemType, Role, User, UserStatus};

fn ts(rfc3339: &str) -> DateTime<Utc> {
    rfc3339.parse().expect("valid fixture timestamp")
}

pub fn demo_items() -> Vec<Item> {
    vec![
        Item {
            id: "1".to_string(),
            title: "iPhone 13 Pro".to_string(),
            description: "Black iPhone 13 Pro found near the library entrance. Blue case with the initials \"JS\" on the back.".to_string(),
            category: "Electronics".to_string(),
            item_type: ItemType::Found,
            location: "Central Library".to_string(),
            date_reported: ts("2024-01-15T10:30:00Z"),
            status: ItemStatus::Active,
            owner_id: "2".to_string(),
            owner_name: "John Doe".to_string(),
            owner_email: "student@kiit.ac.in".to_string(),
            owner_phone: "+91 9876543211".to_string(),
            images: vec!["/images/demo/iphone-13-pro.jpg".to_string()],
            tags: vec!["phone".to_string(), "apple".to_string(), "black".to_string()],
            reward: Some(500),
            updated_at: None,
        },
        Item {
            id: "2".to_string(),
            title: "Blue Backpack".to_string(),
            description: "Lost my blue Adidas backpack. It had course documents and a laptop charger inside.".to_string(),
            category: "Bags".to_string(),
            item_type: ItemType::Lost,
            location: "Academic Block 2".to_string(),
            date_reported: ts("2024-01-14T14:20:00Z"),
            status: ItemStatus::Active,
            owner_id: "2".to_string(),
            owner_name: "John Doe".to_string(),
            owner_email: "student@kiit.ac.in".to_string(),
            owner_phone: "+91 9876543211".to_string(),
            images: vec!["/images/demo/blue-backpack.jpg".to_string()],
            tags: vec!["backpack".to_string(), "blue".to_string(), "adidas".to_string()],
            reward: Some(200),
            updated_at: None,
        },
        Item {
            id: "3".to_string(),
            title: "Gold Watch".to_string(),
            description: "Gold-colored wristwatch found on a cafeteria table. Looks valuable.".to_string(),
            category: "Accessories".to_string(),
            item_type: ItemType::Found,
            location: "Main Cafeteria".to_string(),
            date_reported: ts("2024-01-13T12:15:00Z"),
            status: ItemStatus::Active,
            owner_id: "1".to_string(),
            owner_name: "Admin User".to_string(),
            owner_email: "admin@kiit.ac.in".to_string(),
            owner_phone: "+91 9876543210".to_string(),
            images: vec!["/images/demo/gold-watch.jpg".to_string()],
            tags: vec!["watch".to_string(), "gold".to_string(), "expensive".to_string()],
            reward: None,
            updated_at: None,
        },
        Item {
            id: "4".to_string(),
            title: "Red Water Bottle".to_string(),
            description: "Lost a red stainless steel water bottle covered in university stickers.".to_string(),
            category: "Personal Items".to_string(),
            item_type: ItemType::Lost,
            location: "Sports Complex".to_string(),
            date_reported: ts("2024-01-12T16:45:00Z"),
            status: ItemStatus::Resolved,
            owner_id: "2".to_string(),
            owner_name: "John Doe".to_string(),
            owner_email: "student@kiit.ac.in".to_string(),
            owner_phone: "+91 9876543211".to_string(),
            images: vec!["/images/demo/red-water-bottle.jpg".to_string()],
            tags: vec!["bottle".to_string(), "red".to_string(), "stickers".to_string()],
            reward: None,
            updated_at: None,
        },
    ]
}

pub fn demo_users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            email: "admin@kiit.ac.in".to_string(),
            name: "Admin User".to_string(),
            role: Role::Admin,
            student_id: "ADMIN001".to_string(),
            phone: "+91 9876543210".to_string(),
            joined_date: ts("2024-01-01T00:00:00Z"),
            status: UserStatus::Active,
        },
        User {
            id: "2".to_string(),
            email: "student@kiit.ac.in".to_string(),
            name: "John Doe".to_string(),
            role: Role::Student,
            student_id: "KIIT2024001".to_string(),
            phone: "+91 9876543211".to_string(),
            joined_date: ts("2024-01-10T00:00:00Z"),
            status: UserStatus::Active,
        },
    ]
}
