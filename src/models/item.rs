use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound on attached image references per item.
pub const MAX_IMAGES: usize = 5;

/// Whether the report concerns something the owner lost or something
/// found on campus. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Lost,
    Found,
}

/// Report lifecycle state. The only transition is Active -> Resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Active,
    Resolved,
}

/// A reported lost or found object.
///
/// Owner contact fields are denormalized onto the record so a listing can
/// be rendered without a second lookup; they are a snapshot taken at
/// creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub location: String,
    pub date_reported: DateTime<Utc>,
    pub status: ItemStatus,
    pub owner_id: String,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_phone: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub reward: Option<i64>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Caller-supplied fields for a new report. Id, timestamp and status are
/// assigned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub location: String,
    pub owner_id: String,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_phone: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub reward: Option<i64>,
}

/// Shallow partial update. Absent fields keep their stored value. The item
/// type is deliberately not here: it is immutable after creation, and owner
/// contact follows the owner record rather than being edited per item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub status: Option<ItemStatus>,
    pub images: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub reward: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> Item {
        Item {
            id: "11111111-2222-3333-4444-555555555555".to_string(),
            title: "Gold Watch".to_string(),
            description: "Found a gold-colored watch in the cafeteria.".to_string(),
            category: "Accessories".to_string(),
            item_type: ItemType::Found,
            location: "Main Cafeteria".to_string(),
            date_reported: "2024-01-13T12:15:00Z".parse().unwrap(),
            status: ItemStatus::Active,
            owner_id: "u1".to_string(),
            owner_name: "Admin User".to_string(),
            owner_email: "admin@kiit.ac.in".to_string(),
            owner_phone: "+91 9876543210".to_string(),
            images: vec![],
            tags: vec!["watch".to_string(), "gold".to_string()],
            reward: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_item_json_shape() {
        let json = serde_json::to_value(sample_item()).unwrap();
        assert_eq!(json["type"], "found");
        assert_eq!(json["status"], "active");
        assert_eq!(json["dateReported"], "2024-01-13T12:15:00Z");
        assert_eq!(json["ownerId"], "u1");
        assert_eq!(json["reward"], serde_json::Value::Null);
    }

    #[test]
    fn test_item_round_trip() {
        let item = sample_item();
        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(item, back);
    }

    #[test]
    fn test_draft_defaults_optional_collections() {
        let draft: ItemDraft = serde_json::from_str(
            r#"{
                "title": "Red Pen",
                "description": "A red pen",
                "category": "Other",
                "type": "lost",
                "location": "Library",
                "ownerId": "u1",
                "ownerName": "John Doe",
                "ownerEmail": "student@kiit.ac.in",
                "ownerPhone": "+91 9876543211"
            }"#,
        )
        .unwrap();
        assert_eq!(draft.item_type, ItemType::Lost);
        assert!(draft.images.is_empty());
        assert!(draft.tags.is_empty());
        assert_eq!(draft.reward, None);
    }
}
