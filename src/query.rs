//! Linear filter/sort engine for item listings.
//!
//! A record matches when every provided filter field matches; absent fields
//! (and blank strings, which the portal's search form submits freely) impose
//! no constraint. Results are fresh clones ordered newest-first, so callers
//! can never reach into the store's own sequence.

use serde::{Deserialize, Serialize};

use crate::models::{Item, ItemStatus, ItemType};

/// Optional-field query used to narrow the item listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFilter {
    /// Case-insensitive needle matched against title, description and tags.
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<ItemType>,
    /// Exact category match.
    pub category: Option<String>,
    /// Case-insensitive substring match against the record's location.
    pub location: Option<String>,
    pub status: Option<ItemStatus>,
    /// Exact match against the reporting user's id.
    pub owner_id: Option<String>,
}

impl ItemFilter {
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(t) = self.item_type {
            if item.item_type != t {
                return false;
            }
        }

        if let Some(s) = self.status {
            if item.status != s {
                return false;
            }
        }

        if let Some(category) = provided(&self.category) {
            if item.category != category {
                return false;
            }
        }

        if let Some(location) = provided(&self.location) {
            if !contains_ignore_case(&item.location, location) {
                return false;
            }
        }

        if let Some(owner_id) = provided(&self.owner_id) {
            if item.owner_id != owner_id {
                return false;
            }
        }

        if let Some(needle) = provided(&self.search) {
            let hit = contains_ignore_case(&item.title, needle)
                || contains_ignore_case(&item.description, needle)
                || item.tags.iter().any(|tag| contains_ignore_case(tag, needle));
            if !hit {
                return false;
            }
        }

        true
    }
}

/// Filters `items` and returns matching clones sorted by report timestamp,
/// newest first. The sort is stable, so records sharing a timestamp keep
/// their insertion order.
pub fn run(items: &[Item], filter: &ItemFilter) -> Vec<Item> {
    let mut matched: Vec<Item> = items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect();
    matched.sort_by(|a, b| b.date_reported.cmp(&a.date_reported));
    matched
}

/// Blank filter strings behave like absent fields.
fn provided(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
