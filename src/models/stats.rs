use serde::{Deserialize, Serialize};

/// Derived counters for the dashboard. Recomputed from the store on every
/// request; nothing here is cached or incrementally maintained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_items: usize,
    pub lost_items: usize,
    pub found_items: usize,
    pub active_items: usize,
    pub resolved_items: usize,
    pub total_users: usize,
    /// Items reported within the trailing 7-day window.
    pub recent_items: usize,
    /// Resolved share of all items, rounded to a whole percent. 0 when the
    /// store holds no items.
    pub resolution_rate: u32,
}
