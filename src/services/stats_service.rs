use std::time::Duration;

use chrono::Utc;

use crate::error::AppResult;
use crate::models::StatsSummary;
use crate::stats;
use crate::store::Store;

/// Dashboard counters. Open to any caller; everything it reports is
/// derivable from the public listing anyway.
pub struct StatsService {
    store: Store,
    latency: Duration,
}

impl StatsService {
    pub fn new(store: Store, latency: Duration) -> Self {
        Self { store, latency }
    }

    async fn simulate_latency(&self) {
        tokio::time::sleep(self.latency).await;
    }

    /// Recomputes all counters from one consistent snapshot of both
    /// collections.
    pub async fn get_stats(&self) -> AppResult<StatsSummary> {
        self.simulate_latency().await;
        let (items, users) = self.store.snapshot()?;
        Ok(stats::aggregate(&items, &users, Utc::now()))
    }
}
