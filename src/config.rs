use std::env;
use std::time::Duration;

/// Runtime knobs for the mock data layer. Everything has a default, so the
/// crate works with no environment at all.
#[derive(Clone, Debug)]
pub struct Config {
    /// Simulated completion delay applied to every operation, in
    /// milliseconds. The layer mimics a remote backend; set to 0 to make
    /// operations complete as fast as the runtime schedules them.
    pub mock_latency_ms: u64,
    /// Whether a fresh store starts with the demonstration dataset.
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Config {
            mock_latency_ms: env::var("MOCK_LATENCY_MS")
                .unwrap_or_else(|_| "500".to_string())
                .parse()
                .unwrap_or(500),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }

    pub fn mock_latency(&self) -> Duration {
        Duration::from_millis(self.mock_latency_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mock_latency_ms: 500,
            seed_demo_data: true,
        }
    }
}
