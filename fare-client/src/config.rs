//! Client configuration

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_CALCULATE_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_SAVE_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration for connecting to the fare service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://127.0.0.1:5000")
    pub base_url: String,

    /// Timeout for `/calculate`
    pub calculate_timeout: Duration,

    /// Timeout for `/save` (the server rewrites the ledger)
    pub save_timeout: Duration,
}

impl ClientConfig {
    /// Create a new client configuration with default timeouts
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            calculate_timeout: DEFAULT_CALCULATE_TIMEOUT,
            save_timeout: DEFAULT_SAVE_TIMEOUT,
        }
    }

    /// Set the compute timeout
    pub fn with_calculate_timeout(mut self, timeout: Duration) -> Self {
        self.calculate_timeout = timeout;
        self
    }

    /// Set the save timeout
    pub fn with_save_timeout(mut self, timeout: Duration) -> Self {
        self.save_timeout = timeout;
        self
    }

    /// Read `FARE_SERVER_URL`, `CALCULATE_TIMEOUT_SECS` and `SAVE_TIMEOUT_SECS`
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("FARE_SERVER_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let calculate = secs_from_env("CALCULATE_TIMEOUT_SECS").unwrap_or(DEFAULT_CALCULATE_TIMEOUT);
        let save = secs_from_env("SAVE_TIMEOUT_SECS").unwrap_or(DEFAULT_SAVE_TIMEOUT);

        Self::new(base_url)
            .with_calculate_timeout(calculate)
            .with_save_timeout(save)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn secs_from_env(key: &str) -> Option<Duration> {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}
