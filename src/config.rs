//! Configuration for the Factbus client

use std::time::Duration;

/// Configuration for connecting to a Factbus broker
#[derive(Debug, Clone)]
pub struct FactbusConfig {
    /// Broker base URL (e.g., "https://factbus.example.com")
    pub base_url: String,

    /// Delay before re-polling after the broker reports no content.
    /// Doubles on every consecutive empty poll, up to `max_poll_delay`.
    /// Zero means retry immediately.
    pub poll_delay: Duration,

    /// Upper bound for the empty-poll delay
    pub max_poll_delay: Duration,

    /// Timeout for a single HTTP request
    pub request_timeout: Duration,
}

impl FactbusConfig {
    /// Create a new configuration with the given broker base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            poll_delay: Duration::from_millis(100),
            max_poll_delay: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Set the empty-poll delay range
    pub fn poll_delay(mut self, initial: Duration, max: Duration) -> Self {
        self.poll_delay = initial;
        self.max_poll_delay = max;
        self
    }

    /// Re-poll immediately when the broker reports no content.
    /// Hammers the broker with requests on an idle topic; prefer a
    /// non-zero delay outside of tests.
    pub fn immediate_poll(mut self) -> Self {
        self.poll_delay = Duration::ZERO;
        self.max_poll_delay = Duration::ZERO;
        self
    }

    /// Set the per-request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
