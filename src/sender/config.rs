//! Sender settings: endpoint plus connect and close timeouts.

use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "ws://127.0.0.1:10044";
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_CLOSE_TIMEOUT: Duration = Duration::from_secs(2);

/// Where and how to deliver a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderConfig {
    pub endpoint: String,
    /// Bounds TCP connect plus the opening handshake.
    pub connect_timeout: Duration,
    /// How long to wait for the listener to answer our close frame.
    pub close_timeout: Duration,
}

impl SenderConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn with_close_timeout(mut self, close_timeout: Duration) -> Self {
        self.close_timeout = close_timeout;
        self
    }
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            close_timeout: DEFAULT_CLOSE_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SenderConfig::default();
        assert_eq!(config.endpoint, "ws://127.0.0.1:10044");
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_builder_chain() {
        let config = SenderConfig::default()
            .with_endpoint("ws://localhost:9000")
            .with_connect_timeout(Duration::from_millis(250))
            .with_close_timeout(Duration::from_millis(100));
        assert_eq!(config.endpoint, "ws://localhost:9000");
        assert_eq!(config.connect_timeout, Duration::from_millis(250));
        assert_eq!(config.close_timeout, Duration::from_millis(100));
    }
}
