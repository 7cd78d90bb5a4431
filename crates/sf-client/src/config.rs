//! Client configuration.

use std::time::Duration;

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Whole-request timeout, body included. Describe calls on large
    /// objects are the slowest thing the explorer does.
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Ask for gzip/deflate responses.
    pub compression: bool,
    pub user_agent: String,
    /// Log every request and response status at debug level.
    pub trace_requests: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            compression: true,
            user_agent: crate::USER_AGENT.to_string(),
            trace_requests: true,
        }
    }
}
