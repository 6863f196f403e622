//! Agent endpoint configuration from TOML (`[agent]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default agent endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/ticket";

/// Raw agent configuration from TOML
///
/// ```toml
/// [agent]
/// endpoint = "http://0.0.0.0:8000/ticket"
/// timeout_secs = 30          # 0 disables the request timeout
/// connect_timeout_secs = 5   # 0 disables the connect timeout
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentConfig {
    /// URL tickets are POSTed to
    pub endpoint: String,
    /// Upper bound on the whole round trip, in seconds
    pub timeout_secs: u64,
    /// Upper bound on establishing the connection, in seconds
    pub connect_timeout_secs: u64,
}

impl Default for FileAgentConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 5,
        }
    }
}

impl FileAgentConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        non_zero_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        non_zero_secs(self.connect_timeout_secs)
    }
}

fn non_zero_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}
