//! Submission parameters for use case control.
//!
//! [`SubmissionParams`] groups the static parameters that control
//! [`SubmitTicketUseCase`](crate::use_cases::submit_ticket::SubmitTicketUseCase).
//! Transport settings (endpoint URL, connect timeout) belong to the gateway
//! adapter, not here.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use ticket_desk_domain::SubmissionMode;

/// Default upper bound on waiting for the agent's reply.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionParams {
    /// Remote agent or canned local answers.
    pub mode: SubmissionMode,
    /// Timeout for the whole remote round trip. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for SubmissionParams {
    fn default() -> Self {
        Self {
            mode: SubmissionMode::Remote,
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
        }
    }
}

impl SubmissionParams {
    /// Local mode, no timeout needed.
    pub fn local() -> Self {
        Self {
            mode: SubmissionMode::Local,
            request_timeout: None,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_mode(mut self, mode: SubmissionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the timeout from whole seconds; `None` disables it.
    pub fn with_timeout_seconds(self, seconds: Option<u64>) -> Self {
        self.with_request_timeout(seconds.map(Duration::from_secs))
    }
}
