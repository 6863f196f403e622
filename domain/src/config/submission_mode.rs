//! Submission mode value object

use serde::{Deserialize, Serialize};

/// How a ticket gets its response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionMode {
    /// POST the ticket to the support agent and show its reply
    #[default]
    Remote,
    /// Answer from the canned category table, no network
    Local,
}

impl SubmissionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionMode::Remote => "remote",
            SubmissionMode::Local => "local",
        }
    }
}

impl std::fmt::Display for SubmissionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
