//! Submission configuration from TOML (`[submission]` section)

use serde::{Deserialize, Serialize};
use ticket_desk_domain::SubmissionMode;

/// Default team name written into batch answer files
pub const DEFAULT_TEAM: &str = "ticket-desk";

/// Raw submission configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSubmissionConfig {
    /// "remote" (agent) or "local" (canned answers)
    pub mode: SubmissionMode,
    /// Team name for batch output
    pub team: String,
}

impl Default for FileSubmissionConfig {
    fn default() -> Self {
        Self {
            mode: SubmissionMode::Remote,
            team: DEFAULT_TEAM.to_string(),
        }
    }
}
