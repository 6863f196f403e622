//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod agent;
mod form;
mod logging;
mod output;
mod submission;

pub use agent::{DEFAULT_ENDPOINT, FileAgentConfig};
pub use form::FileFormConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use submission::{DEFAULT_TEAM, FileSubmissionConfig};

use serde::{Deserialize, Serialize};
use ticket_desk_domain::{ConfigIssue, ConfigIssueCode, Severity, SubmissionMode};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Support agent endpoint and timeouts
    pub agent: FileAgentConfig,
    /// Remote or local mode
    pub submission: FileSubmissionConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Interactive form settings
    pub form: FileFormConfig,
    /// Structured submission log
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. The agent endpoint is an absolute http(s) URL
    /// 2. Zero timeouts (which disable the bound)
    /// 3. An `[agent]` section that has no effect in local mode
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Endpoint URL
        match reqwest::Url::parse(&self.agent.endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidEndpoint {
                    value: self.agent.endpoint.clone(),
                },
                message: format!(
                    "agent.endpoint: unsupported scheme '{}', expected http or https",
                    url.scheme()
                ),
            }),
            Err(e) => issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidEndpoint {
                    value: self.agent.endpoint.clone(),
                },
                message: format!("agent.endpoint: '{}' is not a URL ({})", self.agent.endpoint, e),
            }),
        }

        // 2. Zero timeouts
        for (field, value) in [
            ("agent.timeout_secs", self.agent.timeout_secs),
            ("agent.connect_timeout_secs", self.agent.connect_timeout_secs),
        ] {
            if value == 0 {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::ZeroTimeout {
                        field: field.to_string(),
                    },
                    message: format!("{}: 0 disables the timeout", field),
                });
            }
        }

        // 3. Dead [agent] section in local mode
        if self.submission.mode == SubmissionMode::Local && self.agent != FileAgentConfig::default()
        {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::UnusedSection {
                    section: "agent".to_string(),
                },
                message: "[agent] section is configured but submission.mode is \"local\""
                    .to_string(),
            });
        }

        issues
    }
}
