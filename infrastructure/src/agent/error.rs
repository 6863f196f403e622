//! Error types for building the HTTP agent adapter

use thiserror::Error;

/// Result type alias for agent adapter construction
pub type Result<T> = std::result::Result<T, AgentClientError>;

/// Errors that prevent the HTTP agent gateway from being created
#[derive(Error, Debug)]
pub enum AgentClientError {
    #[error("Invalid agent endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}
