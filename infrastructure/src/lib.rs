//! Infrastructure layer for ticket-desk
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod agent;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use agent::{
    error::{AgentClientError, Result},
    gateway::HttpAgentGateway,
};
pub use config::{
    ConfigLoader, DEFAULT_ENDPOINT, FileAgentConfig, FileConfig, FileFormConfig,
    FileLoggingConfig, FileOutputConfig, FileSubmissionConfig,
};
pub use logging::JsonlSubmissionLogger;
