//! Configuration file loading for ticket-desk
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TICKET_DESK_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./ticket-desk.toml` or `./.ticket-desk.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/ticket-desk/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_ENDPOINT, DEFAULT_TEAM, FileAgentConfig, FileConfig, FileFormConfig,
    FileLoggingConfig, FileOutputConfig, FileSubmissionConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
