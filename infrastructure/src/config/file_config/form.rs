//! Ticket form configuration from TOML (`[form]` section)

use serde::{Deserialize, Serialize};

/// Raw ticket form configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFormConfig {
    /// Show the "Sending..." spinner
    pub show_progress: bool,
    /// Path to the description history file
    pub history_file: Option<String>,
}

impl Default for FileFormConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}
