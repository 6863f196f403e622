//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for ticket responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Boxed, human-readable response (default)
    #[default]
    Text,
    /// JSON object
    Json,
}
