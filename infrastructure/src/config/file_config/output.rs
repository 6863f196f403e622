//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use ticket_desk_domain::OutputFormat;

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// `"text"` or `"json"`; absent means text
    pub format: Option<OutputFormat>,
    /// Color the response box and spinner
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::FileConfig;
    use ticket_desk_domain::OutputFormat;

    #[test]
    fn test_json_format_without_color() {
        let toml_str = r#"
[output]
format = "json"
color = false
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let toml_str = r#"
[output]
format = "full"
"#;
        assert!(toml::from_str::<FileConfig>(toml_str).is_err());
    }
}
