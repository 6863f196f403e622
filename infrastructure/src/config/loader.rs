//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["ticket-desk.toml", ".ticket-desk.toml"];

/// Prefix of environment overrides, e.g. `TICKET_DESK_AGENT__ENDPOINT`
pub const ENV_PREFIX: &str = "TICKET_DESK_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `TICKET_DESK_<SECTION>__<KEY>`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./ticket-desk.toml` or `./.ticket-desk.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/ticket-desk/config.toml`
    /// 5. Default values
    ///
    /// An explicit path that does not exist is an error: silently running on
    /// defaults would send tickets to the wrong agent.
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        if let Some(path) = config_path
            && !path.is_file()
        {
            return Err(Box::new(figment::Error::from(format!(
                "config file {} not found",
                path.display()
            ))));
        }

        let mut figment = Self::base_figment(config_path);
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        figment.extract().map_err(Box::new)
    }

    /// Files only, no environment overrides
    fn base_figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/ticket-desk/config.toml if set,
    /// otherwise falls back to ~/.config/ticket-desk/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("ticket-desk").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config sources being used (for `--show-config`)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");
        for line in Self::config_sources(config_path) {
            println!("  {}", line);
        }
    }

    /// One line per source, highest priority first
    fn config_sources(config_path: Option<&PathBuf>) -> Vec<String> {
        let mut lines = Vec::new();

        let mut overrides: Vec<String> = std::env::vars()
            .map(|(key, _)| key)
            .filter(|key| key.starts_with(ENV_PREFIX))
            .collect();
        overrides.sort();
        if overrides.is_empty() {
            lines.push(format!("[     ] Env:      {}<SECTION>__<KEY>", ENV_PREFIX));
        } else {
            lines.push(format!("[FOUND] Env:      {}", overrides.join(", ")));
        }

        if let Some(path) = config_path {
            let mark = if path.is_file() { "FOUND" } else { "MISS " };
            lines.push(format!("[{}] Explicit: {}", mark, path.display()));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("[FOUND] Project:  {}", path.display())),
            None => lines.push(
                "[     ] Project:  ./ticket-desk.toml or ./.ticket-desk.toml".to_string(),
            ),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("[{}] Global:   {}", mark, path.display()));
        }

        lines.push("[     ] Default:  built-in defaults".to_string());
        lines
    }
}
