//! Configuration management.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Overrides the directory holding `config.toml`
pub const CONFIG_DIR_ENV: &str = "CYBERSHIELD_CONFIG_DIR";
/// Overrides the directory holding `session.json`
pub const DATA_DIR_ENV: &str = "CYBERSHIELD_DATA_DIR";

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// Show helpful tips after commands.
    #[serde(default = "default_true")]
    pub show_tips: bool,

    /// Always show explanations (as if --explain was passed).
    #[serde(default)]
    pub explain_by_default: bool,

    /// Only trust exact trusted domains and their subdomains.
    #[serde(default)]
    pub strict_trust: bool,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: None,
            show_tips: true,
            explain_by_default: false,
            strict_trust: false,
            log_level: default_log_level(),
        }
    }
}

const fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    String::from("warn")
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "cybershield", "cybershield")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir).join("config.toml"));
        }
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    /// Get the session file path.
    pub fn session_path() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            return Ok(PathBuf::from(dir).join("session.json"));
        }
        Ok(project_dirs()?.data_dir().join("session.json"))
    }

    /// Load configuration from file.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Set a key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output_format" | "output" => self.output_format = Some(value.parse()?),
            "show_tips" => self.show_tips = value.parse()?,
            "explain_by_default" | "explain" => self.explain_by_default = value.parse()?,
            "strict_trust" | "strict" => self.strict_trust = value.parse()?,
            "log_level" => self.log_level = value.to_string(),
            _ => anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 output_format      - Default output format (pretty/json/csv/yaml)\n  \
                 show_tips          - Show helpful tips (true/false)\n  \
                 explain_by_default - Always explain commands (true/false)\n  \
                 strict_trust       - Exact trusted-domain matching (true/false)\n  \
                 log_level          - Log filter when RUST_LOG is unset (e.g. warn, debug)",
                key
            ),
        }
        Ok(())
    }
}
