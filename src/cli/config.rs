// ABOUTME: Configuration management for goforge application
// ABOUTME: Handles loading defaults from a YAML file and overriding them from environment variables

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scaffold::DEFAULT_KIND;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_template")]
    pub default_template: String,

    #[serde(default)]
    pub default_go_version: Option<String>,

    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

fn default_template() -> String {
    DEFAULT_KIND.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_template: default_template(),
            default_go_version: None,
            output_dir: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::find_config_file(),
        };

        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
            Self::from_yaml(&contents)
                .with_context(|| format!("Invalid config file {}", config_path.display()))?
        } else {
            Config::default()
        };

        config.merge_env();
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> PathBuf {
        let possible_paths = [
            PathBuf::from("goforge.yaml"),
            PathBuf::from("goforge.yml"),
            PathBuf::from(".goforge.yaml"),
            PathBuf::from(".goforge.yml"),
        ];

        // Check current directory
        if let Some(path) = possible_paths.iter().find(|p| p.exists()) {
            return path.clone();
        }

        // Check home directory
        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".goforge").join("config.yaml");
            if home_config.exists() {
                return home_config;
            }
        }

        // Return default path (may not exist)
        PathBuf::from("goforge.yaml")
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("GOFORGE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("GOFORGE_LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Some(template) = lookup("GOFORGE_DEFAULT_TEMPLATE") {
            self.default_template = template;
        }
        if let Some(version) = lookup("GOFORGE_GO_VERSION") {
            self.default_go_version = Some(version);
        }
        if let Some(dir) = lookup("GOFORGE_OUTPUT_DIR") {
            self.output_dir = Some(PathBuf::from(dir));
        }
    }
}
