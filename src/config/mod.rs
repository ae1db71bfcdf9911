use crate::boxscore::ReportStyle;
use crate::constants::{LOG_FILE_NAME, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_data_dir_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Directory holding scoreboard snapshots named `YYYYMMDD.json`.
    /// Defaults to a `scoreboards` directory next to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Report style used when no `--style` flag is given.
    #[serde(default)]
    pub style: ReportStyle,
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file yields the default configuration.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `NBA_BOXSCORE_DATA_DIR` - Override snapshot directory
    /// - `NBA_BOXSCORE_LOG_FILE` - Override log file path
    /// - `NBA_BOXSCORE_STYLE` - Override report style (`labeled` or `bracketed`)
    pub async fn load() -> Result<Self, AppError> {
        Self::load_with_overrides(&get_config_path()).await
    }

    /// Loads the config at `path` (or defaults when absent), then applies
    /// environment overrides and validates the result.
    pub async fn load_with_overrides(path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(path).exists() {
            Self::load_from_path(path).await?
        } else {
            tracing::debug!("No config file at {path}, using defaults");
            Config::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<(), AppError> {
        if let Ok(data_dir) = std::env::var(env_vars::DATA_DIR) {
            self.data_dir = Some(data_dir);
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Ok(style) = std::env::var(env_vars::STYLE) {
            self.style = style.parse::<ReportStyle>().map_err(|e| {
                AppError::config_error(format!("{}: {e}", env_vars::STYLE))
            })?;
        }

        Ok(())
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.data_dir, &self.log_file_path)
    }

    /// Directory to look for scoreboard snapshots in.
    pub fn data_dir_path(&self) -> String {
        self.data_dir.clone().unwrap_or_else(get_data_dir_path)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        self.save_to_path(&get_config_path()).await
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and trims
    /// surrounding whitespace from stored paths.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(&Config {
            data_dir: self.data_dir.as_deref().map(|d| d.trim().to_string()),
            log_file_path: self.log_file_path.as_deref().map(|p| p.trim().to_string()),
            style: self.style,
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;

        tracing::info!("Saved configuration to {path}");
        Ok(())
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Human readable summary of the configuration at `config_path`.
    pub fn describe(&self, config_path: &str, file_exists: bool) -> String {
        let rule = "────────────────────────────────────";
        let mut lines = vec![
            String::new(),
            "Current Configuration".to_string(),
            rule.to_string(),
            "Config Location:".to_string(),
        ];
        if file_exists {
            lines.push(config_path.to_string());
        } else {
            lines.push(format!("{config_path} (not created yet, using defaults)"));
        }
        lines.push(rule.to_string());
        lines.push("Scoreboard Directory:".to_string());
        lines.push(self.data_dir_path());
        if self.data_dir.is_none() {
            lines.push("(Default location)".to_string());
        }
        lines.push(rule.to_string());
        lines.push("Report Style:".to_string());
        lines.push(self.style.to_string());
        lines.push(rule.to_string());
        lines.push("Log File Location:".to_string());
        match &self.log_file_path {
            Some(custom_path) => lines.push(custom_path.clone()),
            None => {
                lines.push(format!("{}/{LOG_FILE_NAME}", get_log_dir_path()));
                lines.push("(Default location)".to_string());
            }
        }
        lines.join("\n")
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let exists = Path::new(&config_path).exists();
        let config = Config::load().await?;
        println!("{}", config.describe(&config_path, exists));
        Ok(())
    }
}
