use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, SCOREBOARD_DIR_NAME};
use std::path::{Path, PathBuf};

fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_DIR_NAME)
}

/// Returns the platform-specific path for the config file.
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_config_path() -> String {
    app_dir()
        .join(CONFIG_FILE_NAME)
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    app_dir().join("logs").to_string_lossy().to_string()
}

/// Returns the default directory holding saved scoreboard snapshots.
pub fn get_data_dir_path() -> String {
    app_dir()
        .join(SCOREBOARD_DIR_NAME)
        .to_string_lossy()
        .to_string()
}
