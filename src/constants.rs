//! Application-wide constants
//!
//! Glyphs, file names and environment variable names shared across the crate.

/// Marker printed in front of every game block
pub const STAR: char = '\u{2606}';

/// Number of regulation quarters printed in a line score
pub const QUARTERS: usize = 4;

/// Application directory name under the platform config dir
pub const APP_DIR_NAME: &str = "nba_boxscore";

/// Config file name inside the application directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default log file name
pub const LOG_FILE_NAME: &str = "nba_boxscore.log";

/// Default directory name for saved scoreboard snapshots
pub const SCOREBOARD_DIR_NAME: &str = "scoreboards";

/// Default tracing directive
pub const DEFAULT_LOG_DIRECTIVE: &str = "nba_boxscore=info";

/// Environment variables that override config file values
pub mod env_vars {
    pub const DATA_DIR: &str = "NBA_BOXSCORE_DATA_DIR";
    pub const LOG_FILE: &str = "NBA_BOXSCORE_LOG_FILE";
    pub const STYLE: &str = "NBA_BOXSCORE_STYLE";
}

/// Season stage labels used as a highlight fallback
pub mod season_stage {
    pub const PRESEASON: u8 = 1;
    pub const REGULAR_SEASON: u8 = 2;
    pub const ALL_STAR: u8 = 3;
    pub const PLAYOFFS: u8 = 4;
    pub const PLAY_IN: u8 = 5;
}
