use crate::boxscore::ReportStyle;
use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when any flag asks to change the stored configuration.
pub fn is_config_update(args: &Args) -> bool {
    args.new_data_dir.is_some()
        || args.new_style.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// NBA box scores in your terminal
///
/// Prints yesterday's games from a saved scoreboard snapshot:
/// win/loss records, final scores, highlights and quarter-by-quarter line scores.
///
/// Snapshots are read from `<data dir>/<YYYYMMDD>.json`. Use --file to
/// point at a snapshot directly.
#[derive(Parser, Debug, Default)]
#[command(about, version, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Show games for a specific date in YYYY-MM-DD format instead of yesterday.
    #[arg(long = "date", short = 'd', help_heading = "Report Options")]
    pub date: Option<String>,

    /// Read this scoreboard snapshot instead of looking it up in the data directory.
    #[arg(long = "file", short = 'f', help_heading = "Report Options")]
    pub file: Option<String>,

    /// Output style. Defaults to the configured style.
    #[arg(long = "style", short = 's', value_enum, help_heading = "Report Options")]
    pub style: Option<ReportStyle>,

    /// Print only the game blocks, without the "N games were played on" header.
    #[arg(long = "games-only", short = 'g', help_heading = "Report Options")]
    pub games_only: bool,

    /// Show identity details for one team (tri-code, slug, id or nickname).
    #[arg(long = "team", short = 't', help_heading = "Teams")]
    pub team: Option<String>,

    /// List every team in the registry.
    #[arg(long = "list-teams", help_heading = "Teams")]
    pub list_teams: bool,

    /// Set the directory holding scoreboard snapshots.
    #[arg(long = "set-data-dir", help_heading = "Configuration")]
    pub new_data_dir: Option<String>,

    /// Set the default output style.
    #[arg(long = "set-style", value_enum, help_heading = "Configuration")]
    pub new_style: Option<ReportStyle>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stderr.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
