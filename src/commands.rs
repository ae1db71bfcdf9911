use crate::boxscore::{GamesScoresInfo, Info, ReportStyle, YesterdayGameScores};
use crate::cli::Args;
use crate::config::Config;
use crate::data::{determine_report_date, load_games, snapshot_path};
use crate::error::AppError;
use crate::teams;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{info, warn};

/// Picks the style from the command line first, then the config.
pub fn resolve_style(args: &Args, config: &Config) -> ReportStyle {
    args.style.unwrap_or(config.style)
}

/// Picks the snapshot to read: `--file`, or `<data dir>/<YYYYMMDD>.json`.
pub fn resolve_snapshot_path(args: &Args, config: &Config, date: chrono::NaiveDate) -> PathBuf {
    match &args.file {
        Some(file) => PathBuf::from(file),
        None => snapshot_path(config.data_dir_path(), date),
    }
}

/// Builds the scoreboard report text for the selected date.
///
/// Returns the daily summary, or only the game blocks with `--games-only`.
pub async fn build_report(args: &Args, config: &Config) -> Result<String, AppError> {
    let date = determine_report_date(args.date.as_deref())?;
    let path = resolve_snapshot_path(args, config, date);
    let style = resolve_style(args, config);
    info!("Building {style} report for {date} from {}", path.display());

    let games = load_games(&path, date).await?;

    let report = if args.games_only {
        GamesScoresInfo::new(&games, style).render()
    } else {
        YesterdayGameScores::new(&games, style).render()
    };
    Ok(report)
}

/// Handles the default command: print the scoreboard report.
///
/// A missing snapshot is reported as a notice on stderr rather than an error,
/// since days without saved data are routine.
pub async fn handle_report_command(args: &Args, config: &Config) -> Result<(), AppError> {
    match build_report(args, config).await {
        Ok(report) => {
            println!("{report}");
            Ok(())
        }
        Err(e) if e.is_missing_input() => {
            warn!("{e}");
            eprintln!("{e}");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Text for the `--team` command.
pub fn team_details(query: &str) -> Result<String, AppError> {
    teams::find(query)
        .map(|team| team.to_string())
        .ok_or_else(|| AppError::unknown_team(query))
}

/// Handles the `--team` command. An unknown query is an error.
pub fn handle_team_command(query: &str) -> Result<(), AppError> {
    let details = team_details(query)?;
    println!("{details}");
    Ok(())
}

/// Text for the `--list-teams` command, one team per line.
pub fn team_listing() -> String {
    teams::all()
        .iter()
        .map(|team| team.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Handles the `--list-teams` command.
pub fn handle_list_teams_command() {
    println!("{}", team_listing());
}

/// Handles the `--list-config` command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Applies the configuration update flags to `config`.
///
/// Returns a notice for the user when the log file path is cleared.
pub fn apply_config_updates(args: &Args, config: &mut Config) -> Option<&'static str> {
    if let Some(new_dir) = &args.new_data_dir {
        config.data_dir = Some(new_dir.clone());
    }

    if let Some(new_style) = args.new_style {
        config.style = new_style;
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
        None
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        Some("Custom log file path cleared. Using default location.")
    } else {
        None
    }
}

/// Applies the update flags to the config file at `path` and saves it.
///
/// Only a missing file starts from defaults. A file that cannot be read or
/// parsed is left untouched and the error is returned.
pub async fn update_config_file(args: &Args, path: &str) -> Result<Config, AppError> {
    let mut config = match Config::load_from_path(path).await {
        Ok(config) => config,
        Err(AppError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            info!("No config file at {path}, starting from defaults");
            Config::default()
        }
        Err(e) => {
            warn!("Refusing to overwrite unreadable config at {path}: {e}");
            return Err(e);
        }
    };

    if let Some(notice) = apply_config_updates(args, &mut config) {
        println!("{notice}");
    }

    config.validate()?;
    config.save_to_path(path).await?;
    Ok(config)
}

/// Handles configuration update commands (--set-data-dir, --set-style,
/// --set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    update_config_file(args, &Config::get_config_path()).await?;
    println!("Config updated successfully!");

    Ok(())
}
