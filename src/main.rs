use clap::Parser;
use nba_boxscore::cli::{Args, is_config_update};
use nba_boxscore::commands;
use nba_boxscore::config::Config;
use nba_boxscore::error::AppError;
use nba_boxscore::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load config first; logging still comes up on a broken config so the failure is recorded
    let config = Config::load().await;

    let (log_file_path, _guard) = setup_logging(&args, config.as_ref().ok()).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if let Err(e) = &config {
        tracing::error!("Failed to load configuration: {e}");
    }

    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if is_config_update(&args) {
        return commands::handle_config_update_command(&args).await;
    }

    if args.list_teams {
        commands::handle_list_teams_command();
        return Ok(());
    }

    if let Some(query) = &args.team {
        return commands::handle_team_command(query);
    }

    let config = config?;
    commands::handle_report_command(&args, &config).await
}
