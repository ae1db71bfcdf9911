//! Reads saved scoreboard snapshots from disk

use super::models::{Games, ScoreboardResponse};
use crate::error::AppError;
use chrono::NaiveDate;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Location of the snapshot for `date` inside `data_dir`: `<data_dir>/<YYYYMMDD>.json`.
pub fn snapshot_path(data_dir: impl AsRef<Path>, date: NaiveDate) -> PathBuf {
    data_dir
        .as_ref()
        .join(format!("{}.json", date.format("%Y%m%d")))
}

/// Reads and decodes one scoreboard snapshot.
///
/// # Errors
/// * `AppError::SnapshotNotFound` - no file at `path`
/// * `AppError::MalformedSnapshot` - the file is not a scoreboard document
/// * `AppError::Io` - any other read failure
pub async fn load_scoreboard(path: impl AsRef<Path>) -> Result<ScoreboardResponse, AppError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(AppError::snapshot_not_found(path_str));
        }
        Err(e) => return Err(e.into()),
    };
    debug!("Read {} bytes of scoreboard data", content.len());

    let response: ScoreboardResponse = serde_json::from_str(&content)
        .map_err(|e| AppError::malformed_snapshot(e.to_string(), &path_str))?;

    info!("Loaded {} games from {path_str}", response.games.len());
    Ok(response)
}

/// Loads the snapshot at `path` as the games played on `date`.
pub async fn load_games(path: impl AsRef<Path>, date: NaiveDate) -> Result<Games, AppError> {
    let response = load_scoreboard(path).await?;
    Ok(Games::from_response(date, response))
}
