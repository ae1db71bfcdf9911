//! NBA box score formatting library
//!
//! This library turns saved NBA scoreboard snapshots into plain text reports:
//! per-game box scores with records, final scores, highlights and quarter
//! line scores, and daily summaries over all games of a date.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nba_boxscore::boxscore::{Info, ReportStyle, YesterdayGameScores};
//! use nba_boxscore::data::{load_games, parse_date};
//! use nba_boxscore::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let date = parse_date("2019-10-06")?;
//!     let games = load_games("scoreboards/20191006.json", date).await?;
//!
//!     println!("{}", YesterdayGameScores::new(&games, ReportStyle::Labeled).render());
//!     Ok(())
//! }
//! ```

pub mod boxscore;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod logging;
pub mod teams;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use boxscore::{
    GameScoresInfo, GamesScoresInfo, Info, LineScoreInfo, ReportStyle, TeamsInfo,
    YesterdayGameScores,
};
pub use config::Config;
pub use data::{GameStats, Games, GamesStats, LineScore, TeamStats};
pub use error::AppError;
pub use teams::TeamIdentity;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
