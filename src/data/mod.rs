pub mod dates;
pub mod loader;
pub mod models;

pub use dates::{determine_report_date, parse_date, yesterday};
pub use loader::{load_games, load_scoreboard, snapshot_path};
pub use models::{Games, GameStats, GamesStats, LineScore, ScoreboardResponse, TeamStats};
