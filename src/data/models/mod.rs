pub mod common;
pub mod scoreboard;

pub use common::{GameStats, GamesStats, LineScore, TeamStats};
pub use scoreboard::{
    Games, Nugget, PeriodScore, ScoreboardGame, ScoreboardResponse, ScoreboardTeam,
    season_stage_label,
};
