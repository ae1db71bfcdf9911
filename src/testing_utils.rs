use crate::data::models::{
    Games, Nugget, PeriodScore, ScoreboardGame, ScoreboardResponse, ScoreboardTeam,
};
use crate::teams;
use chrono::NaiveDate;

/// Test utilities for creating mock scoreboard data
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a team entry with a record, a final score and quarter totals.
    ///
    /// The team id is taken from the registry when the tri-code is known.
    pub fn create_team(
        tri_code: &str,
        win: u32,
        loss: u32,
        score: u32,
        quarters: &[u32],
    ) -> ScoreboardTeam {
        ScoreboardTeam {
            team_id: teams::by_abbreviation(tri_code)
                .map(|t| t.id.to_string())
                .unwrap_or_default(),
            tri_code: tri_code.to_string(),
            win,
            loss,
            score,
            linescore: quarters
                .iter()
                .map(|&score| PeriodScore { score })
                .collect(),
        }
    }

    /// Creates a game with an explicit highlight text.
    pub fn create_game(
        home_team: ScoreboardTeam,
        visit_team: ScoreboardTeam,
        highlight: &str,
    ) -> ScoreboardGame {
        ScoreboardGame {
            game_id: format!("00119{:05}", home_team.score + visit_team.score),
            season_stage_id: 2,
            nugget: Nugget {
                text: highlight.to_string(),
            },
            home_team,
            visit_team,
        }
    }

    /// The Orlando vs San Antonio preseason game used throughout the docs.
    pub fn create_orl_sas_game() -> ScoreboardGame {
        Self::create_game(
            Self::create_team("ORL", 2, 3, 81, &[10, 20, 22, 29]),
            Self::create_team("SAS", 3, 2, 100, &[22, 18, 31, 2]),
            "Preseason",
        )
    }

    /// A regular season game between the Lakers and the Clippers.
    pub fn create_lal_lac_game() -> ScoreboardGame {
        Self::create_game(
            Self::create_team("LAL", 1, 0, 112, &[31, 25, 28, 28]),
            Self::create_team("LAC", 0, 1, 102, &[24, 27, 26, 25]),
            "Regular Season",
        )
    }

    /// A game that went to overtime.
    pub fn create_overtime_game() -> ScoreboardGame {
        Self::create_game(
            Self::create_team("BOS", 4, 1, 118, &[27, 25, 24, 26, 16]),
            Self::create_team("NYK", 1, 4, 111, &[25, 29, 23, 25, 9]),
            "Overtime thriller",
        )
    }

    /// A game that has not tipped off yet: no scores, no quarters.
    pub fn create_scheduled_game() -> ScoreboardGame {
        Self::create_game(
            Self::create_team("PHX", 0, 0, 0, &[]),
            Self::create_team("UTA", 0, 0, 0, &[]),
            "",
        )
    }

    /// The default test date, 2019-10-06.
    pub fn create_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 10, 6).unwrap_or_default()
    }

    /// Wraps games into a collection dated [`TestDataBuilder::create_date`].
    pub fn create_games(games: Vec<ScoreboardGame>) -> Games {
        Games::new(Self::create_date(), games)
    }

    /// Wraps games into a scoreboard document as saved from the data feed.
    pub fn create_response(games: Vec<ScoreboardGame>) -> ScoreboardResponse {
        ScoreboardResponse {
            num_games: games.len(),
            games,
        }
    }
}
