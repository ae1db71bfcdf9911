use super::common::{GameStats, GamesStats, LineScore, TeamStats};
use crate::constants::season_stage;
use crate::teams::{self, TeamIdentity};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Counts in the scoreboard feed arrive as strings ("81"), numbers or, for
/// games that have not tipped off yet, empty strings and nulls.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNum {
    Num(u32),
    Str(String),
}

fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrNum>::deserialize(deserializer)? {
        None => Ok(0),
        Some(StringOrNum::Num(n)) => Ok(n),
        Some(StringOrNum::Str(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(0)
            } else {
                trimmed.parse().map_err(serde::de::Error::custom)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PeriodScore {
    #[serde(default, deserialize_with = "count")]
    pub score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Nugget {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ScoreboardTeam {
    #[serde(rename = "teamId", default)]
    pub team_id: String,
    #[serde(rename = "triCode")]
    pub tri_code: String,
    #[serde(default, deserialize_with = "count")]
    pub win: u32,
    #[serde(default, deserialize_with = "count")]
    pub loss: u32,
    #[serde(default, deserialize_with = "count")]
    pub score: u32,
    #[serde(default)]
    pub linescore: Vec<PeriodScore>,
}

impl ScoreboardTeam {
    /// Resolves the registry entry for this team, by id first and tri-code second.
    pub fn identity(&self) -> Option<&'static TeamIdentity> {
        self.team_id
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(teams::by_id)
            .or_else(|| teams::by_abbreviation(&self.tri_code))
    }
}

impl TeamStats for ScoreboardTeam {
    fn name(&self) -> &str {
        &self.tri_code
    }

    fn win(&self) -> u32 {
        self.win
    }

    fn loss(&self) -> u32 {
        self.loss
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn line_score(&self) -> LineScore {
        let periods: Vec<u32> = self.linescore.iter().map(|p| p.score).collect();
        LineScore::from_periods(&periods)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreboardGame {
    #[serde(rename = "gameId", default)]
    pub game_id: String,
    #[serde(rename = "seasonStageId", default)]
    pub season_stage_id: u8,
    #[serde(default)]
    pub nugget: Nugget,
    #[serde(rename = "hTeam")]
    pub home_team: ScoreboardTeam,
    #[serde(rename = "vTeam")]
    pub visit_team: ScoreboardTeam,
}

/// Label for a season stage id, used when a game carries no nugget text.
pub fn season_stage_label(stage_id: u8) -> &'static str {
    match stage_id {
        season_stage::PRESEASON => "Preseason",
        season_stage::REGULAR_SEASON => "Regular Season",
        season_stage::ALL_STAR => "All-Star",
        season_stage::PLAYOFFS => "Playoffs",
        season_stage::PLAY_IN => "Play-In",
        _ => "Game",
    }
}

impl GameStats for ScoreboardGame {
    fn home_team(&self) -> &dyn TeamStats {
        &self.home_team
    }

    fn visit_team(&self) -> &dyn TeamStats {
        &self.visit_team
    }

    fn highlight(&self) -> &str {
        let text = self.nugget.text.trim();
        if text.is_empty() {
            season_stage_label(self.season_stage_id)
        } else {
            text
        }
    }
}

/// Daily scoreboard document as saved from the league data feed.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ScoreboardResponse {
    #[serde(rename = "numGames", default)]
    pub num_games: usize,
    #[serde(default)]
    pub games: Vec<ScoreboardGame>,
}

/// Games played on one date, in scoreboard order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Games {
    date: NaiveDate,
    games: Vec<ScoreboardGame>,
}

impl Games {
    pub fn new(date: NaiveDate, games: Vec<ScoreboardGame>) -> Self {
        Self { date, games }
    }

    pub fn from_response(date: NaiveDate, response: ScoreboardResponse) -> Self {
        if response.num_games != response.games.len() {
            tracing::warn!(
                "Scoreboard for {date} reports {} games but lists {}",
                response.num_games,
                response.games.len()
            );
        }
        Self::new(date, response.games)
    }

    pub fn day(&self) -> NaiveDate {
        self.date
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoreboardGame> {
        self.games.iter()
    }
}

impl GamesStats for Games {
    fn games(&self) -> Vec<&dyn GameStats> {
        self.games.iter().map(|g| g as &dyn GameStats).collect()
    }

    fn date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    fn len(&self) -> usize {
        self.games.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORL_SAS: &str = r#"{
        "numGames": 1,
        "games": [{
            "gameId": "0011900001",
            "seasonStageId": 1,
            "nugget": {"text": ""},
            "hTeam": {"teamId": "1610612753", "triCode": "ORL", "win": "2", "loss": "3",
                      "score": "81", "linescore": [{"score": "10"}, {"score": "20"}, {"score": "22"}, {"score": "29"}]},
            "vTeam": {"teamId": "1610612759", "triCode": "SAS", "win": "3", "loss": "2",
                      "score": "100", "linescore": [{"score": "22"}, {"score": "18"}, {"score": "31"}, {"score": "2"}]}
        }]
    }"#;

    #[test]
    fn test_deserialize_string_counts() {
        let response: ScoreboardResponse = serde_json::from_str(ORL_SAS).unwrap();
        assert_eq!(response.num_games, 1);

        let game = &response.games[0];
        assert_eq!(game.home_team.tri_code, "ORL");
        assert_eq!(game.home_team.win, 2);
        assert_eq!(game.home_team.loss, 3);
        assert_eq!(game.home_team.score, 81);
        assert_eq!(game.visit_team.score, 100);
        assert_eq!(game.home_team.line_score().all(), [10, 20, 22, 29]);
        assert_eq!(game.visit_team.line_score().all(), [22, 18, 31, 2]);
    }

    #[test]
    fn test_deserialize_numeric_empty_and_null_counts() {
        let json = r#"{"triCode": "BOS", "win": 7, "loss": "", "score": null,
                       "linescore": [{"score": 31}, {"score": ""}]}"#;
        let team: ScoreboardTeam = serde_json::from_str(json).unwrap();
        assert_eq!(team.win, 7);
        assert_eq!(team.loss, 0);
        assert_eq!(team.score, 0);
        assert_eq!(team.line_score().all(), [31, 0, 0, 0]);
    }

    #[test]
    fn test_deserialize_missing_fields_default() {
        let json = r#"{"hTeam": {"triCode": "NYK"}, "vTeam": {"triCode": "BKN"}}"#;
        let game: ScoreboardGame = serde_json::from_str(json).unwrap();
        assert_eq!(game.game_id, "");
        assert_eq!(game.home_team.win, 0);
        assert!(game.visit_team.linescore.is_empty());
        assert_eq!(game.highlight(), "Game");
    }

    #[test]
    fn test_rejects_non_numeric_count() {
        let json = r#"{"triCode": "BOS", "win": "seven"}"#;
        assert!(serde_json::from_str::<ScoreboardTeam>(json).is_err());
    }

    #[test]
    fn test_highlight_prefers_nugget_text() {
        let mut response: ScoreboardResponse = serde_json::from_str(ORL_SAS).unwrap();
        let game = &mut response.games[0];
        assert_eq!(game.highlight(), "Preseason");

        game.nugget.text = "  Fournier drops 27  ".to_string();
        assert_eq!(game.highlight(), "Fournier drops 27");
    }

    #[test]
    fn test_season_stage_labels() {
        assert_eq!(season_stage_label(1), "Preseason");
        assert_eq!(season_stage_label(2), "Regular Season");
        assert_eq!(season_stage_label(3), "All-Star");
        assert_eq!(season_stage_label(4), "Playoffs");
        assert_eq!(season_stage_label(5), "Play-In");
        assert_eq!(season_stage_label(0), "Game");
    }

    #[test]
    fn test_identity_by_id_then_code() {
        let response: ScoreboardResponse = serde_json::from_str(ORL_SAS).unwrap();
        let home = &response.games[0].home_team;
        assert_eq!(home.identity().unwrap().full_name, "Orlando Magic");

        let unnumbered = ScoreboardTeam {
            tri_code: "sas".to_string(),
            ..Default::default()
        };
        assert_eq!(unnumbered.identity().unwrap().nickname, "Spurs");

        let unknown = ScoreboardTeam {
            team_id: "12".to_string(),
            tri_code: "XYZ".to_string(),
            ..Default::default()
        };
        assert!(unknown.identity().is_none());
    }

    #[test]
    fn test_games_collection() {
        let response: ScoreboardResponse = serde_json::from_str(ORL_SAS).unwrap();
        let date = NaiveDate::from_ymd_opt(2019, 10, 6).unwrap();
        let games = Games::from_response(date, response);

        assert_eq!(games.len(), 1);
        assert!(!games.is_empty());
        assert_eq!(games.date(), "2019-10-06");
        assert_eq!(games.day(), date);
        assert_eq!(games.games()[0].home_team().name(), "ORL");
        assert_eq!(games.iter().count(), 1);
    }

    #[test]
    fn test_games_trusts_list_over_count() {
        let response = ScoreboardResponse {
            num_games: 3,
            games: Vec::new(),
        };
        let games = Games::from_response(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(), response);
        assert!(games.is_empty());
    }
}
