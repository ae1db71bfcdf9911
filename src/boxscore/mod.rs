//! Text formatters for box scores and daily scoreboards
//!
//! Each formatter borrows already loaded data and renders it into a string.
//! They compose hierarchically:
//! - [`TeamsInfo`] renders the record/score line of a game
//! - [`LineScoreInfo`] renders one team's quarter totals
//! - [`GameScoresInfo`] combines the two above with the game highlight
//! - [`GamesScoresInfo`] joins game blocks with a blank line
//! - [`YesterdayGameScores`] puts a count/date header over the games block
//!
//! Two output styles exist side by side, see [`ReportStyle`].

pub mod daily;
pub mod game;
pub mod games;
pub mod line_score;
pub mod teams_info;

pub use daily::YesterdayGameScores;
pub use game::GameScoresInfo;
pub use games::GamesScoresInfo;
pub use line_score::LineScoreInfo;
pub use teams_info::TeamsInfo;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Something that renders itself as display text.
pub trait Info {
    fn render(&self) -> String;
}

/// Output style shared by the line score and game formatters.
///
/// | Part        | Labeled                         | Bracketed                        |
/// |-------------|---------------------------------|----------------------------------|
/// | line score  | `1st:10 2nd:20 3rd:22 4th:29`   | `[10, 20, 22, 29]`               |
/// | highlight   | ` Highlight - Preseason`        | ` Highlight: Preseason`          |
/// | line scores | ` Linescores <home> - <visit>`  | ` Linescores: <home> vs <visit>` |
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportStyle {
    #[default]
    Labeled,
    Bracketed,
}

impl ReportStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStyle::Labeled => "labeled",
            ReportStyle::Bracketed => "bracketed",
        }
    }
}

impl fmt::Display for ReportStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "labeled" => Ok(ReportStyle::Labeled),
            "bracketed" => Ok(ReportStyle::Bracketed),
            other => Err(format!(
                "Unknown report style '{other}' (expected 'labeled' or 'bracketed')"
            )),
        }
    }
}
