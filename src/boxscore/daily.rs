use super::{GamesScoresInfo, Info, ReportStyle};
use crate::data::models::GamesStats;

/// Scores of the previous day's games under a count/date header.
///
/// Sample:
/// ```text
/// 1 games were played on 2019-10-06
///  ☆ ORL(2:3) vs SAS(3:2) 81 - 100
///  Highlight - Preseason
///  Linescores 1st:10 2nd:20 3rd:22 4th:29 - 1st:22 2nd:18 3rd:31 4th:2
/// ```
pub struct YesterdayGameScores<'a> {
    games: &'a dyn GamesStats,
    games_info: GamesScoresInfo<'a>,
}

impl<'a> YesterdayGameScores<'a> {
    pub fn new(games: &'a dyn GamesStats, style: ReportStyle) -> Self {
        Self {
            games,
            games_info: GamesScoresInfo::new(games, style),
        }
    }

    /// The count/date line on its own.
    pub fn header(&self) -> String {
        format!(
            "{} games were played on {}",
            self.games.len(),
            self.games.date()
        )
    }
}

impl Info for YesterdayGameScores<'_> {
    fn render(&self) -> String {
        format!("{}\n {}", self.header(), self.games_info.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_header_with_zero_games() {
        let games = TestDataBuilder::create_games(vec![]);
        let daily = YesterdayGameScores::new(&games, ReportStyle::Labeled);

        assert_eq!(daily.header(), "0 games were played on 2019-10-06");
        assert_eq!(daily.render(), "0 games were played on 2019-10-06\n ");
    }

    #[test]
    fn test_single_game_report() {
        let games = TestDataBuilder::create_games(vec![TestDataBuilder::create_orl_sas_game()]);

        assert_eq!(
            YesterdayGameScores::new(&games, ReportStyle::Labeled).render(),
            "1 games were played on 2019-10-06\n \
             \u{2606} ORL(2:3) vs SAS(3:2) 81 - 100\n Highlight - Preseason\n \
             Linescores 1st:10 2nd:20 3rd:22 4th:29 - 1st:22 2nd:18 3rd:31 4th:2"
        );
    }

    #[test]
    fn test_bracketed_report_keeps_header() {
        let games = TestDataBuilder::create_games(vec![
            TestDataBuilder::create_orl_sas_game(),
            TestDataBuilder::create_lal_lac_game(),
        ]);
        let report = YesterdayGameScores::new(&games, ReportStyle::Bracketed).render();

        assert!(report.starts_with("2 games were played on 2019-10-06\n \u{2606} ORL"));
        assert!(report.contains(" Linescores: [31, 25, 28, 28] vs [24, 27, 26, 25]"));
    }

    #[test]
    fn test_report_body_is_the_games_block() {
        let games = TestDataBuilder::create_games(vec![
            TestDataBuilder::create_orl_sas_game(),
            TestDataBuilder::create_overtime_game(),
        ]);
        let daily = YesterdayGameScores::new(&games, ReportStyle::Labeled);
        let block = GamesScoresInfo::new(&games, ReportStyle::Labeled).render();

        assert_eq!(daily.render(), format!("{}\n {block}", daily.header()));
    }
}
