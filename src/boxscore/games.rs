use super::{GameScoresInfo, Info, ReportStyle};
use crate::data::models::GamesStats;

/// Game blocks of a whole day, separated by one blank line.
///
/// An empty collection renders as an empty string.
pub struct GamesScoresInfo<'a> {
    games: &'a dyn GamesStats,
    style: ReportStyle,
}

impl<'a> GamesScoresInfo<'a> {
    pub fn new(games: &'a dyn GamesStats, style: ReportStyle) -> Self {
        Self { games, style }
    }
}

impl Info for GamesScoresInfo<'_> {
    fn render(&self) -> String {
        self.games
            .games()
            .into_iter()
            .map(|game| GameScoresInfo::new(game, self.style).render())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_empty_collection_renders_empty() {
        let games = TestDataBuilder::create_games(vec![]);
        assert_eq!(GamesScoresInfo::new(&games, ReportStyle::Labeled).render(), "");
        assert_eq!(GamesScoresInfo::new(&games, ReportStyle::Bracketed).render(), "");
    }

    #[test]
    fn test_single_game_has_no_separator() {
        let game = TestDataBuilder::create_orl_sas_game();
        let games = TestDataBuilder::create_games(vec![game.clone()]);

        assert_eq!(
            GamesScoresInfo::new(&games, ReportStyle::Labeled).render(),
            GameScoresInfo::new(&game, ReportStyle::Labeled).render()
        );
    }

    #[test]
    fn test_blocks_are_separated_by_one_blank_line() {
        let games = TestDataBuilder::create_games(vec![
            TestDataBuilder::create_orl_sas_game(),
            TestDataBuilder::create_lal_lac_game(),
            TestDataBuilder::create_overtime_game(),
        ]);

        for style in [ReportStyle::Labeled, ReportStyle::Bracketed] {
            let report = GamesScoresInfo::new(&games, style).render();
            let blocks: Vec<&str> = report.split("\n\n").collect();
            assert_eq!(blocks.len(), 3);
            assert!(blocks.iter().all(|b| b.starts_with('\u{2606}')));
            assert!(!report.contains("\n\n\n"));
            assert!(!report.ends_with('\n'));
        }
    }

    #[test]
    fn test_keeps_scoreboard_order() {
        let games = TestDataBuilder::create_games(vec![
            TestDataBuilder::create_lal_lac_game(),
            TestDataBuilder::create_orl_sas_game(),
        ]);
        let report = GamesScoresInfo::new(&games, ReportStyle::Bracketed).render();

        let lal = report.find("LAL(1:0)").unwrap();
        let orl = report.find("ORL(2:3)").unwrap();
        assert!(lal < orl);
    }
}
