use super::{Info, LineScoreInfo, ReportStyle, TeamsInfo};
use crate::constants::STAR;
use crate::data::models::GameStats;

/// Three-line block for a single game.
///
/// Labeled:
/// ```text
/// ☆ ORL(2:3) vs SAS(3:2) 81 - 100
///  Highlight - Preseason
///  Linescores 1st:10 2nd:20 3rd:22 4th:29 - 1st:22 2nd:18 3rd:31 4th:2
/// ```
///
/// Bracketed:
/// ```text
/// ☆ ORL(2:3) vs SAS(3:2) 81 - 100
///  Highlight: Preseason
///  Linescores: [10, 20, 22, 29] vs [22, 18, 31, 2]
/// ```
pub struct GameScoresInfo<'a> {
    game: &'a dyn GameStats,
    style: ReportStyle,
}

impl<'a> GameScoresInfo<'a> {
    pub fn new(game: &'a dyn GameStats, style: ReportStyle) -> Self {
        Self { game, style }
    }
}

impl Info for GameScoresInfo<'_> {
    fn render(&self) -> String {
        let home = self.game.home_team();
        let visit = self.game.visit_team();

        let teams = TeamsInfo::new(home, visit).render();
        let home_lines = LineScoreInfo::new(home, self.style).render();
        let visit_lines = LineScoreInfo::new(visit, self.style).render();
        let highlight = self.game.highlight();

        match self.style {
            ReportStyle::Labeled => format!(
                "{STAR} {teams}\n Highlight - {highlight}\n Linescores {home_lines} - {visit_lines}"
            ),
            ReportStyle::Bracketed => format!(
                "{STAR} {teams}\n Highlight: {highlight}\n Linescores: {home_lines} vs {visit_lines}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_labeled_game_block() {
        let game = TestDataBuilder::create_orl_sas_game();
        assert_eq!(
            GameScoresInfo::new(&game, ReportStyle::Labeled).render(),
            "\u{2606} ORL(2:3) vs SAS(3:2) 81 - 100\n Highlight - Preseason\n \
             Linescores 1st:10 2nd:20 3rd:22 4th:29 - 1st:22 2nd:18 3rd:31 4th:2"
        );
    }

    #[test]
    fn test_bracketed_game_block() {
        let game = TestDataBuilder::create_orl_sas_game();
        assert_eq!(
            GameScoresInfo::new(&game, ReportStyle::Bracketed).render(),
            "\u{2606} ORL(2:3) vs SAS(3:2) 81 - 100\n Highlight: Preseason\n \
             Linescores: [10, 20, 22, 29] vs [22, 18, 31, 2]"
        );
    }

    #[test]
    fn test_game_block_has_three_lines() {
        let game = TestDataBuilder::create_lal_lac_game();
        for style in [ReportStyle::Labeled, ReportStyle::Bracketed] {
            let block = GameScoresInfo::new(&game, style).render();
            assert_eq!(block.lines().count(), 3);
            assert!(block.starts_with('\u{2606}'));
        }
    }

    #[test]
    fn test_highlight_falls_back_to_season_stage() {
        let game = TestDataBuilder::create_scheduled_game();
        let block = GameScoresInfo::new(&game, ReportStyle::Labeled).render();
        assert!(block.contains("\n Highlight - Regular Season\n"));
    }

    #[test]
    fn test_rendering_twice_is_identical() {
        let game = TestDataBuilder::create_overtime_game();
        let info = GameScoresInfo::new(&game, ReportStyle::Bracketed);
        assert_eq!(info.render(), info.render());
    }
}
