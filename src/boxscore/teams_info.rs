use super::Info;
use crate::data::models::TeamStats;

/// Win/loss records and the final score of both sides.
///
/// Sample: `ORL(2:3) vs SAS(3:2) 81 - 100`
pub struct TeamsInfo<'a> {
    home_team: &'a dyn TeamStats,
    visit_team: &'a dyn TeamStats,
}

impl<'a> TeamsInfo<'a> {
    pub fn new(home_team: &'a dyn TeamStats, visit_team: &'a dyn TeamStats) -> Self {
        Self {
            home_team,
            visit_team,
        }
    }
}

impl Info for TeamsInfo<'_> {
    fn render(&self) -> String {
        let home = self.home_team;
        let visit = self.visit_team;
        format!(
            "{}({}:{}) vs {}({}:{}) {} - {}",
            home.name(),
            home.win(),
            home.loss(),
            visit.name(),
            visit.win(),
            visit.loss(),
            home.score(),
            visit.score()
        )
    }
}
