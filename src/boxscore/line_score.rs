use super::{Info, ReportStyle};
use crate::data::models::TeamStats;

const QUARTER_LABELS: [&str; 4] = ["1st", "2nd", "3rd", "4th"];

/// Per-quarter points of one team.
///
/// Labeled: `1st:10 2nd:20 3rd:22 4th:29`
/// Bracketed: `[10, 20, 22, 29]`
pub struct LineScoreInfo<'a> {
    team: &'a dyn TeamStats,
    style: ReportStyle,
}

impl<'a> LineScoreInfo<'a> {
    pub fn new(team: &'a dyn TeamStats, style: ReportStyle) -> Self {
        Self { team, style }
    }
}

impl Info for LineScoreInfo<'_> {
    fn render(&self) -> String {
        let quarters = self.team.line_score().all();
        match self.style {
            ReportStyle::Labeled => QUARTER_LABELS
                .iter()
                .zip(quarters)
                .map(|(label, points)| format!("{label}:{points}"))
                .collect::<Vec<_>>()
                .join(" "),
            ReportStyle::Bracketed => {
                let points: Vec<String> = quarters.iter().map(u32::to_string).collect();
                format!("[{}]", points.join(", "))
            }
        }
    }
}
