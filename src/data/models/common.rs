use crate::constants::QUARTERS;

/// Per-quarter point totals for one team in one game.
///
/// Regulation is always four quarters. Periods past the fourth are kept as
/// overtime and are not part of the quarter line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LineScore {
    quarters: [u32; QUARTERS],
    overtime: Vec<u32>,
}

impl LineScore {
    pub fn new(quarters: [u32; QUARTERS]) -> Self {
        Self {
            quarters,
            overtime: Vec::new(),
        }
    }

    /// Builds a line score from the period list of a scoreboard entry.
    ///
    /// Missing quarters count as zero, so a game that has not started or is
    /// still in progress still yields four values.
    pub fn from_periods(periods: &[u32]) -> Self {
        let mut quarters = [0; QUARTERS];
        for (slot, points) in quarters.iter_mut().zip(periods) {
            *slot = *points;
        }
        let overtime = periods.iter().skip(QUARTERS).copied().collect();
        Self { quarters, overtime }
    }

    pub fn all(&self) -> [u32; QUARTERS] {
        self.quarters
    }

    pub fn overtime(&self) -> &[u32] {
        &self.overtime
    }
}

/// Record and score of one side of a game.
pub trait TeamStats {
    /// Tri-code shown in score lines, e.g. `ORL`
    fn name(&self) -> &str;
    fn win(&self) -> u32;
    fn loss(&self) -> u32;
    fn score(&self) -> u32;
    fn line_score(&self) -> LineScore;
}

/// One game with its two sides and a highlight label.
pub trait GameStats {
    fn home_team(&self) -> &dyn TeamStats;
    fn visit_team(&self) -> &dyn TeamStats;
    fn highlight(&self) -> &str;
}

/// An ordered set of games played on one date.
pub trait GamesStats {
    fn games(&self) -> Vec<&dyn GameStats>;

    /// Date label printed in report headers
    fn date(&self) -> String;

    fn len(&self) -> usize {
        self.games().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
