//! Static registry of NBA team identities
//!
//! Every franchise is listed once with its full name, tri-code, league id,
//! nickname and the slug used in league URLs. The scoreboard data layer uses
//! these records to attach identity to the raw team entries of a snapshot.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Identity of a single franchise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TeamIdentity {
    pub full_name: &'static str,
    pub abbreviation: &'static str,
    pub id: u32,
    pub nickname: &'static str,
    pub slug: &'static str,
}

impl fmt::Display for TeamIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) id={} nickname={} slug={}",
            self.full_name, self.abbreviation, self.id, self.nickname, self.slug
        )
    }
}

const fn team(
    full_name: &'static str,
    abbreviation: &'static str,
    id: u32,
    nickname: &'static str,
    slug: &'static str,
) -> TeamIdentity {
    TeamIdentity {
        full_name,
        abbreviation,
        id,
        nickname,
        slug,
    }
}

/// All thirty franchises, alphabetical by city.
pub static TEAMS: [TeamIdentity; 30] = [
    team("Atlanta Hawks", "ATL", 1610612737, "Hawks", "hawks"),
    team("Boston Celtics", "BOS", 1610612738, "Celtics", "celtics"),
    team("Brooklyn Nets", "BKN", 1610612751, "Nets", "nets"),
    team("Charlotte Hornets", "CHA", 1610612766, "Hornets", "hornets"),
    team("Chicago Bulls", "CHI", 1610612741, "Bulls", "bulls"),
    team("Cleveland Cavaliers", "CLE", 1610612739, "Cavaliers", "cavaliers"),
    team("Dallas Mavericks", "DAL", 1610612742, "Mavericks", "mavericks"),
    team("Denver Nuggets", "DEN", 1610612743, "Nuggets", "nuggets"),
    team("Detroit Pistons", "DET", 1610612765, "Pistons", "pistons"),
    team("Golden State Warriors", "GSW", 1610612744, "Warriors", "warriors"),
    team("Houston Rockets", "HOU", 1610612745, "Rockets", "rockets"),
    team("Indiana Pacers", "IND", 1610612754, "Pacers", "pacers"),
    team("LA Clippers", "LAC", 1610612746, "Clippers", "clippers"),
    team("Los Angeles Lakers", "LAL", 1610612747, "Lakers", "lakers"),
    team("Memphis Grizzlies", "MEM", 1610612763, "Grizzlies", "grizzlies"),
    team("Miami Heat", "MIA", 1610612748, "Heat", "heat"),
    team("Milwaukee Bucks", "MIL", 1610612749, "Bucks", "bucks"),
    team("Minnesota Timberwolves", "MIN", 1610612750, "Timberwolves", "timberwolves"),
    team("New Orleans Pelicans", "NOP", 1610612740, "Pelicans", "pelicans"),
    team("New York Knicks", "NYK", 1610612752, "Knicks", "knicks"),
    team("Oklahoma City Thunder", "OKC", 1610612760, "Thunder", "thunder"),
    team("Orlando Magic", "ORL", 1610612753, "Magic", "magic"),
    team("Philadelphia 76ers", "PHI", 1610612755, "76ers", "sixers"),
    team("Phoenix Suns", "PHX", 1610612756, "Suns", "suns"),
    team("Portland Trail Blazers", "POR", 1610612757, "Trail Blazers", "blazers"),
    team("Sacramento Kings", "SAC", 1610612758, "Kings", "kings"),
    team("San Antonio Spurs", "SAS", 1610612759, "Spurs", "spurs"),
    team("Toronto Raptors", "TOR", 1610612761, "Raptors", "raptors"),
    team("Utah Jazz", "UTA", 1610612762, "Jazz", "jazz"),
    team("Washington Wizards", "WAS", 1610612764, "Wizards", "wizards"),
];

static BY_ABBREVIATION: LazyLock<HashMap<&'static str, &'static TeamIdentity>> =
    LazyLock::new(|| TEAMS.iter().map(|t| (t.abbreviation, t)).collect());

static BY_ID: LazyLock<HashMap<u32, &'static TeamIdentity>> =
    LazyLock::new(|| TEAMS.iter().map(|t| (t.id, t)).collect());

static BY_SLUG: LazyLock<HashMap<&'static str, &'static TeamIdentity>> =
    LazyLock::new(|| TEAMS.iter().map(|t| (t.slug, t)).collect());

/// Returns every team in table order.
pub fn all() -> &'static [TeamIdentity] {
    &TEAMS
}

/// Looks a team up by tri-code, ignoring case.
///
/// # Examples
/// ```
/// use nba_boxscore::teams;
///
/// assert_eq!(teams::by_abbreviation("orl").map(|t| t.nickname), Some("Magic"));
/// assert!(teams::by_abbreviation("XYZ").is_none());
/// ```
pub fn by_abbreviation(code: &str) -> Option<&'static TeamIdentity> {
    BY_ABBREVIATION
        .get(code.trim().to_ascii_uppercase().as_str())
        .copied()
}

/// Looks a team up by its numeric league id.
pub fn by_id(id: u32) -> Option<&'static TeamIdentity> {
    BY_ID.get(&id).copied()
}

/// Looks a team up by URL slug, ignoring case.
pub fn by_slug(slug: &str) -> Option<&'static TeamIdentity> {
    BY_SLUG
        .get(slug.trim().to_ascii_lowercase().as_str())
        .copied()
}

/// Resolves free-form user input to a team.
///
/// Tries the tri-code, the slug, the numeric id and finally the nickname.
pub fn find(query: &str) -> Option<&'static TeamIdentity> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    by_abbreviation(query)
        .or_else(|| by_slug(query))
        .or_else(|| query.parse::<u32>().ok().and_then(by_id))
        .or_else(|| {
            TEAMS
                .iter()
                .find(|t| t.nickname.eq_ignore_ascii_case(query))
        })
}
