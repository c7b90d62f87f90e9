use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Leagues covered by the scoreboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum League {
    Mlb,
    Nba,
    Nfl,
}

impl League {
    pub fn as_str(&self) -> &'static str {
        match self {
            League::Mlb => "MLB",
            League::Nba => "NBA",
            League::Nfl => "NFL",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "MLB" => Some(League::Mlb),
            "NBA" => Some(League::Nba),
            "NFL" => Some(League::Nfl),
            _ => None,
        }
    }
}

/// League selection for scoreboard queries; ALL places no restriction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LeagueFilter {
    #[default]
    All,
    Only(League),
}

impl LeagueFilter {
    pub fn parse(s: &str) -> Option<Self> {
        if s == "ALL" {
            return Some(LeagueFilter::All);
        }
        League::parse(s).map(LeagueFilter::Only)
    }

    pub fn matches(&self, league: League) -> bool {
        match self {
            LeagueFilter::All => true,
            LeagueFilter::Only(selected) => *selected == league,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LeagueFilter::All => "ALL",
            LeagueFilter::Only(league) => league.as_str(),
        }
    }
}

/// Progress state of a game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameState {
    Live,
    Upcoming,
    Final,
}

/// Season win/loss record
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TeamRecord {
    pub wins: u32,
    pub losses: u32,
}

/// A team on the scoreboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub abbr: String,
    pub name: String,
    pub logo: String,
    pub league: League,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<TeamRecord>,
}

/// Per-period line score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamePeriod {
    pub label: String,
    pub home: i32,
    pub away: i32,
}

/// A scheduled, live, or finished game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub league: League,
    pub date: NaiveDate,
    pub state: GameState,
    /// Display text for the current state ("Q2 04:52", "Final", ...)
    pub status_text: String,
    pub home_team: Team,
    pub away_team: Team,
    pub home_score: i32,
    pub away_score: i32,
    pub periods: Vec<GamePeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn league_codes_round_trip() {
        for league in [League::Mlb, League::Nba, League::Nfl] {
            assert_eq!(League::parse(league.as_str()), Some(league));
        }
        assert_eq!(League::parse("NHL"), None);
    }

    #[test]
    fn filter_accepts_all_and_league_codes() {
        assert_eq!(LeagueFilter::parse("ALL"), Some(LeagueFilter::All));
        assert_eq!(
            LeagueFilter::parse("NBA"),
            Some(LeagueFilter::Only(League::Nba))
        );
        assert_eq!(LeagueFilter::parse("nba"), None);
    }

    #[test]
    fn all_filter_matches_every_league() {
        assert!(LeagueFilter::All.matches(League::Mlb));
        assert!(LeagueFilter::Only(League::Nfl).matches(League::Nfl));
        assert!(!LeagueFilter::Only(League::Nfl).matches(League::Nba));
    }
}
