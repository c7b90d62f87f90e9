use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{Game, GamePeriod, GameState, League, LeagueFilter, Team, TeamRecord};

/// Scoreboard catalog: the teams and games served by /api/scores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCatalog {
    pub teams: Vec<Team>,
    pub games: Vec<Game>,
}

impl FixtureCatalog {
    /// Load a catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read fixtures file")?;

        let catalog: FixtureCatalog =
            serde_json::from_str(&content).context("Failed to parse fixtures JSON")?;

        info!(
            "Loaded {} teams and {} games from {}",
            catalog.teams.len(),
            catalog.games.len(),
            path.display()
        );

        Ok(catalog)
    }

    /// Games for a date and league selection.
    ///
    /// A requested date restricts the slate to that day; without one the
    /// whole slate is returned.
    pub fn games_on(&self, date: Option<NaiveDate>, filter: LeagueFilter) -> Vec<Game> {
        self.games
            .iter()
            .filter(|game| date.map_or(true, |d| game.date == d))
            .filter(|game| filter.matches(game.league))
            .cloned()
            .collect()
    }

    /// Look up a team by id
    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.id == id)
    }

    /// Games involving any of the given teams
    pub fn games_for_teams(&self, team_ids: &[String]) -> Vec<Game> {
        self.games
            .iter()
            .filter(|game| {
                team_ids
                    .iter()
                    .any(|id| *id == game.home_team.id || *id == game.away_team.id)
            })
            .cloned()
            .collect()
    }

    /// Builtin slate used when no fixtures file is present
    pub fn builtin() -> Self {
        let slate = NaiveDate::from_ymd_opt(2025, 9, 17).expect("valid slate date");

        let celtics = team(
            "bos",
            "BOS",
            "Celtics",
            "https://images.unsplash.com/photo-1546519638-68e109498ffc?w=100&h=100&fit=crop",
            League::Nba,
            45,
            12,
        );
        let knicks = team(
            "nyk",
            "NYK",
            "Knicks",
            "https://images.unsplash.com/photo-1546519638-68e109498ffc?w=100&h=100&fit=crop",
            League::Nba,
            38,
            19,
        );
        let lakers = team(
            "lal",
            "LAL",
            "Lakers",
            "https://images.unsplash.com/photo-1546519638-68e109498ffc?w=100&h=100&fit=crop",
            League::Nba,
            42,
            15,
        );
        let yankees = team(
            "nyy",
            "NYY",
            "Yankees",
            "https://images.unsplash.com/photo-1566577739112-5180d4bf9390?w=100&h=100&fit=crop",
            League::Mlb,
            82,
            45,
        );
        let red_sox = team(
            "bos-mlb",
            "BOS",
            "Red Sox",
            "https://images.unsplash.com/photo-1566577739112-5180d4bf9390?w=100&h=100&fit=crop",
            League::Mlb,
            78,
            49,
        );
        let chiefs = team(
            "kc",
            "KC",
            "Chiefs",
            "https://images.unsplash.com/photo-1577223625816-7546f13df25d?w=100&h=100&fit=crop",
            League::Nfl,
            12,
            3,
        );

        let games = vec![
            Game {
                id: "1".to_string(),
                league: League::Nba,
                date: slate,
                state: GameState::Live,
                status_text: "Q2 04:52".to_string(),
                home_team: celtics.clone(),
                away_team: knicks.clone(),
                home_score: 52,
                away_score: 48,
                periods: vec![period("Q1", 28, 25), period("Q2", 24, 23)],
                start_time: None,
            },
            Game {
                id: "2".to_string(),
                league: League::Nba,
                date: slate,
                state: GameState::Upcoming,
                status_text: "8:00 PM ET".to_string(),
                home_team: lakers.clone(),
                away_team: celtics.clone(),
                home_score: 0,
                away_score: 0,
                periods: vec![],
                start_time: Some("8:00 PM ET".to_string()),
            },
            Game {
                id: "3".to_string(),
                league: League::Nba,
                date: slate,
                state: GameState::Final,
                status_text: "Final".to_string(),
                home_team: knicks.clone(),
                away_team: lakers.clone(),
                home_score: 108,
                away_score: 112,
                periods: vec![
                    period("Q1", 25, 28),
                    period("Q2", 27, 24),
                    period("Q3", 28, 32),
                    period("Q4", 28, 28),
                ],
                start_time: None,
            },
            Game {
                id: "4".to_string(),
                league: League::Mlb,
                date: slate,
                state: GameState::Live,
                status_text: "Top 7th".to_string(),
                home_team: yankees.clone(),
                away_team: red_sox.clone(),
                home_score: 6,
                away_score: 4,
                periods: vec![
                    period("1", 1, 0),
                    period("2", 0, 2),
                    period("3", 2, 1),
                    period("4", 1, 0),
                    period("5", 0, 1),
                    period("6", 2, 0),
                ],
                start_time: None,
            },
            Game {
                id: "5".to_string(),
                league: League::Nfl,
                date: slate,
                state: GameState::Upcoming,
                status_text: "Sun 1:00 PM ET".to_string(),
                home_team: chiefs.clone(),
                away_team: celtics.clone(),
                home_score: 0,
                away_score: 0,
                periods: vec![],
                start_time: Some("Sun 1:00 PM ET".to_string()),
            },
        ];

        Self {
            teams: vec![celtics, knicks, lakers, yankees, red_sox, chiefs],
            games,
        }
    }
}

fn team(
    id: &str,
    abbr: &str,
    name: &str,
    logo: &str,
    league: League,
    wins: u32,
    losses: u32,
) -> Team {
    Team {
        id: id.to_string(),
        abbr: abbr.to_string(),
        name: name.to_string(),
        logo: logo.to_string(),
        league,
        record: Some(TeamRecord { wins, losses }),
    }
}

fn period(label: &str, home: i32, away: i32) -> GamePeriod {
    GamePeriod {
        label: label.to_string(),
        home,
        away,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slate() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 17).unwrap()
    }

    #[test]
    fn full_slate_without_filters() {
        let catalog = FixtureCatalog::builtin();
        assert_eq!(catalog.games_on(None, LeagueFilter::All).len(), 5);
    }

    #[test]
    fn filters_by_league() {
        let catalog = FixtureCatalog::builtin();

        let nba = catalog.games_on(None, LeagueFilter::Only(League::Nba));
        assert_eq!(nba.len(), 3);
        assert!(nba.iter().all(|g| g.league == League::Nba));

        let mlb = catalog.games_on(None, LeagueFilter::Only(League::Mlb));
        assert_eq!(mlb.len(), 1);
    }

    #[test]
    fn off_slate_date_returns_no_games() {
        let catalog = FixtureCatalog::builtin();
        let other_day = NaiveDate::from_ymd_opt(2025, 9, 18).unwrap();

        assert!(catalog.games_on(Some(other_day), LeagueFilter::All).is_empty());
        assert_eq!(catalog.games_on(Some(slate()), LeagueFilter::All).len(), 5);
    }

    #[test]
    fn team_lookup_by_id() {
        let catalog = FixtureCatalog::builtin();

        assert_eq!(catalog.team("bos").map(|t| t.name.as_str()), Some("Celtics"));
        assert!(catalog.team("nope").is_none());
    }

    #[test]
    fn games_for_teams_spans_home_and_away() {
        let catalog = FixtureCatalog::builtin();

        let games = catalog.games_for_teams(&["bos".to_string()]);
        let ids: Vec<&str> = games.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "5"]);

        assert!(catalog.games_for_teams(&[]).is_empty());
    }

    #[test]
    fn catalog_parses_from_json_file_format() {
        let json = serde_json::to_string(&FixtureCatalog::builtin()).unwrap();
        let parsed: FixtureCatalog = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.teams.len(), 6);
        assert_eq!(parsed.games.len(), 5);
    }
}
