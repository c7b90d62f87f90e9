use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::League;

/// A user-recorded wager tracked on the My Bets screen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bet {
    /// Unique bet identifier, assigned by the store at creation
    pub id: String,

    /// Team or player the bet is on
    pub team_player: String,

    /// League the bet belongs to
    pub league: League,

    /// Bet category (spread, moneyline, over/under, ...)
    pub bet_type: String,

    /// Amount wagered in dollars
    pub wager_amount: f64,

    /// Outcome status, updated as the real-world result resolves
    pub status: BetStatus,

    /// Optional free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// When the bet was recorded
    pub created_at: DateTime<Utc>,
}

/// Input for recording a bet; the store assigns id and timestamp
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBet {
    pub team_player: String,
    pub league: League,
    pub bet_type: String,
    pub wager_amount: f64,
    #[serde(default)]
    pub status: BetStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Outcome status of a bet
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum BetStatus {
    /// Outcome not yet decided
    #[default]
    Pending,
    /// Game currently in progress
    Live,
    Won,
    Lost,
}

impl BetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BetStatus::Pending => "Pending",
            BetStatus::Live => "Live",
            BetStatus::Won => "Won",
            BetStatus::Lost => "Lost",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(BetStatus::Pending),
            "Live" => Some(BetStatus::Live),
            "Won" => Some(BetStatus::Won),
            "Lost" => Some(BetStatus::Lost),
            _ => None,
        }
    }
}

/// Summary metrics derived from the current bet list
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BetStats {
    pub total_bets: u32,
    pub wins: u32,
    pub losses: u32,
    /// Pending plus live bets
    pub pending: u32,
    /// Wins over decided bets, as a rounded percentage
    pub win_percentage: u32,
    pub total_wagered: f64,
    pub total_won: f64,
    /// Rounded percentage return relative to the total wagered
    pub roi: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_storage_form() {
        for status in [
            BetStatus::Pending,
            BetStatus::Live,
            BetStatus::Won,
            BetStatus::Lost,
        ] {
            assert_eq!(BetStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(BetStatus::parse("Void"), None);
    }

    #[test]
    fn status_serializes_as_screen_labels() {
        let json = serde_json::to_string(&BetStatus::Won).unwrap();
        assert_eq!(json, "\"Won\"");

        let parsed: BetStatus = serde_json::from_str("\"Live\"").unwrap();
        assert_eq!(parsed, BetStatus::Live);
    }

    #[test]
    fn new_bet_defaults_to_pending() {
        let parsed: NewBet = serde_json::from_str(
            r#"{"teamPlayer":"Celtics","league":"NBA","betType":"Spread","wagerAmount":50.0}"#,
        )
        .unwrap();

        assert_eq!(parsed.status, BetStatus::Pending);
        assert!(parsed.notes.is_none());
    }
}
