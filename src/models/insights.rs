use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An AI-recommended bet shown in the insights panel
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiBet {
    pub id: String,
    pub league: String,
    /// Matchup label (e.g. "Celtics vs Knicks")
    pub matchup: String,
    #[serde(rename = "type")]
    pub bet_type: String,
    /// Model confidence, 0.0 - 1.0
    pub ai_confidence: f64,
    pub streak_info: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub odds: Option<String>,
    pub recommendation: String,
}

/// Hot/cold classification for streaks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Hot,
    Cold,
    Neutral,
}

/// Recent form of a team
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStreak {
    pub id: String,
    pub team: String,
    pub streak: String,
    pub record: String,
    pub trend: Trend,
}

/// Recent form of a player on a single metric
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStreak {
    pub id: String,
    pub player: String,
    pub metric: String,
    pub last5_avg: f64,
    pub streak: String,
    pub trend: Trend,
    pub team: String,
}

/// The single highest-conviction recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestBet {
    pub recommendation: String,
    /// Confidence as an integer percentage
    pub confidence: u32,
    pub reasoning: String,
}

/// Full insights payload for the insights screen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiInsights {
    pub top_bets: Vec<AiBet>,
    pub team_streaks: Vec<TeamStreak>,
    pub player_streaks: Vec<PlayerStreak>,
    pub best_bet: BestBet,
    pub last_updated: DateTime<Utc>,
}
