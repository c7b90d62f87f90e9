use chrono::Utc;

use crate::models::{AiBet, AiInsights, BestBet, PlayerStreak, TeamStreak, Trend};

/// Current insights payload for the AI insights screen.
///
/// Model output is not wired in; this serves the curated slate the screen
/// renders, stamped with the serve time.
pub fn latest_insights() -> AiInsights {
    let top_bets = vec![
        AiBet {
            id: "1".to_string(),
            league: "NBA".to_string(),
            matchup: "Celtics vs Knicks".to_string(),
            bet_type: "Spread".to_string(),
            ai_confidence: 0.68,
            streak_info: "Celtics 4W, Knicks 2L".to_string(),
            odds: Some("-3.5".to_string()),
            recommendation: "Celtics to cover the spread".to_string(),
        },
        AiBet {
            id: "2".to_string(),
            league: "NFL".to_string(),
            matchup: "Chiefs vs Bills".to_string(),
            bet_type: "Over/Under".to_string(),
            ai_confidence: 0.72,
            streak_info: "Over hit in 6 of last 8".to_string(),
            odds: Some("O47.5".to_string()),
            recommendation: "Take the Over".to_string(),
        },
        AiBet {
            id: "3".to_string(),
            league: "MLB".to_string(),
            matchup: "Yankees vs Red Sox".to_string(),
            bet_type: "Moneyline".to_string(),
            ai_confidence: 0.61,
            streak_info: "Yankees 7-3 vs Boston".to_string(),
            odds: Some("-140".to_string()),
            recommendation: "Yankees to win".to_string(),
        },
    ];

    let team_streaks = vec![
        TeamStreak {
            id: "1".to_string(),
            team: "Yankees".to_string(),
            streak: "Won 6 of last 7".to_string(),
            record: "12-3".to_string(),
            trend: Trend::Hot,
        },
        TeamStreak {
            id: "2".to_string(),
            team: "Lakers".to_string(),
            streak: "Lost 4 straight".to_string(),
            record: "8-7".to_string(),
            trend: Trend::Cold,
        },
        TeamStreak {
            id: "3".to_string(),
            team: "Chiefs".to_string(),
            streak: "5-0 ATS last 5".to_string(),
            record: "11-4".to_string(),
            trend: Trend::Hot,
        },
        TeamStreak {
            id: "4".to_string(),
            team: "Celtics".to_string(),
            streak: "8-2 at home".to_string(),
            record: "13-2".to_string(),
            trend: Trend::Hot,
        },
    ];

    let player_streaks = vec![
        PlayerStreak {
            id: "1".to_string(),
            player: "LeBron James".to_string(),
            metric: "Points".to_string(),
            last5_avg: 32.4,
            streak: "5 games 30+".to_string(),
            trend: Trend::Hot,
            team: "Lakers".to_string(),
        },
        PlayerStreak {
            id: "2".to_string(),
            player: "Aaron Judge".to_string(),
            metric: "Home Runs".to_string(),
            last5_avg: 1.2,
            streak: "3 HR in last 5".to_string(),
            trend: Trend::Hot,
            team: "Yankees".to_string(),
        },
        PlayerStreak {
            id: "3".to_string(),
            player: "Patrick Mahomes".to_string(),
            metric: "Passing TDs".to_string(),
            last5_avg: 2.8,
            streak: "8 TD, 1 INT last 3".to_string(),
            trend: Trend::Hot,
            team: "Chiefs".to_string(),
        },
        PlayerStreak {
            id: "4".to_string(),
            player: "Jayson Tatum".to_string(),
            metric: "Points".to_string(),
            last5_avg: 28.6,
            streak: "4 games 25+".to_string(),
            trend: Trend::Hot,
            team: "Celtics".to_string(),
        },
    ];

    AiInsights {
        top_bets,
        team_streaks,
        player_streaks,
        best_bet: BestBet {
            recommendation: "Celtics -3.5 vs Knicks".to_string(),
            confidence: 68,
            reasoning: "Celtics are 4-0 in last 4 meetings and have superior home court \
                        advantage. Knicks struggling on the road."
                .to_string(),
        },
        last_updated: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_values_are_probabilities() {
        let insights = latest_insights();

        assert!(!insights.top_bets.is_empty());
        assert!(insights
            .top_bets
            .iter()
            .all(|b| (0.0..=1.0).contains(&b.ai_confidence)));
        assert!(insights.best_bet.confidence <= 100);
    }
}
