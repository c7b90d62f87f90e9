use crate::models::{Bet, BetStats, BetStatus};

/// Derive summary metrics from the current bet list.
///
/// Pure and order-independent; an empty list yields the all-zero stats.
/// Won bets contribute their stake to `total_won`; payout odds are not
/// modeled, so ROI compares returned stake against total outlay.
pub fn compute_stats(bets: &[Bet]) -> BetStats {
    let mut wins = 0u32;
    let mut losses = 0u32;
    let mut pending = 0u32;
    let mut total_wagered = 0.0;
    let mut total_won = 0.0;

    for bet in bets {
        total_wagered += bet.wager_amount;

        match bet.status {
            BetStatus::Won => {
                wins += 1;
                total_won += bet.wager_amount;
            }
            BetStatus::Lost => losses += 1,
            BetStatus::Pending | BetStatus::Live => pending += 1,
        }
    }

    let decided = wins + losses;
    let win_percentage = if decided > 0 {
        (100.0 * f64::from(wins) / f64::from(decided)).round() as u32
    } else {
        0
    };

    let roi = if total_wagered > 0.0 {
        (100.0 * (total_won - total_wagered) / total_wagered).round() as i32
    } else {
        0
    };

    BetStats {
        total_bets: bets.len() as u32,
        wins,
        losses,
        pending,
        win_percentage,
        total_wagered,
        total_won,
        roi,
    }
}
