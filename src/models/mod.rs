pub mod bet;
pub mod insights;
pub mod sports;

pub use bet::{Bet, BetStats, BetStatus, NewBet};
pub use insights::{AiBet, AiInsights, BestBet, PlayerStreak, TeamStreak, Trend};
pub use sports::{Game, GamePeriod, GameState, League, LeagueFilter, Team, TeamRecord};
