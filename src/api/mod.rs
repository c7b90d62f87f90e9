pub mod bets;
pub mod favorites;
pub mod health;
pub mod insights;
pub mod scores;

use std::time::Instant;

use actix_web::web;

use crate::db::{BetStore, FavoriteStore};
use crate::fixtures::FixtureCatalog;

/// Shared application state handed to every handler
pub struct AppState {
    pub bets: BetStore,
    pub favorites: FavoriteStore,
    pub catalog: FixtureCatalog,
    pub started_at: Instant,
}

/// Register all API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(scores::get_scores)
        .service(health::get_health)
        .service(bets::list_bets)
        .service(bets::add_bet)
        .service(bets::delete_bet)
        .service(favorites::favorite_teams)
        .service(favorites::favorite_games)
        .service(favorites::add_favorite)
        .service(favorites::remove_favorite)
        .service(insights::get_insights);
}
