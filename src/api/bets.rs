use actix_web::{delete, get, post, web, HttpResponse};
use serde::Serialize;
use tracing::info;

use crate::api::AppState;
use crate::error::StoreError;
use crate::models::{Bet, BetStats, NewBet};
use crate::stats::compute_stats;

#[derive(Debug, Serialize)]
pub struct BetsResponse {
    pub bets: Vec<Bet>,
    pub stats: BetStats,
}

/// Tracked bets plus their derived summary stats
#[get("/api/bets")]
pub async fn list_bets(state: web::Data<AppState>) -> Result<HttpResponse, StoreError> {
    let bets = state.bets.list().await?;
    let stats = compute_stats(&bets);

    Ok(HttpResponse::Ok().json(BetsResponse { bets, stats }))
}

/// Record a new bet
#[post("/api/bets")]
pub async fn add_bet(
    state: web::Data<AppState>,
    payload: web::Json<NewBet>,
) -> Result<HttpResponse, StoreError> {
    let bet = state.bets.add(payload.into_inner()).await?;

    info!("Recorded bet {} on {}", bet.id, bet.team_player);
    Ok(HttpResponse::Created().json(bet))
}

/// Delete a tracked bet
#[delete("/api/bets/{id}")]
pub async fn delete_bet(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, StoreError> {
    let id = path.into_inner();
    state.bets.delete(&id).await?;

    info!("Deleted bet {}", id);
    Ok(HttpResponse::NoContent().finish())
}
