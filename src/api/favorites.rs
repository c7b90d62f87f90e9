use actix_web::{delete, get, put, web, HttpResponse};
use serde::Serialize;
use tracing::info;

use crate::api::AppState;
use crate::error::StoreError;
use crate::models::{Game, Team};

#[derive(Debug, Serialize)]
pub struct FavoriteTeamsResponse {
    pub teams: Vec<Team>,
}

#[derive(Debug, Serialize)]
pub struct FavoriteGamesResponse {
    pub games: Vec<Game>,
}

/// Followed teams, resolved against the fixture catalog
#[get("/api/favorites/teams")]
pub async fn favorite_teams(state: web::Data<AppState>) -> Result<HttpResponse, StoreError> {
    let ids = state.favorites.list().await?;
    let teams = ids
        .iter()
        .filter_map(|id| state.catalog.team(id).cloned())
        .collect();

    Ok(HttpResponse::Ok().json(FavoriteTeamsResponse { teams }))
}

/// Slate games involving a followed team
#[get("/api/favorites/games")]
pub async fn favorite_games(state: web::Data<AppState>) -> Result<HttpResponse, StoreError> {
    let ids = state.favorites.list().await?;
    let games = state.catalog.games_for_teams(&ids);

    Ok(HttpResponse::Ok().json(FavoriteGamesResponse { games }))
}

/// Follow a team
#[put("/api/favorites/teams/{team_id}")]
pub async fn add_favorite(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, StoreError> {
    let team_id = path.into_inner();

    if state.catalog.team(&team_id).is_none() {
        return Err(StoreError::NotFound(format!("no team with id {}", team_id)));
    }

    state.favorites.add(&team_id).await?;

    info!("Following team {}", team_id);
    Ok(HttpResponse::NoContent().finish())
}

/// Unfollow a team
#[delete("/api/favorites/teams/{team_id}")]
pub async fn remove_favorite(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, StoreError> {
    let team_id = path.into_inner();

    if !state.favorites.remove(&team_id).await? {
        return Err(StoreError::NotFound(format!(
            "{} is not a followed team",
            team_id
        )));
    }

    info!("Unfollowed team {}", team_id);
    Ok(HttpResponse::NoContent().finish())
}
