use actix_web::{get, web, HttpResponse};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::AppState;
use crate::error::StoreError;
use crate::models::{Game, LeagueFilter};

#[derive(Debug, Deserialize)]
pub struct ScoresQuery {
    date: Option<String>,
    league: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoresResponse {
    pub games: Vec<Game>,
    pub meta: ScoresMeta,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoresMeta {
    /// Requested date, when one was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub league: String,
    pub count: usize,
    pub timestamp: DateTime<Utc>,
}

/// Scoreboard for a date and league selection
#[get("/api/scores")]
pub async fn get_scores(
    state: web::Data<AppState>,
    query: web::Query<ScoresQuery>,
) -> Result<HttpResponse, StoreError> {
    let filter = match query.league.as_deref() {
        Some(raw) => LeagueFilter::parse(raw)
            .ok_or_else(|| StoreError::Validation(format!("unknown league: {}", raw)))?,
        None => LeagueFilter::All,
    };

    let date = query
        .date
        .as_deref()
        .map(|raw| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| StoreError::Validation(format!("invalid date: {}", raw)))
        })
        .transpose()?;

    let games = state.catalog.games_on(date, filter);

    debug!(
        "Returning {} games for date {:?}, league {}",
        games.len(),
        date,
        filter.as_str()
    );

    let meta = ScoresMeta {
        date,
        league: filter.as_str().to_string(),
        count: games.len(),
        timestamp: Utc::now(),
    };

    Ok(HttpResponse::Ok().json(ScoresResponse { games, meta }))
}
