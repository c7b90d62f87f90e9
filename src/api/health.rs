use actix_web::{get, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
    pub uptime_secs: u64,
    pub services: ServiceChecks,
}

#[derive(Debug, Serialize)]
pub struct ServiceChecks {
    pub api: &'static str,
    pub database: &'static str,
}

/// Liveness probe used by the debug screen
#[get("/api/health")]
pub async fn get_health(state: web::Data<AppState>) -> impl Responder {
    let database_ok = state.bets.ping().await;

    HttpResponse::Ok().json(HealthResponse {
        status: if database_ok { "healthy" } else { "degraded" },
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.started_at.elapsed().as_secs(),
        services: ServiceChecks {
            api: "operational",
            database: if database_ok {
                "operational"
            } else {
                "unavailable"
            },
        },
    })
}
