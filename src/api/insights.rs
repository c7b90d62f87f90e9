use actix_web::{get, HttpResponse, Responder};

use crate::insights::latest_insights;

/// Insights payload for the AI insights screen
#[get("/api/insights")]
pub async fn get_insights() -> impl Responder {
    HttpResponse::Ok().json(latest_insights())
}
