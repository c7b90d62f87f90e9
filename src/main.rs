mod api;
mod config;
mod db;
mod error;
mod fixtures;
mod insights;
mod models;
mod stats;

use std::path::Path;
use std::time::Instant;

use actix_web::{web, App, HttpServer};
use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::AppState;
use crate::config::Config;
use crate::db::{BetStore, FavoriteStore};
use crate::fixtures::FixtureCatalog;

#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sports360_backend=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting sports360-backend");

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded");

    // Initialize stores
    let bets = BetStore::new(&config.database_url).await?;
    let favorites = FavoriteStore::new(&config.database_url).await?;
    info!("Database initialized");

    // Load scoreboard fixtures
    let catalog = load_catalog(&config)?;
    info!(
        "Fixture catalog ready ({} teams, {} games)",
        catalog.teams.len(),
        catalog.games.len()
    );

    let state = web::Data::new(AppState {
        bets,
        favorites,
        catalog,
        started_at: Instant::now(),
    });

    let port = config.port;
    info!("Listening on port {}", port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    info!("Shutting down sports360-backend");
    Ok(())
}

/// Load scoreboard fixtures from the configured JSON file or fall back to the builtin slate
fn load_catalog(config: &Config) -> Result<FixtureCatalog> {
    let path = Path::new(&config.fixtures_path);

    if path.exists() {
        FixtureCatalog::load_from_file(path)
    } else {
        info!("No fixtures file found, using builtin slate");
        Ok(FixtureCatalog::builtin())
    }
}
