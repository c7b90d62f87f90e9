pub mod bets;
pub mod favorites;

pub use bets::BetStore;
pub use favorites::FavoriteStore;

use std::str::FromStr;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};

use crate::error::StoreError;

/// Open a SQLite pool, creating the database file and its directory if needed
pub(crate) async fn open_pool(database_url: &str) -> Result<Pool<Sqlite>, StoreError> {
    if let Some(path) = database_url.strip_prefix("sqlite:") {
        if let Some(parent) = std::path::Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Persistence(format!("failed to create database directory: {}", e))
                })?;
            }
        }
    }

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StoreError::Persistence(format!("invalid database URL: {}", e)))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
