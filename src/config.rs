use std::env;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP API listens on
    pub port: u16,

    /// SQLite database path
    pub database_url: String,

    /// JSON file overriding the builtin scoreboard fixtures, if present
    pub fixtures_path: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8081".to_string())
                .parse()
                .context("PORT must be a valid port number")?,

            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:data/sports360.db".to_string()),

            fixtures_path: env::var("FIXTURES_PATH")
                .unwrap_or_else(|_| "data/fixtures.json".to_string()),
        })
    }
}
