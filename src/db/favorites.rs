use chrono::Utc;
use sqlx::{Pool, Sqlite};
use tracing::info;

use crate::db::open_pool;
use crate::error::StoreError;

/// SQLite store for followed teams
pub struct FavoriteStore {
    pool: Pool<Sqlite>,
}

impl FavoriteStore {
    /// Create a new favorite store and initialize the database
    pub async fn new(database_url: &str) -> Result<Self, StoreError> {
        let pool = open_pool(database_url).await?;

        let store = Self { pool };
        store.init_schema().await?;

        info!("Favorite store initialized");
        Ok(store)
    }

    /// Initialize database schema
    async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS favorite_teams (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                team_id TEXT NOT NULL UNIQUE,
                added_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Follow a team; following an already-followed team is a no-op
    pub async fn add(&self, team_id: &str) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO favorite_teams (team_id, added_at)
            VALUES (?, ?)
            "#,
        )
        .bind(team_id)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Unfollow a team; returns whether it was followed
    pub async fn remove(&self, team_id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM favorite_teams WHERE team_id = ?")
            .bind(team_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Followed team ids in the order they were added
    pub async fn list(&self) -> Result<Vec<String>, StoreError> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT team_id FROM favorite_teams ORDER BY seq ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(|r| r.0).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

    use super::*;

    async fn memory_store() -> FavoriteStore {
        let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap();

        let store = FavoriteStore { pool };
        store.init_schema().await.unwrap();
        store
    }

    #[tokio::test]
    async fn add_is_idempotent() {
        let store = memory_store().await;

        store.add("bos").await.unwrap();
        store.add("bos").await.unwrap();

        assert_eq!(store.list().await.unwrap(), vec!["bos".to_string()]);
    }

    #[tokio::test]
    async fn remove_reports_whether_followed() {
        let store = memory_store().await;

        store.add("kc").await.unwrap();
        assert!(store.remove("kc").await.unwrap());
        assert!(!store.remove("kc").await.unwrap());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_preserves_follow_order() {
        let store = memory_store().await;

        store.add("nyy").await.unwrap();
        store.add("bos").await.unwrap();
        store.add("lal").await.unwrap();

        assert_eq!(
            store.list().await.unwrap(),
            vec!["nyy".to_string(), "bos".to_string(), "lal".to_string()]
        );
    }
}
