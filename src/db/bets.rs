use chrono::Utc;
use sqlx::{Pool, Sqlite};
use tracing::info;
use uuid::Uuid;

use crate::db::open_pool;
use crate::error::StoreError;
use crate::models::{Bet, BetStatus, League, NewBet};

/// SQLite store for tracked bets
pub struct BetStore {
    pool: Pool<Sqlite>,
}

impl BetStore {
    /// Create a new bet store and initialize the database
    pub async fn new(database_url: &str) -> Result<Self, StoreError> {
        let pool = open_pool(database_url).await?;

        let store = Self { pool };
        store.init_schema().await?;

        info!("Bet store initialized");
        Ok(store)
    }

    /// Initialize database schema
    async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS bets (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                team_player TEXT NOT NULL,
                league TEXT NOT NULL,
                bet_type TEXT NOT NULL,
                wager_amount REAL NOT NULL,
                status TEXT NOT NULL,
                notes TEXT,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_bets_status
            ON bets (status)
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All bets in insertion order
    pub async fn list(&self) -> Result<Vec<Bet>, StoreError> {
        let rows = sqlx::query_as::<_, BetRow>(
            r#"
            SELECT id, team_player, league, bet_type, wager_amount, status, notes, created_at
            FROM bets
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Bet::try_from).collect()
    }

    /// Record a new bet, assigning its id and creation timestamp
    pub async fn add(&self, new_bet: NewBet) -> Result<Bet, StoreError> {
        if !new_bet.wager_amount.is_finite() || new_bet.wager_amount < 0.0 {
            return Err(StoreError::Validation(format!(
                "wager amount must be a non-negative number, got {}",
                new_bet.wager_amount
            )));
        }

        let bet = Bet {
            id: Uuid::new_v4().to_string(),
            team_player: new_bet.team_player,
            league: new_bet.league,
            bet_type: new_bet.bet_type,
            wager_amount: new_bet.wager_amount,
            status: new_bet.status,
            notes: new_bet.notes,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO bets (
                id,
                team_player,
                league,
                bet_type,
                wager_amount,
                status,
                notes,
                created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&bet.id)
        .bind(&bet.team_player)
        .bind(bet.league.as_str())
        .bind(&bet.bet_type)
        .bind(bet.wager_amount)
        .bind(bet.status.as_str())
        .bind(&bet.notes)
        .bind(bet.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(bet)
    }

    /// Delete a bet by id.
    ///
    /// Deleting an id that does not exist is an error, not a no-op.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM bets WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("no bet with id {}", id)));
        }

        Ok(())
    }

    /// Number of tracked bets
    pub async fn count(&self) -> Result<i64, StoreError> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bets")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.0)
    }

    /// Connectivity check for the health endpoint
    pub async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

/// Database row representation
#[derive(sqlx::FromRow)]
struct BetRow {
    id: String,
    team_player: String,
    league: String,
    bet_type: String,
    wager_amount: f64,
    status: String,
    notes: Option<String>,
    created_at: String,
}

impl TryFrom<BetRow> for Bet {
    type Error = StoreError;

    fn try_from(row: BetRow) -> Result<Self, Self::Error> {
        let league = League::parse(&row.league).ok_or_else(|| {
            StoreError::Persistence(format!("unknown league in bets table: {}", row.league))
        })?;

        let status = BetStatus::parse(&row.status).ok_or_else(|| {
            StoreError::Persistence(format!("unknown status in bets table: {}", row.status))
        })?;

        Ok(Bet {
            id: row.id,
            team_player: row.team_player,
            league,
            bet_type: row.bet_type,
            wager_amount: row.wager_amount,
            status,
            notes: row.notes,
            created_at: chrono::DateTime::parse_from_rfc3339(&row.created_at)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .unwrap_or_else(|_| chrono::Utc::now()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

    use super::*;

    /// In-memory store on a single connection so every query sees the same database
    async fn memory_store() -> BetStore {
        let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap();

        let store = BetStore { pool };
        store.init_schema().await.unwrap();
        store
    }

    fn sample_bet(wager: f64) -> NewBet {
        NewBet {
            team_player: "Celtics".to_string(),
            league: League::Nba,
            bet_type: "Spread".to_string(),
            wager_amount: wager,
            status: BetStatus::Pending,
            notes: None,
        }
    }

    #[tokio::test]
    async fn add_assigns_id_and_persists() {
        let store = memory_store().await;

        let bet = store.add(sample_bet(25.0)).await.unwrap();
        assert!(!bet.id.is_empty());
        assert_eq!(bet.wager_amount, 25.0);

        let bets = store.list().await.unwrap();
        assert_eq!(bets.len(), 1);
        assert_eq!(bets[0].id, bet.id);
        assert_eq!(bets[0].wager_amount, 25.0);
        assert_eq!(bets[0].status, BetStatus::Pending);
    }

    #[tokio::test]
    async fn add_rejects_negative_wager() {
        let store = memory_store().await;

        let err = store.add(sample_bet(-5.0)).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ids_are_unique_across_adds() {
        let store = memory_store().await;

        let first = store.add(sample_bet(10.0)).await.unwrap();
        let second = store.add(sample_bet(10.0)).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = memory_store().await;

        let first = store.add(sample_bet(10.0)).await.unwrap();
        let second = store.add(sample_bet(20.0)).await.unwrap();
        let third = store.add(sample_bet(30.0)).await.unwrap();

        let ids: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec![first.id, second.id, third.id]);
    }

    #[tokio::test]
    async fn delete_removes_only_that_bet() {
        let store = memory_store().await;

        let keep = store.add(sample_bet(10.0)).await.unwrap();
        let gone = store.add(sample_bet(20.0)).await.unwrap();

        store.delete(&gone.id).await.unwrap();

        let bets = store.list().await.unwrap();
        assert_eq!(bets.len(), 1);
        assert_eq!(bets[0].id, keep.id);
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let store = memory_store().await;

        let err = store.delete("missing").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn add_then_delete_restores_previous_list() {
        let store = memory_store().await;

        store.add(sample_bet(10.0)).await.unwrap();
        let before: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.id)
            .collect();

        let added = store.add(sample_bet(99.0)).await.unwrap();
        store.delete(&added.id).await.unwrap();

        let after: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn count_tracks_mutations() {
        let store = memory_store().await;
        assert_eq!(store.count().await.unwrap(), 0);

        let bet = store.add(sample_bet(10.0)).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);

        store.delete(&bet.id).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
