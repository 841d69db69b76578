use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;
use tracing::info;

// The database URL for the production database
pub const DEFAULT_DATABASE_URL: &str = "sqlite:subway.db";

/// DbConnection owns the SQLite pool shared by all repositories
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Open (and create if missing) the database at `url`, then set up the schema
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            info!("Creating database at {}", url);
            Sqlite::create_database(url)
                .await
                .with_context(|| format!("Failed to create database {}", url))?;
        }

        let pool = SqlitePool::connect(url)
            .await
            .with_context(|| format!("Failed to connect to {}", url))?;

        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Open a private in-memory database.
    ///
    /// The pool holds a single connection that is never reaped, so the data
    /// lives exactly as long as this connection handle.
    pub async fn init_in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .context("Failed to open in-memory database")?;

        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS stations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS lines (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                color TEXT NOT NULL,
                up_station_id INTEGER NOT NULL,
                down_station_id INTEGER NOT NULL,
                distance INTEGER NOT NULL CHECK (distance > 0),
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                FOREIGN KEY (up_station_id) REFERENCES stations (id),
                FOREIGN KEY (down_station_id) REFERENCES stations (id)
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Lookups by station when checking whether a station is still in use
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_lines_up_station_id
            ON lines(up_station_id);
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_lines_down_station_id
            ON lines(down_station_id);
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Row;

    #[tokio::test]
    async fn test_schema_is_created() {
        let db = DbConnection::init_in_memory().await.expect("Failed to create test database");

        let rows = sqlx::query("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .fetch_all(db.pool())
            .await
            .expect("Failed to query schema");
        let tables: Vec<String> = rows.iter().map(|row| row.get("name")).collect();

        assert!(tables.contains(&"stations".to_string()));
        assert!(tables.contains(&"lines".to_string()));
    }

    #[tokio::test]
    async fn test_file_database_survives_reopen() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let url = format!("sqlite:{}", temp_dir.path().join("subway.db").display());

        {
            let db = DbConnection::new(&url).await.expect("Failed to create file database");
            sqlx::query("INSERT INTO stations (name, created_at) VALUES (?, ?)")
                .bind("강남역")
                .bind("2024-01-01T00:00:00+00:00")
                .execute(db.pool())
                .await
                .unwrap();
            db.pool().close().await;
        }

        let reopened = DbConnection::new(&url).await.expect("Failed to reopen file database");
        let row = sqlx::query("SELECT name FROM stations WHERE id = 1")
            .fetch_one(reopened.pool())
            .await
            .unwrap();
        let name: String = row.get("name");
        assert_eq!(name, "강남역");
    }

    #[tokio::test]
    async fn test_foreign_keys_are_enforced() {
        let db = DbConnection::init_in_memory().await.unwrap();

        let result = sqlx::query(
            "INSERT INTO lines (name, color, up_station_id, down_station_id, distance, created_at, updated_at)
             VALUES ('신분당선', 'bg-red-600', 98, 99, 10, 'now', 'now')",
        )
        .execute(db.pool())
        .await;

        assert!(result.is_err(), "Line referencing missing stations should be rejected");
    }
}
