use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::Station;
use crate::storage::connection::DbConnection;
use crate::storage::traits::StationStorage;

/// SQLite repository for station operations
#[derive(Clone)]
pub struct StationRepository {
    db: DbConnection,
}

impl StationRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Station {
        Station {
            id: row.get("id"),
            name: row.get("name"),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl StationStorage for StationRepository {
    async fn store_station(&self, name: &str, created_at: &str) -> Result<Station> {
        let result = sqlx::query(
            r#"
            INSERT INTO stations (name, created_at)
            VALUES (?, ?)
            "#,
        )
        .bind(name)
        .bind(created_at)
        .execute(self.db.pool())
        .await?;

        Ok(Station {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            created_at: created_at.to_string(),
        })
    }

    async fn get_station(&self, station_id: i64) -> Result<Option<Station>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, created_at
            FROM stations
            WHERE id = ?
            "#,
        )
        .bind(station_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.as_ref().map(Self::from_row))
    }

    async fn list_stations(&self) -> Result<Vec<Station>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, created_at
            FROM stations
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.iter().map(Self::from_row).collect())
    }

    async fn delete_station(&self, station_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM stations WHERE id = ?")
            .bind(station_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
