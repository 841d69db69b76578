use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::{Line, NewLine};
use crate::storage::connection::DbConnection;
use crate::storage::traits::LineStorage;

/// SQLite repository for line operations
#[derive(Clone)]
pub struct LineRepository {
    db: DbConnection,
}

impl LineRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Line {
        Line {
            id: row.get("id"),
            name: row.get("name"),
            color: row.get("color"),
            up_station_id: row.get("up_station_id"),
            down_station_id: row.get("down_station_id"),
            distance: row.get("distance"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }
}

#[async_trait]
impl LineStorage for LineRepository {
    async fn store_line(&self, line: &NewLine, created_at: &str) -> Result<Line> {
        let result = sqlx::query(
            r#"
            INSERT INTO lines (name, color, up_station_id, down_station_id, distance, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&line.name)
        .bind(&line.color)
        .bind(line.up_station_id)
        .bind(line.down_station_id)
        .bind(line.distance)
        .bind(created_at)
        .bind(created_at)
        .execute(self.db.pool())
        .await?;

        Ok(Line {
            id: result.last_insert_rowid(),
            name: line.name.clone(),
            color: line.color.clone(),
            up_station_id: line.up_station_id,
            down_station_id: line.down_station_id,
            distance: line.distance,
            created_at: created_at.to_string(),
            updated_at: created_at.to_string(),
        })
    }

    async fn get_line(&self, line_id: i64) -> Result<Option<Line>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, color, up_station_id, down_station_id, distance, created_at, updated_at
            FROM lines
            WHERE id = ?
            "#,
        )
        .bind(line_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.as_ref().map(Self::from_row))
    }

    async fn list_lines(&self) -> Result<Vec<Line>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, color, up_station_id, down_station_id, distance, created_at, updated_at
            FROM lines
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.iter().map(Self::from_row).collect())
    }

    async fn update_line(&self, line: &Line) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE lines
            SET name = ?, color = ?, up_station_id = ?, down_station_id = ?, distance = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&line.name)
        .bind(&line.color)
        .bind(line.up_station_id)
        .bind(line.down_station_id)
        .bind(line.distance)
        .bind(&line.updated_at)
        .bind(line.id)
        .execute(self.db.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_line(&self, line_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM lines WHERE id = ?")
            .bind(line_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_line_using_station(&self, station_id: i64) -> Result<Option<Line>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, color, up_station_id, down_station_id, distance, created_at, updated_at
            FROM lines
            WHERE up_station_id = ? OR down_station_id = ?
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(station_id)
        .bind(station_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.as_ref().map(Self::from_row))
    }
}
