//! # Storage Traits
//!
//! Storage abstractions used by the domain services. Services hold these as
//! `Arc<dyn ...>` so the SQLite repositories can be swapped without touching
//! the domain layer.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::{Line, NewLine, Station};

/// Trait defining the interface for station storage operations
#[async_trait]
pub trait StationStorage: Send + Sync {
    /// Store a new station and return it with its assigned id
    async fn store_station(&self, name: &str, created_at: &str) -> Result<Station>;

    /// Retrieve a specific station by ID
    async fn get_station(&self, station_id: i64) -> Result<Option<Station>>;

    /// List all stations ordered by id
    async fn list_stations(&self) -> Result<Vec<Station>>;

    /// Delete a station by ID
    /// Returns true if the station was found and deleted, false otherwise
    async fn delete_station(&self, station_id: i64) -> Result<bool>;
}

/// Trait defining the interface for line storage operations
#[async_trait]
pub trait LineStorage: Send + Sync {
    /// Store a new line and return it with its assigned id
    async fn store_line(&self, line: &NewLine, created_at: &str) -> Result<Line>;

    /// Retrieve a specific line by ID
    async fn get_line(&self, line_id: i64) -> Result<Option<Line>>;

    /// List all lines ordered by id
    async fn list_lines(&self) -> Result<Vec<Line>>;

    /// Overwrite the mutable fields of an existing line
    /// Returns true if a row was updated
    async fn update_line(&self, line: &Line) -> Result<bool>;

    /// Delete a line by ID
    /// Returns true if the line was found and deleted, false otherwise
    async fn delete_line(&self, line_id: i64) -> Result<bool>;

    /// Find any line that has the station as its up or down endpoint
    async fn find_line_using_station(&self, station_id: i64) -> Result<Option<Line>>;
}
