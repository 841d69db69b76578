use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::error::{SubwayError, SubwayResult};
use crate::domain::models::line::MAX_LINE_NAME_LENGTH;
use crate::domain::models::{Line, LineDetail, LineEdit, NewLine, Station};
use crate::storage::{LineStorage, StationStorage};
use shared::{LineCreateRequest, LineEditRequest};

/// Service for managing subway lines and resolving their stations
#[derive(Clone)]
pub struct LineService {
    lines: Arc<dyn LineStorage>,
    stations: Arc<dyn StationStorage>,
}

impl LineService {
    pub fn new(lines: Arc<dyn LineStorage>, stations: Arc<dyn StationStorage>) -> Self {
        Self { lines, stations }
    }

    /// Create a new line between two existing stations
    pub async fn create_line(&self, request: LineCreateRequest) -> SubwayResult<LineDetail> {
        info!(
            "Creating line: name={}, up={}, down={}, distance={}",
            request.name, request.up_station_id, request.down_station_id, request.distance
        );

        let new_line = NewLine {
            name: Self::validate_name(&request.name)?,
            color: Self::validate_color(&request.color)?,
            up_station_id: request.up_station_id,
            down_station_id: request.down_station_id,
            distance: request.distance,
        };
        Self::validate_segment(new_line.up_station_id, new_line.down_station_id, new_line.distance)?;

        // Resolve before storing so a bad reference never leaves a partial line behind
        let up_station = self.find_station(new_line.up_station_id).await?;
        let down_station = self.find_station(new_line.down_station_id).await?;

        let line = self
            .lines
            .store_line(&new_line, &Utc::now().to_rfc3339())
            .await?;

        info!("Created line: {} with ID: {}", line.name, line.id);

        Ok(LineDetail { line, up_station, down_station })
    }

    /// Get a line by ID with its stations resolved
    pub async fn get_line(&self, line_id: i64) -> SubwayResult<LineDetail> {
        let line = self.find_line(line_id).await?;
        self.resolve(line).await
    }

    /// List every line with its stations resolved, ordered by id
    pub async fn get_all(&self) -> SubwayResult<Vec<LineDetail>> {
        let lines = self.lines.list_lines().await?;
        info!("Found {} lines", lines.len());

        let mut details = Vec::with_capacity(lines.len());
        for line in lines {
            details.push(self.resolve(line).await?);
        }
        Ok(details)
    }

    /// Replace name and color, and optionally the station pair and distance
    pub async fn edit_line(&self, line_id: i64, request: LineEditRequest) -> SubwayResult<()> {
        info!("Editing line {}: {:?}", line_id, request);

        let mut line = self.find_line(line_id).await?;

        let edit = LineEdit {
            name: Self::validate_name(&request.name)?,
            color: Self::validate_color(&request.color)?,
            up_station_id: request.up_station_id,
            down_station_id: request.down_station_id,
            distance: request.distance,
        };

        // Check the segment as it will look after the edit
        let up_station_id = edit.up_station_id.unwrap_or(line.up_station_id);
        let down_station_id = edit.down_station_id.unwrap_or(line.down_station_id);
        let distance = edit.distance.unwrap_or(line.distance);
        Self::validate_segment(up_station_id, down_station_id, distance)?;

        if let Some(station_id) = edit.up_station_id {
            self.find_station(station_id).await?;
        }
        if let Some(station_id) = edit.down_station_id {
            self.find_station(station_id).await?;
        }

        line.apply(edit, Utc::now().to_rfc3339());

        // The line may have been deleted since we read it
        if !self.lines.update_line(&line).await? {
            warn!("Line disappeared during edit: {}", line_id);
            return Err(SubwayError::line_not_found(line_id));
        }

        info!("Updated line: {} with ID: {}", line.name, line.id);
        Ok(())
    }

    /// Delete a line by ID
    pub async fn delete_by_id(&self, line_id: i64) -> SubwayResult<()> {
        info!("Deleting line: {}", line_id);

        if !self.lines.delete_line(line_id).await? {
            warn!("Line not found: {}", line_id);
            return Err(SubwayError::line_not_found(line_id));
        }

        info!("Deleted line: {}", line_id);
        Ok(())
    }

    async fn find_line(&self, line_id: i64) -> SubwayResult<Line> {
        self.lines.get_line(line_id).await?.ok_or_else(|| {
            warn!("Line not found: {}", line_id);
            SubwayError::line_not_found(line_id)
        })
    }

    async fn find_station(&self, station_id: i64) -> SubwayResult<Station> {
        self.stations.get_station(station_id).await?.ok_or_else(|| {
            warn!("Station not found: {}", station_id);
            SubwayError::station_not_found(station_id)
        })
    }

    async fn resolve(&self, line: Line) -> SubwayResult<LineDetail> {
        let up_station = self.find_station(line.up_station_id).await?;
        let down_station = self.find_station(line.down_station_id).await?;
        Ok(LineDetail { line, up_station, down_station })
    }

    fn validate_name(name: &str) -> SubwayResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SubwayError::validation("Line name cannot be empty"));
        }
        if name.chars().count() > MAX_LINE_NAME_LENGTH {
            return Err(SubwayError::validation(format!(
                "Line name cannot exceed {} characters",
                MAX_LINE_NAME_LENGTH
            )));
        }
        Ok(name.to_string())
    }

    fn validate_color(color: &str) -> SubwayResult<String> {
        let color = color.trim();
        if color.is_empty() {
            return Err(SubwayError::validation("Line color cannot be empty"));
        }
        Ok(color.to_string())
    }

    fn validate_segment(up_station_id: i64, down_station_id: i64, distance: i64) -> SubwayResult<()> {
        if up_station_id == down_station_id {
            return Err(SubwayError::validation(
                "Up station and down station must be different",
            ));
        }
        if distance <= 0 {
            return Err(SubwayError::validation("Distance must be positive"));
        }
        Ok(())
    }
}
