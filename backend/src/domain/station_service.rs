use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::error::{SubwayError, SubwayResult};
use crate::domain::models::station::{Station, MAX_STATION_NAME_LENGTH};
use crate::storage::{LineStorage, StationStorage};
use shared::StationRequest;

/// Service for managing subway stations
#[derive(Clone)]
pub struct StationService {
    stations: Arc<dyn StationStorage>,
    lines: Arc<dyn LineStorage>,
}

impl StationService {
    /// Create a new StationService. Line storage is needed to refuse deleting
    /// stations that a line still points at.
    pub fn new(stations: Arc<dyn StationStorage>, lines: Arc<dyn LineStorage>) -> Self {
        Self { stations, lines }
    }

    /// Create a new station
    pub async fn create_station(&self, request: StationRequest) -> SubwayResult<Station> {
        info!("Creating station: name={}", request.name);

        let name = Self::validate_name(&request.name)?;
        let station = self
            .stations
            .store_station(&name, &Utc::now().to_rfc3339())
            .await?;

        info!("Created station: {} with ID: {}", station.name, station.id);
        Ok(station)
    }

    /// Get a station by ID
    pub async fn get_station(&self, station_id: i64) -> SubwayResult<Station> {
        self.stations
            .get_station(station_id)
            .await?
            .ok_or_else(|| {
                warn!("Station not found: {}", station_id);
                SubwayError::station_not_found(station_id)
            })
    }

    /// List all stations
    pub async fn list_stations(&self) -> SubwayResult<Vec<Station>> {
        let stations = self.stations.list_stations().await?;
        info!("Found {} stations", stations.len());
        Ok(stations)
    }

    /// Delete a station. Stations used as an endpoint of any line are kept.
    pub async fn delete_station(&self, station_id: i64) -> SubwayResult<()> {
        info!("Deleting station: {}", station_id);

        if let Some(line) = self.lines.find_line_using_station(station_id).await? {
            warn!("Refusing to delete station {} used by line {}", station_id, line.id);
            return Err(SubwayError::StationInUse { station_id, line_id: line.id });
        }

        if !self.stations.delete_station(station_id).await? {
            warn!("Station not found: {}", station_id);
            return Err(SubwayError::station_not_found(station_id));
        }

        info!("Deleted station: {}", station_id);
        Ok(())
    }

    fn validate_name(name: &str) -> SubwayResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SubwayError::validation("Station name cannot be empty"));
        }
        if name.chars().count() > MAX_STATION_NAME_LENGTH {
            return Err(SubwayError::validation(format!(
                "Station name cannot exceed {} characters",
                MAX_STATION_NAME_LENGTH
            )));
        }
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::NewLine;
    use crate::storage::{DbConnection, LineRepository, StationRepository};

    async fn setup_test() -> (StationService, Arc<dyn LineStorage>) {
        let db = DbConnection::init_in_memory().await.expect("Failed to create test database");
        let lines: Arc<dyn LineStorage> = Arc::new(LineRepository::new(db.clone()));
        let service = StationService::new(Arc::new(StationRepository::new(db)), lines.clone());
        (service, lines)
    }

    fn request(name: &str) -> StationRequest {
        StationRequest { name: name.to_string() }
    }

    #[tokio::test]
    async fn test_create_station() {
        let (service, _) = setup_test().await;

        let station = service.create_station(request("강남역")).await.expect("Failed to create station");

        assert_eq!(station.id, 1);
        assert_eq!(station.name, "강남역");
        assert!(!station.created_at.is_empty());
    }

    #[tokio::test]
    async fn test_create_station_trims_name() {
        let (service, _) = setup_test().await;

        let station = service.create_station(request("  역삼역 ")).await.unwrap();
        assert_eq!(station.name, "역삼역");
    }

    #[tokio::test]
    async fn test_create_station_validation() {
        let (service, _) = setup_test().await;

        let empty = service.create_station(request("")).await;
        assert!(matches!(empty, Err(SubwayError::Validation(_))));

        let blank = service.create_station(request("   ")).await;
        assert!(matches!(blank, Err(SubwayError::Validation(_))));

        let too_long = service.create_station(request(&"역".repeat(101))).await;
        assert!(matches!(too_long, Err(SubwayError::Validation(_))));

        assert!(service.list_stations().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_and_get_stations() {
        let (service, _) = setup_test().await;
        service.create_station(request("지하철역1")).await.unwrap();
        let second = service.create_station(request("지하철역2")).await.unwrap();

        let names: Vec<String> = service
            .list_stations()
            .await
            .unwrap()
            .into_iter()
            .map(|station| station.name)
            .collect();
        assert_eq!(names, vec!["지하철역1", "지하철역2"]);

        let loaded = service.get_station(second.id).await.unwrap();
        assert_eq!(loaded.name, "지하철역2");

        let missing = service.get_station(99).await;
        assert!(matches!(missing, Err(SubwayError::NotFound { id: 99, .. })));
    }

    #[tokio::test]
    async fn test_delete_station() {
        let (service, _) = setup_test().await;
        let station = service.create_station(request("지하철역3")).await.unwrap();

        service.delete_station(station.id).await.expect("Failed to delete station");

        let stations = service.list_stations().await.unwrap();
        assert!(stations.iter().all(|s| s.name != "지하철역3"));
    }

    #[tokio::test]
    async fn test_delete_missing_station() {
        let (service, _) = setup_test().await;

        let result = service.delete_station(5).await;
        assert!(matches!(result, Err(SubwayError::NotFound { id: 5, .. })));
    }

    #[tokio::test]
    async fn test_delete_station_used_by_line_is_rejected() {
        let (service, lines) = setup_test().await;
        let up = service.create_station(request("강남역")).await.unwrap();
        let down = service.create_station(request("역삼역")).await.unwrap();
        let line = lines
            .store_line(
                &NewLine {
                    name: "신분당선".to_string(),
                    color: "bg-red-600".to_string(),
                    up_station_id: up.id,
                    down_station_id: down.id,
                    distance: 10,
                },
                "2024-01-01T00:00:00+00:00",
            )
            .await
            .unwrap();

        let result = service.delete_station(down.id).await;
        match result {
            Err(SubwayError::StationInUse { station_id, line_id }) => {
                assert_eq!(station_id, down.id);
                assert_eq!(line_id, line.id);
            }
            other => panic!("Expected StationInUse, got {:?}", other),
        }

        // Station is still listed
        assert_eq!(service.list_stations().await.unwrap().len(), 2);
    }
}
