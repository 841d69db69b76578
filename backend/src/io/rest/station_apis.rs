//! # REST API for Station Management
//!
//! Endpoints for creating, listing, fetching and deleting stations.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use tracing::{error, info};

use crate::io::rest::mappers::StationMapper;
use crate::AppState;
use shared::StationRequest;

/// Create a new station
pub async fn create_station(
    State(state): State<AppState>,
    Json(request): Json<StationRequest>,
) -> impl IntoResponse {
    info!("POST /stations - request: {:?}", request);

    match state.station_service.create_station(request).await {
        Ok(station) => {
            let location = format!("/stations/{}", station.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(StationMapper::to_dto(station)),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to create station: {}", e);
            e.into_response()
        }
    }
}

/// List all stations
pub async fn list_stations(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /stations");

    match state.station_service.list_stations().await {
        Ok(stations) => (StatusCode::OK, Json(StationMapper::to_dto_list(stations))).into_response(),
        Err(e) => {
            error!("Failed to list stations: {}", e);
            e.into_response()
        }
    }
}

/// Get a station by ID
pub async fn get_station(
    State(state): State<AppState>,
    Path(station_id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /stations/{}", station_id);

    match state.station_service.get_station(station_id).await {
        Ok(station) => (StatusCode::OK, Json(StationMapper::to_dto(station))).into_response(),
        Err(e) => {
            error!("Failed to get station: {}", e);
            e.into_response()
        }
    }
}

/// Delete a station
pub async fn delete_station(
    State(state): State<AppState>,
    Path(station_id): Path<i64>,
) -> impl IntoResponse {
    info!("DELETE /stations/{}", station_id);

    match state.station_service.delete_station(station_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!("Failed to delete station: {}", e);
            e.into_response()
        }
    }
}
