//! # REST API for Line Management
//!
//! Endpoints for creating, fetching, listing, editing and deleting lines.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use tracing::{error, info};

use crate::io::rest::mappers::LineMapper;
use crate::AppState;
use shared::{LineCreateRequest, LineEditRequest};

/// Create a new line
pub async fn create_line(
    State(state): State<AppState>,
    Json(request): Json<LineCreateRequest>,
) -> impl IntoResponse {
    info!("POST /lines - request: {:?}", request);

    match state.line_service.create_line(request).await {
        Ok(detail) => {
            let location = format!("/lines/{}", detail.line.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(LineMapper::to_dto(detail)),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to create line: {}", e);
            e.into_response()
        }
    }
}

/// Get a line by ID
pub async fn get_line(
    State(state): State<AppState>,
    Path(line_id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /lines/{}", line_id);

    match state.line_service.get_line(line_id).await {
        Ok(detail) => (StatusCode::OK, Json(LineMapper::to_dto(detail))).into_response(),
        Err(e) => {
            error!("Failed to get line: {}", e);
            e.into_response()
        }
    }
}

/// List all lines
pub async fn list_lines(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /lines");

    match state.line_service.get_all().await {
        Ok(details) => (StatusCode::OK, Json(LineMapper::to_dto_list(details))).into_response(),
        Err(e) => {
            error!("Failed to list lines: {}", e);
            e.into_response()
        }
    }
}

/// Edit a line. Succeeds with an empty body.
pub async fn edit_line(
    State(state): State<AppState>,
    Path(line_id): Path<i64>,
    Json(request): Json<LineEditRequest>,
) -> impl IntoResponse {
    info!("PUT /lines/{} - request: {:?}", line_id, request);

    match state.line_service.edit_line(line_id, request).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => {
            error!("Failed to edit line: {}", e);
            e.into_response()
        }
    }
}

/// Delete a line
pub async fn delete_line(
    State(state): State<AppState>,
    Path(line_id): Path<i64>,
) -> impl IntoResponse {
    info!("DELETE /lines/{}", line_id);

    match state.line_service.delete_by_id(line_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!("Failed to delete line: {}", e);
            e.into_response()
        }
    }
}
