//! Translation of domain errors into HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::ErrorResponse;
use tracing::error;

use crate::domain::SubwayError;

impl SubwayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SubwayError::Validation(_) => StatusCode::BAD_REQUEST,
            SubwayError::NotFound { .. } => StatusCode::NOT_FOUND,
            SubwayError::StationInUse { .. } => StatusCode::CONFLICT,
            SubwayError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SubwayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            // Storage details stay in the log
            SubwayError::Storage(e) => {
                error!("Storage error: {:?}", e);
                "Internal storage error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
