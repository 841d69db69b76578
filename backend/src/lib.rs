//! # Subway Backend
//!
//! REST service for subway stations and lines.
//!
//! ## Architecture
//!
//! ```text
//! HTTP clients
//!     ↓
//! IO Layer (axum handlers, DTO mappers)
//!     ↓
//! Domain Layer (StationService, LineService)
//!     ↓
//! Storage Layer (SQLite repositories)
//! ```
//!
//! Services receive their storage through constructors; nothing here is global.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::domain::{LineService, StationService};
use crate::storage::{DbConnection, LineRepository, LineStorage, StationRepository, StationStorage};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub station_service: StationService,
    pub line_service: LineService,
}

impl AppState {
    /// Wire repositories and services on top of an open database
    pub fn new(db: DbConnection) -> Self {
        let stations: Arc<dyn StationStorage> = Arc::new(StationRepository::new(db.clone()));
        let lines: Arc<dyn LineStorage> = Arc::new(LineRepository::new(db));

        Self {
            station_service: StationService::new(stations.clone(), lines.clone()),
            line_service: LineService::new(lines, stations),
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &ServerConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db_conn = DbConnection::new(&config.database_url).await?;

    info!("Setting up application state");
    Ok(AppState::new(db_conn))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/stations", get(io::list_stations).post(io::create_station))
        .route(
            "/stations/:id",
            get(io::get_station).delete(io::delete_station),
        )
        .route("/lines", get(io::list_lines).post(io::create_line))
        .route(
            "/lines/:id",
            get(io::get_line).put(io::edit_line).delete(io::delete_line),
        )
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}
