//! # Domain Module
//!
//! Business rules for subway stations and lines.
//!
//! ## Module Organization
//!
//! - **models**: `Station` and `Line` records plus the shapes used to create and edit lines
//! - **station_service**: station create/list/get/delete
//! - **line_service**: line CRUD and resolution of a line's up/down stations
//! - **error**: the error taxonomy surfaced to the REST layer
//!
//! ## Business Rules
//!
//! - Station and line names are trimmed and must not be empty
//! - A line joins two different existing stations with a positive distance
//! - A station cannot be deleted while a line uses it as an endpoint
//! - Editing a line never changes its id

pub mod error;
pub mod line_service;
pub mod models;
pub mod station_service;

pub use error::{Entity, SubwayError, SubwayResult};
pub use line_service::LineService;
pub use station_service::StationService;
