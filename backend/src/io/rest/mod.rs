//! # REST API Interface Layer
//!
//! HTTP endpoints for the subway service. Handlers only translate between
//! JSON and the domain services:
//! - request bodies are deserialized into `shared` DTOs
//! - domain results are mapped back to DTOs by the [`mappers`]
//! - domain errors become status codes in [`error`]

pub mod error;
pub mod line_apis;
pub mod mappers;
pub mod station_apis;

pub use line_apis::*;
pub use station_apis::*;
