//! # Storage Module
//!
//! Handles all data persistence for the subway service.
//!
//! ## Current Implementation
//!
//! - **Primary Storage**: SQLite database through SQLx
//! - **Schema**: `stations` and `lines` tables, created on connect
//! - **Tests**: a private in-memory database per test
//!
//! The domain layer only sees the traits in [`traits`], never the SQL.

pub mod connection;
pub mod repositories;
pub mod traits;

// Re-export the main types that other modules need
pub use connection::DbConnection;
pub use repositories::{LineRepository, StationRepository};
pub use traits::{LineStorage, StationStorage};
