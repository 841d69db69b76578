// Repository modules
pub mod line_repository;
pub mod station_repository;

// Re-export repository types
pub use line_repository::LineRepository;
pub use station_repository::StationRepository;
