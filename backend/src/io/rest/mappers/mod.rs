pub mod line_mapper;
pub mod station_mapper;

pub use line_mapper::LineMapper;
pub use station_mapper::StationMapper;
