use super::station_mapper::StationMapper;
use crate::domain::models::LineDetail;
use shared::LineResponse;

/// Mapper from resolved domain lines to the API shape
pub struct LineMapper;

impl LineMapper {
    /// Stations are always emitted up station first
    pub fn to_dto(domain: LineDetail) -> LineResponse {
        LineResponse {
            id: domain.line.id,
            name: domain.line.name,
            color: domain.line.color,
            stations: vec![
                StationMapper::to_dto(domain.up_station),
                StationMapper::to_dto(domain.down_station),
            ],
        }
    }

    pub fn to_dto_list(details: Vec<LineDetail>) -> Vec<LineResponse> {
        details.into_iter().map(Self::to_dto).collect()
    }
}
