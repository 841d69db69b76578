use crate::domain::models::Station;
use shared::StationResponse;

/// Mapper from domain stations to the API shape
pub struct StationMapper;

impl StationMapper {
    pub fn to_dto(domain: Station) -> StationResponse {
        StationResponse {
            id: domain.id,
            name: domain.name,
        }
    }

    pub fn to_dto_list(domain_stations: Vec<Station>) -> Vec<StationResponse> {
        domain_stations.into_iter().map(Self::to_dto).collect()
    }
}
