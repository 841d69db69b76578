use std::fmt;

/// Kind of record a lookup failed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Station,
    Line,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Station => write!(f, "Station"),
            Entity::Line => write!(f, "Line"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubwayError {
    #[error("{0}")]
    Validation(String),
    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: i64 },
    #[error("Station {station_id} is still used by line {line_id}")]
    StationInUse { station_id: i64, line_id: i64 },
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl SubwayError {
    pub fn validation(message: impl Into<String>) -> Self {
        SubwayError::Validation(message.into())
    }

    pub fn station_not_found(id: i64) -> Self {
        SubwayError::NotFound { entity: Entity::Station, id }
    }

    pub fn line_not_found(id: i64) -> Self {
        SubwayError::NotFound { entity: Entity::Line, id }
    }
}

pub type SubwayResult<T> = Result<T, SubwayError>;
