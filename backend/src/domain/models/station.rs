use serde::{Deserialize, Serialize};

/// Maximum length of a station name, in characters
pub const MAX_STATION_NAME_LENGTH: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Station {
    pub id: i64,
    pub name: String,
    /// RFC 3339 timestamp of creation
    pub created_at: String,
}
