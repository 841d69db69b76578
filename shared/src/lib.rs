use serde::{de, Deserialize, Deserializer, Serialize};

/// Request body for POST /stations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRequest {
    pub name: String,
}

/// A station as returned by the API, and as embedded in line responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationResponse {
    pub id: i64,
    pub name: String,
}

/// Request body for POST /lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineCreateRequest {
    pub name: String,
    /// Display color class, e.g. "bg-red-600"
    pub color: String,
    #[serde(deserialize_with = "number_or_string")]
    pub up_station_id: i64,
    #[serde(deserialize_with = "number_or_string")]
    pub down_station_id: i64,
    /// Length of the segment between the two stations, must be positive
    #[serde(deserialize_with = "number_or_string")]
    pub distance: i64,
}

/// Request body for PUT /lines/{id}
///
/// Name and color are always replaced. The station pair and distance are only
/// changed when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineEditRequest {
    pub name: String,
    pub color: String,
    #[serde(default, deserialize_with = "optional_number_or_string", skip_serializing_if = "Option::is_none")]
    pub up_station_id: Option<i64>,
    #[serde(default, deserialize_with = "optional_number_or_string", skip_serializing_if = "Option::is_none")]
    pub down_station_id: Option<i64>,
    #[serde(default, deserialize_with = "optional_number_or_string", skip_serializing_if = "Option::is_none")]
    pub distance: Option<i64>,
}

/// A line with its resolved stations, up station first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineResponse {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub stations: Vec<StationResponse>,
}

/// Body returned alongside any 4xx/5xx status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Clients frequently post string-valued maps ({"distance": "10"}), so numeric
// fields accept both JSON numbers and numeric strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    Text(String),
}

impl NumberOrString {
    fn into_i64<E: de::Error>(self) -> Result<i64, E> {
        match self {
            NumberOrString::Number(n) => Ok(n),
            NumberOrString::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| E::custom(format!("expected an integer, got {:?}", s))),
        }
    }
}

fn number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrString::deserialize(deserializer)?.into_i64()
}

fn optional_number_or_string<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NumberOrString>::deserialize(deserializer)?
        .map(NumberOrString::into_i64)
        .transpose()
}
