use serde::{Deserialize, Serialize};

use super::station::Station;

/// Maximum length of a line name, in characters
pub const MAX_LINE_NAME_LENGTH: usize = 100;

/// A subway line owning a single up/down station segment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Line {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub up_station_id: i64,
    pub down_station_id: i64,
    pub distance: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// A line that has not been persisted yet and so has no id
#[derive(Debug, Clone, PartialEq)]
pub struct NewLine {
    pub name: String,
    pub color: String,
    pub up_station_id: i64,
    pub down_station_id: i64,
    pub distance: i64,
}

/// Replacement values for an existing line. `None` keeps the stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct LineEdit {
    pub name: String,
    pub color: String,
    pub up_station_id: Option<i64>,
    pub down_station_id: Option<i64>,
    pub distance: Option<i64>,
}

/// A line together with its resolved endpoint stations
#[derive(Debug, Clone, PartialEq)]
pub struct LineDetail {
    pub line: Line,
    pub up_station: Station,
    pub down_station: Station,
}

impl Line {
    /// Apply an edit in place. The id and creation time never change.
    pub fn apply(&mut self, edit: LineEdit, updated_at: String) {
        self.name = edit.name;
        self.color = edit.color;
        if let Some(up_station_id) = edit.up_station_id {
            self.up_station_id = up_station_id;
        }
        if let Some(down_station_id) = edit.down_station_id {
            self.down_station_id = down_station_id;
        }
        if let Some(distance) = edit.distance {
            self.distance = distance;
        }
        self.updated_at = updated_at;
    }

    /// Station ids in up-then-down order
    pub fn station_ids(&self) -> [i64; 2] {
        [self.up_station_id, self.down_station_id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_line() -> Line {
        Line {
            id: 1,
            name: "신분당선".to_string(),
            color: "bg-red-600".to_string(),
            up_station_id: 1,
            down_station_id: 2,
            distance: 10,
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
            updated_at: "2024-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_apply_replaces_name_and_color_only() {
        let mut line = sample_line();
        line.apply(
            LineEdit {
                name: "다른분당선".to_string(),
                color: "bg-green-600".to_string(),
                up_station_id: None,
                down_station_id: None,
                distance: None,
            },
            "2024-02-01T00:00:00+00:00".to_string(),
        );

        assert_eq!(line.id, 1);
        assert_eq!(line.name, "다른분당선");
        assert_eq!(line.color, "bg-green-600");
        assert_eq!(line.station_ids(), [1, 2]);
        assert_eq!(line.distance, 10);
        assert_eq!(line.created_at, "2024-01-01T00:00:00+00:00");
        assert_eq!(line.updated_at, "2024-02-01T00:00:00+00:00");
    }

    #[test]
    fn test_apply_replaces_segment_when_given() {
        let mut line = sample_line();
        line.apply(
            LineEdit {
                name: line.name.clone(),
                color: line.color.clone(),
                up_station_id: Some(3),
                down_station_id: None,
                distance: Some(4),
            },
            "2024-02-01T00:00:00+00:00".to_string(),
        );

        assert_eq!(line.station_ids(), [3, 2]);
        assert_eq!(line.distance, 4);
    }
}
