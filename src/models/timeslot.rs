use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A row of `timeslots.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Timeslot {
    pub name: String,
    pub department_id: String,
    pub workplace_id: String,
}

/// Body of `POST .../workplace/{workplace_id}/timeslot`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeslotRequest<'a> {
    pub name: &'a str,
    pub active: bool,
}

impl Timeslot {
    /// Seeded timeslots always start out active.
    pub fn request(&self) -> TimeslotRequest<'_> {
        TimeslotRequest {
            name: &self.name,
            active: true,
        }
    }
}

/// An entry of `offered_on.json`: the weekday schedule of one timeslot.
///
/// `data` is the bulk weekday body and is sent as-is.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeslotAvailability {
    pub timeslot_name: String,
    pub department_id: String,
    pub workplace_id: String,
    pub data: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn timeslot_request_is_active() {
        let timeslot = Timeslot {
            name: "early".to_string(),
            department_id: "bak".to_string(),
            workplace_id: "psl".to_string(),
        };

        let body = serde_json::to_value(timeslot.request()).unwrap();
        assert_eq!(body, json!({"name": "early", "active": true}));
    }

    #[test]
    fn availability_keeps_data_verbatim() {
        let raw = json!({
            "timeslot_name": "early",
            "department_id": "bak",
            "workplace_id": "psl",
            "data": [{"id": "MON", "start_time": "06:00", "end_time": "14:00"}]
        });

        let entry: TimeslotAvailability = serde_json::from_value(raw).unwrap();
        assert_eq!(
            entry.data,
            json!([{"id": "MON", "start_time": "06:00", "end_time": "14:00"}])
        );
    }
}
