use serde::{Deserialize, Serialize};

use crate::error::{Result, SeedError};

/// A row of `persons.csv`.
///
/// `working_hours` stays text until the request is built so a bad value
/// is reported against the person it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Person {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub working_hours: String,
    /// Comma-separated weekday ids, e.g. `1,3,5`. Empty when the person
    /// has no fixed presence days.
    #[serde(default)]
    pub present_weekdays: String,
}

/// Body of `POST person`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonRequest<'a> {
    pub id: String,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub working_hours: f64,
    pub active: bool,
}

/// Body of `POST person/{person_id}/department`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentLinkRequest<'a> {
    pub department_id: &'a str,
}

/// Body of `POST person/{person_id}/workplace`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkplaceLinkRequest<'a> {
    pub department_id: &'a str,
    pub workplace_id: &'a str,
}

/// Body of `POST person/{person_id}/weekday`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayLinkRequest {
    pub weekday_id: WeekdayId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum WeekdayId {
    Number(i64),
    Name(String),
}

/// How a weekday id from the source is encoded in the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekdayShape {
    /// `{"weekday_id": 3}`
    Integer,
    /// `{"weekday_id": "3"}`, lowercased. Used by the legacy person upload.
    Lowercase,
}

impl WeekdayShape {
    pub fn request(self, person: &Person, raw: &str) -> Result<WeekdayLinkRequest> {
        let raw = raw.trim();
        let weekday_id = match self {
            Self::Integer => {
                let number = raw.parse().map_err(|_| SeedError::InvalidField {
                    record: person.key(),
                    field: "present_weekdays",
                    value: raw.to_string(),
                })?;
                WeekdayId::Number(number)
            }
            Self::Lowercase => WeekdayId::Name(raw.to_lowercase()),
        };

        Ok(WeekdayLinkRequest { weekday_id })
    }
}

impl Person {
    /// The identifier used in every request path and body.
    pub fn key(&self) -> String {
        self.id.to_lowercase()
    }

    pub fn request(&self) -> Result<PersonRequest<'_>> {
        let working_hours =
            self.working_hours
                .trim()
                .parse()
                .map_err(|_| SeedError::InvalidField {
                    record: self.key(),
                    field: "working_hours",
                    value: self.working_hours.clone(),
                })?;

        Ok(PersonRequest {
            id: self.key(),
            first_name: &self.first_name,
            last_name: &self.last_name,
            email: &self.email,
            working_hours,
            active: true,
        })
    }

    /// The raw weekday ids in source order.
    ///
    /// A field holding only whitespace counts as empty, so no weekday
    /// requests are made for it instead of failing on an empty id.
    pub fn weekdays(&self) -> Vec<&str> {
        if self.present_weekdays.trim().is_empty() {
            return Vec::new();
        }
        self.present_weekdays.split(',').collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn person(id: &str, hours: &str, weekdays: &str) -> Person {
        Person {
            id: id.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Baker".to_string(),
            email: "ada@example.com".to_string(),
            working_hours: hours.to_string(),
            present_weekdays: weekdays.to_string(),
        }
    }

    #[test]
    fn request_lowercases_id_and_parses_hours() {
        let p = person("ABC", "38.5", "");
        let body = serde_json::to_value(p.request().unwrap()).unwrap();

        assert_eq!(
            body,
            json!({
                "id": "abc",
                "first_name": "Ada",
                "last_name": "Baker",
                "email": "ada@example.com",
                "working_hours": 38.5,
                "active": true
            })
        );
    }

    #[test]
    fn integer_hours_become_a_number() {
        let p = person("abcd", "40", "");
        assert_eq!(p.request().unwrap().working_hours, 40.0);
    }

    #[test]
    fn non_numeric_hours_are_rejected() {
        let p = person("ABCD", "full", "");
        let err = p.request().unwrap_err();

        assert!(matches!(
            err,
            SeedError::InvalidField {
                field: "working_hours",
                ..
            }
        ));
        assert!(err.to_string().contains("abcd"));
    }

    #[test]
    fn blank_weekdays_yield_nothing() {
        assert!(person("a", "1", "").weekdays().is_empty());
        assert!(person("a", "1", "  ").weekdays().is_empty());
    }

    #[test]
    fn weekdays_keep_source_order() {
        assert_eq!(person("a", "1", "5,1,3").weekdays(), vec!["5", "1", "3"]);
    }

    #[test]
    fn integer_shape_sends_a_number() {
        let p = person("a", "1", "1, 3");
        let request = WeekdayShape::Integer.request(&p, " 3").unwrap();

        assert_eq!(serde_json::to_value(request).unwrap(), json!({"weekday_id": 3}));
    }

    #[test]
    fn integer_shape_rejects_text() {
        let p = person("a", "1", "mon");
        assert!(WeekdayShape::Integer.request(&p, "mon").is_err());
    }

    #[test]
    fn lowercase_shape_sends_text() {
        let p = person("a", "1", "MON");
        let request = WeekdayShape::Lowercase.request(&p, "MON").unwrap();

        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({"weekday_id": "mon"})
        );
    }

    #[test]
    fn missing_weekday_column_defaults_to_empty() {
        let csv_data = "\
id,first_name,last_name,email,working_hours
ABCD,Ada,Baker,ada@example.com,20";

        let mut reader = csv::Reader::from_reader(csv_data.as_bytes());
        let row: Person = reader.deserialize().next().unwrap().unwrap();

        assert!(row.present_weekdays.is_empty());
        assert!(row.weekdays().is_empty());
    }
}
