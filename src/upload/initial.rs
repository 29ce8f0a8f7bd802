//! Organisation structure: departments, their workplaces, the timeslots
//! of each workplace and the weekdays each timeslot is offered on.
//!
//! Run in that order; every level references ids created by the one
//! before.

use crate::api::{PlannerClient, Transport};
use crate::error::Result;
use crate::models::{Department, Timeslot, TimeslotAvailability, Workplace};

use super::{check, sweep, UploadReport, CREATED};

pub fn upload_departments<T: Transport>(
    api: &PlannerClient<T>,
    departments: &[Department],
) -> Result<UploadReport> {
    sweep("department", departments, |d| d.id.as_str(), |department| {
        let response = api.post(&["department"], &department.request())?;
        Ok(check(
            &response,
            CREATED,
            &format!("department {}", department.id),
        ))
    })
}

pub fn upload_workplaces<T: Transport>(
    api: &PlannerClient<T>,
    workplaces: &[Workplace],
) -> Result<UploadReport> {
    sweep("workplace", workplaces, |w| w.id.as_str(), |workplace| {
        let response = api.post(
            &["department", workplace.department_id.as_str(), "workplace"],
            &workplace.request(),
        )?;
        Ok(check(
            &response,
            CREATED,
            &format!("workplace {}", workplace.id),
        ))
    })
}

pub fn upload_timeslots<T: Transport>(
    api: &PlannerClient<T>,
    timeslots: &[Timeslot],
) -> Result<UploadReport> {
    sweep("timeslot", timeslots, |t| t.name.as_str(), |timeslot| {
        let response = api.post(
            &[
                "department",
                timeslot.department_id.as_str(),
                "workplace",
                timeslot.workplace_id.as_str(),
                "timeslot",
            ],
            &timeslot.request(),
        )?;
        Ok(check(
            &response,
            CREATED,
            &format!("timeslot {}", timeslot.name),
        ))
    })
}

/// Replace the weekday schedule of each timeslot through the bulk endpoint.
pub fn upload_timeslot_availability<T: Transport>(
    api: &PlannerClient<T>,
    entries: &[TimeslotAvailability],
) -> Result<UploadReport> {
    sweep(
        "timeslot offered on",
        entries,
        |e| e.timeslot_name.as_str(),
        |entry| {
            let response = api.post(
                &[
                    "department",
                    entry.department_id.as_str(),
                    "workplace",
                    entry.workplace_id.as_str(),
                    "timeslot",
                    entry.timeslot_name.as_str(),
                    "weekday",
                    "bulk",
                ],
                &entry.data,
            )?;
            Ok(check(
                &response,
                CREATED,
                &format!("timeslot offered on {}", entry.timeslot_name),
            ))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{client, RecordingTransport};
    use reqwest::StatusCode;
    use serde_json::json;

    fn department(id: &str, name: &str) -> Department {
        Department {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn each_department_is_posted_once_in_order() {
        let api = client(RecordingTransport::created());
        let departments = vec![department("bak", "Bakery"), department("qa", "QA")];

        let (report, logged) =
            crate::logging::capture(|| upload_departments(&api, &departments).unwrap());

        let first = logged.find("Uploading department 1/2: bak");
        let second = logged.find("Uploading department 2/2: qa");
        assert!(first.is_some(), "missing first progress line in:\n{}", logged);
        assert!(second.is_some(), "missing second progress line in:\n{}", logged);
        assert!(first < second);
        assert_eq!(report.total, 2);
        assert_eq!(report.failed, 0);
        assert_eq!(
            api.transport().requests(),
            vec![
                (
                    "department".to_string(),
                    json!({"id": "bak", "name": "Bakery"})
                ),
                ("department".to_string(), json!({"id": "qa", "name": "QA"})),
            ]
        );
    }

    #[test]
    fn rejected_department_is_logged_with_status() {
        let api = client(RecordingTransport::responding(|_, _| StatusCode::BAD_REQUEST));

        let (_, logged) = crate::logging::capture(|| {
            upload_departments(&api, &[department("bak", "Bakery")]).unwrap()
        });

        assert!(logged.contains("Error uploading department bak"), "{}", logged);
        assert!(logged.contains("Status: 400"), "{}", logged);
    }

    #[test]
    fn rejected_department_does_not_stop_the_sweep() {
        let api = client(RecordingTransport::responding(|_, body| {
            if body["id"] == "bak" {
                StatusCode::INTERNAL_SERVER_ERROR
            } else {
                StatusCode::CREATED
            }
        }));
        let departments = vec![
            department("bak", "Bakery"),
            department("qa", "QA"),
            department("log", "Logistics"),
        ];

        let report = upload_departments(&api, &departments).unwrap();

        assert_eq!(api.transport().requests().len(), 3);
        assert_eq!(report.failed, 1);
    }

    #[test]
    fn conflict_counts_as_failure_for_departments() {
        let api = client(RecordingTransport::responding(|_, _| StatusCode::CONFLICT));
        let report = upload_departments(&api, &[department("bak", "Bakery")]).unwrap();
        assert_eq!(report.failed, 1);
    }

    #[test]
    fn workplace_is_posted_under_its_department() {
        let api = client(RecordingTransport::created());
        let workplaces = vec![Workplace {
            id: "psl".to_string(),
            name: "Pastry line".to_string(),
            department_id: "bak".to_string(),
        }];

        upload_workplaces(&api, &workplaces).unwrap();

        assert_eq!(
            api.transport().requests(),
            vec![(
                "department/bak/workplace".to_string(),
                json!({"id": "psl", "name": "Pastry line"})
            )]
        );
    }

    #[test]
    fn timeslot_is_posted_under_its_workplace() {
        let api = client(RecordingTransport::created());
        let timeslots = vec![Timeslot {
            name: "early".to_string(),
            department_id: "bak".to_string(),
            workplace_id: "psl".to_string(),
        }];

        upload_timeslots(&api, &timeslots).unwrap();

        assert_eq!(
            api.transport().requests(),
            vec![(
                "department/bak/workplace/psl/timeslot".to_string(),
                json!({"name": "early", "active": true})
            )]
        );
    }

    #[test]
    fn availability_posts_data_to_bulk_endpoint() {
        let api = client(RecordingTransport::created());
        let data = json!([
            {"id": "MON", "start_time": "06:00", "end_time": "14:00"},
            {"id": "TUE"}
        ]);
        let entries = vec![TimeslotAvailability {
            timeslot_name: "early".to_string(),
            department_id: "bak".to_string(),
            workplace_id: "psl".to_string(),
            data: data.clone(),
        }];

        let report = upload_timeslot_availability(&api, &entries).unwrap();

        assert_eq!(report.entity, "timeslot offered on");
        assert_eq!(
            api.transport().requests(),
            vec![(
                "department/bak/workplace/psl/timeslot/early/weekday/bulk".to_string(),
                data
            )]
        );
    }

    #[test]
    fn empty_source_sends_nothing() {
        let api = client(RecordingTransport::created());
        let report = upload_workplaces(&api, &[]).unwrap();

        assert_eq!(report.total, 0);
        assert!(api.transport().requests().is_empty());
    }
}
