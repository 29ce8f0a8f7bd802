//! Person upload and the per-person relationship calls.
//!
//! Two variants share one routine:
//! - batch: links every person to a department and a list of workplaces,
//!   sends integer weekday ids and keeps going when a person is rejected.
//! - legacy: no department or workplace links, lowercased string weekday
//!   ids, and the whole run stops on the first rejected person.

use tracing::{error, info};

use crate::api::{PlannerClient, Transport};
use crate::error::{Result, SeedError};
use crate::models::{DepartmentLinkRequest, Person, WeekdayShape, WorkplaceLinkRequest};

use super::{check, sweep, UploadReport, CREATED, CREATED_OR_CONFLICT};

/// What a rejected person POST does to the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log it and move on to the next person.
    Continue,
    /// Stop the run with [`SeedError::Aborted`].
    Abort,
}

/// Department and workplace assignments made after each person is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonLinks {
    None,
    Linked {
        department_id: String,
        workplace_ids: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonUpload {
    pub policy: FailurePolicy,
    pub links: PersonLinks,
    pub weekday_shape: WeekdayShape,
}

impl PersonUpload {
    pub fn batch(department_id: impl Into<String>, workplace_ids: Vec<String>) -> Self {
        Self {
            policy: FailurePolicy::Continue,
            links: PersonLinks::Linked {
                department_id: department_id.into(),
                workplace_ids,
            },
            weekday_shape: WeekdayShape::Integer,
        }
    }

    pub fn legacy() -> Self {
        Self {
            policy: FailurePolicy::Abort,
            links: PersonLinks::None,
            weekday_shape: WeekdayShape::Lowercase,
        }
    }

    pub fn run<T: Transport>(
        &self,
        api: &PlannerClient<T>,
        persons: &[Person],
    ) -> Result<UploadReport> {
        let report = sweep("person", persons, |p| p.id.as_str(), |person| {
            self.upload_person(api, person)
        })?;

        info!("Done");
        Ok(report)
    }

    fn upload_person<T: Transport>(
        &self,
        api: &PlannerClient<T>,
        person: &Person,
    ) -> Result<bool> {
        let key = person.key();
        let response = api.post(&["person"], &person.request()?)?;

        if !response.is_any_of(CREATED_OR_CONFLICT) {
            error!(
                "Error uploading person {}: {}. Status: {}",
                person.id,
                response.body,
                response.status.as_u16()
            );
            return match self.policy {
                FailurePolicy::Continue => Ok(false),
                FailurePolicy::Abort => Err(SeedError::Aborted {
                    entity: "person",
                    key,
                    status: response.status,
                    body: response.body,
                }),
            };
        }

        if let PersonLinks::Linked {
            department_id,
            workplace_ids,
        } = &self.links
        {
            link_department(api, &key, department_id)?;
            for workplace_id in workplace_ids {
                link_workplace(api, &key, department_id, workplace_id)?;
            }
        }

        for weekday in person.weekdays() {
            let request = self.weekday_shape.request(person, weekday)?;
            let response = api.post(&["person", key.as_str(), "weekday"], &request)?;
            check(
                &response,
                CREATED_OR_CONFLICT,
                &format!("weekday {} for person {}", weekday, person.id),
            );
        }

        Ok(true)
    }
}

fn link_department<T: Transport>(
    api: &PlannerClient<T>,
    person_id: &str,
    department_id: &str,
) -> Result<()> {
    let response = api.post(
        &["person", person_id, "department"],
        &DepartmentLinkRequest { department_id },
    )?;
    check(
        &response,
        CREATED,
        &format!("department {} for person {}", department_id, person_id),
    );
    Ok(())
}

fn link_workplace<T: Transport>(
    api: &PlannerClient<T>,
    person_id: &str,
    department_id: &str,
    workplace_id: &str,
) -> Result<()> {
    let response = api.post(
        &["person", person_id, "workplace"],
        &WorkplaceLinkRequest {
            department_id,
            workplace_id,
        },
    )?;
    check(
        &response,
        CREATED,
        &format!("workplace {} for person {}", workplace_id, person_id),
    );
    Ok(())
}
