use serde::{Deserialize, Serialize};

/// A row of `workplaces.csv`. The owning department goes into the URL,
/// not the body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Workplace {
    pub id: String,
    pub name: String,
    pub department_id: String,
}

/// Body of `POST department/{department_id}/workplace`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkplaceRequest<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

impl Workplace {
    pub fn request(&self) -> WorkplaceRequest<'_> {
        WorkplaceRequest {
            id: &self.id,
            name: &self.name,
        }
    }
}
