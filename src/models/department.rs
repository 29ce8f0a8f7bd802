use serde::{Deserialize, Serialize};

/// A row of `departments.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
}

/// Body of `POST department`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentRequest<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

impl Department {
    pub fn request(&self) -> DepartmentRequest<'_> {
        DepartmentRequest {
            id: &self.id,
            name: &self.name,
        }
    }
}
