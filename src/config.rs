//! Run configuration.
//!
//! Defaults match the local development backend and the `data/`
//! directory next to the binary's working directory. Command-line flags
//! and their environment variables override them.

use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1/planner";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Department every uploaded person is assigned to.
pub const DEFAULT_PERSON_DEPARTMENT: &str = "bak";

/// Workplaces every uploaded person is assigned to, in upload order.
pub const DEFAULT_PERSON_WORKPLACES: &[&str] = &[
    "psl", "var", "anl", "arz", "stu", "ate", "mal", "vit", "tbl", "hyg", "spa", "cha", "jok",
    "azu", "not",
];

pub const DEPARTMENTS_FILE: &str = "departments.csv";
pub const WORKPLACES_FILE: &str = "workplaces.csv";
pub const TIMESLOTS_FILE: &str = "timeslots.csv";
pub const OFFERED_ON_FILE: &str = "offered_on.json";
pub const PERSONS_FILE: &str = "persons.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub api_url: String,
    pub data_dir: PathBuf,
    pub timeout: Duration,
    pub dry_run: bool,
    pub person_department: String,
    pub person_workplaces: Vec<String>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            dry_run: false,
            person_department: DEFAULT_PERSON_DEPARTMENT.to_string(),
            person_workplaces: DEFAULT_PERSON_WORKPLACES
                .iter()
                .map(|w| w.to_string())
                .collect(),
        }
    }
}

impl SeedConfig {
    pub fn data_file(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    pub fn departments_path(&self) -> PathBuf {
        self.data_file(DEPARTMENTS_FILE)
    }

    pub fn workplaces_path(&self) -> PathBuf {
        self.data_file(WORKPLACES_FILE)
    }

    pub fn timeslots_path(&self) -> PathBuf {
        self.data_file(TIMESLOTS_FILE)
    }

    pub fn offered_on_path(&self) -> PathBuf {
        self.data_file(OFFERED_ON_FILE)
    }

    pub fn persons_path(&self) -> PathBuf {
        self.data_file(PERSONS_FILE)
    }

    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = dir.as_ref().to_path_buf();
        self
    }
}
