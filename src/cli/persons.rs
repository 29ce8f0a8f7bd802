use anyhow::{Context, Result};

use crate::api::{PlannerClient, Transport};
use crate::config::SeedConfig;
use crate::models::Person;
use crate::source::read_csv;
use crate::upload::PersonUpload;

/// Upload every person, then link each to the configured department,
/// workplaces and their present weekdays. Rejected records are logged
/// and skipped.
pub fn run_persons<T: Transport>(api: &PlannerClient<T>, config: &SeedConfig) -> Result<()> {
    let persons: Vec<Person> = read_csv(&config.persons_path())?;
    let upload = PersonUpload::batch(
        config.person_department.clone(),
        config.person_workplaces.clone(),
    );

    upload.run(api, &persons).context("person upload failed")?;
    Ok(())
}

/// Upload persons and their weekdays without department or workplace
/// links. The first rejected person ends the run with an error.
pub fn run_persons_legacy<T: Transport>(
    api: &PlannerClient<T>,
    config: &SeedConfig,
) -> Result<()> {
    let persons: Vec<Person> = read_csv(&config.persons_path())?;

    PersonUpload::legacy()
        .run(api, &persons)
        .context("legacy person upload aborted")?;
    Ok(())
}
