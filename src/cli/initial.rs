use anyhow::{Context, Result};

use crate::api::{PlannerClient, Transport};
use crate::config::SeedConfig;
use crate::models::{Department, Timeslot, TimeslotAvailability, Workplace};
use crate::source::{read_csv, read_json};
use crate::upload::{
    upload_departments, upload_timeslot_availability, upload_timeslots, upload_workplaces,
};

/// Upload the organisation structure: departments, workplaces, timeslots,
/// then the weekdays each timeslot is offered on.
///
/// Each file is read right before its sweep, so a missing timeslot file
/// still leaves departments and workplaces uploaded.
pub fn run_initial<T: Transport>(api: &PlannerClient<T>, config: &SeedConfig) -> Result<()> {
    let departments: Vec<Department> = read_csv(&config.departments_path())?;
    upload_departments(api, &departments).context("department upload failed")?;

    let workplaces: Vec<Workplace> = read_csv(&config.workplaces_path())?;
    upload_workplaces(api, &workplaces).context("workplace upload failed")?;

    let timeslots: Vec<Timeslot> = read_csv(&config.timeslots_path())?;
    upload_timeslots(api, &timeslots).context("timeslot upload failed")?;

    let offered_on: Vec<TimeslotAvailability> = read_json(&config.offered_on_path())?;
    upload_timeslot_availability(api, &offered_on)
        .context("timeslot weekday upload failed")?;

    Ok(())
}
