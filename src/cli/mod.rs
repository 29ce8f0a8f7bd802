use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::config::{SeedConfig, DEFAULT_API_URL, DEFAULT_DATA_DIR, DEFAULT_TIMEOUT_SECS};

pub mod initial;
pub mod persons;

pub use initial::run_initial;
pub use persons::{run_persons, run_persons_legacy};

#[derive(Parser)]
#[command(name = "planner-seed")]
#[command(about = "Seed a planner backend with its initial records")]
#[command(version)]
pub struct Cli {
    /// Base URL of the planner API
    #[arg(long, global = true, env = "PLANNER_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Directory holding the CSV and JSON source files
    #[arg(long, global = true, env = "PLANNER_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Log requests instead of sending them
    #[arg(short = 'n', long, global = true)]
    pub dry_run: bool,

    /// Log request bodies
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload departments, workplaces, timeslots and timeslot weekdays
    Initial,
    /// Upload persons with department, workplace and weekday links
    Persons(PersonsArgs),
    /// Upload persons and weekdays only; stop at the first rejected person
    PersonsLegacy,
    /// Run `initial`, then `persons` (default)
    All(PersonsArgs),
}

#[derive(Args, Default)]
pub struct PersonsArgs {
    /// Department every person is assigned to
    #[arg(long, value_name = "ID")]
    pub department: Option<String>,
    /// Workplace every person is assigned to; repeat for several
    #[arg(long = "workplace", value_name = "ID")]
    pub workplaces: Vec<String>,
}

impl Cli {
    pub fn config(&self) -> SeedConfig {
        let mut config = SeedConfig {
            api_url: self.api_url.clone(),
            data_dir: self.data_dir.clone(),
            timeout: Duration::from_secs(self.timeout),
            dry_run: self.dry_run,
            ..SeedConfig::default()
        };

        if let Some(Commands::Persons(args) | Commands::All(args)) = &self.command {
            if let Some(department) = &args.department {
                config.person_department = department.clone();
            }
            if !args.workplaces.is_empty() {
                config.person_workplaces = args.workplaces.clone();
            }
        }

        config
    }
}
