use clap::Parser;
use planner_seed::api::{DryRunTransport, HttpTransport, PlannerClient, Transport};
use planner_seed::cli::{run_initial, run_persons, run_persons_legacy, Cli, Commands};
use planner_seed::logging;
use planner_seed::SeedConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.config();
    if config.dry_run {
        let api = PlannerClient::new(&config.api_url, DryRunTransport)?;
        run(&cli, &config, api)
    } else {
        let transport = HttpTransport::new(config.timeout)?;
        let api = PlannerClient::new(&config.api_url, transport)?;
        run(&cli, &config, api)
    }
}

fn run<T: Transport>(cli: &Cli, config: &SeedConfig, api: PlannerClient<T>) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Initial) => {
            run_initial(&api, config)?;
        }
        Some(Commands::Persons(_)) => {
            run_persons(&api, config)?;
        }
        Some(Commands::PersonsLegacy) => {
            run_persons_legacy(&api, config)?;
        }
        None | Some(Commands::All(_)) => {
            // No subcommand provided - seed everything
            run_initial(&api, config)?;
            run_persons(&api, config)?;
        }
    }

    Ok(())
}
