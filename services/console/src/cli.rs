use crate::generate::{run_departments, run_generate, run_health, GenerateArgs};
use clap::{Parser, Subcommand};
use synergy_select::config::{AppConfig, ServiceConfig};
use synergy_select::error::AppError;
use synergy_select::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "SynergySelect",
    about = "Request team recommendations from the SynergySelect generation service",
    version
)]
struct Cli {
    /// Override the configured generation service base URL
    #[arg(long, global = true)]
    service_url: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a team and print the recommendation dashboard (default command)
    Generate(GenerateArgs),
    /// List the departments a team can be generated for
    Departments,
    /// Check that the generation service is up
    Health,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Generate(GenerateArgs::default()));

    if let Command::Departments = command {
        run_departments();
        return Ok(());
    }

    let mut config = AppConfig::load()?;
    if let Some(service_url) = cli.service_url {
        config.service = ServiceConfig::new(service_url)?;
    }

    telemetry::init(&config.telemetry)?;

    match command {
        Command::Generate(args) => run_generate(&config, args).await,
        Command::Health => run_health(&config).await,
        Command::Departments => Ok(()),
    }
}
