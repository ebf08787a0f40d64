use crate::evaluate::{list_vehicles, run_evaluation, EvaluateArgs, VehiclesArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use credit_risk::error::AppError;
use credit_risk::underwriting::RiskThreshold;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Credit Risk Scoring Service",
    about = "Score vehicle loan applicants against pre-trained credit risk artifacts",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate a single applicant and print the calculation and prediction
    Evaluate(EvaluateArgs),
    /// List the vehicles and prices offered on the application form
    Vehicles(VehiclesArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    #[command(flatten)]
    pub(crate) scoring: ScoringOverrides,
}

/// Flags shared by commands that load the model artifacts.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct ScoringOverrides {
    /// Directory containing model.json, scaler.json and encoders.json
    #[arg(long)]
    pub(crate) artifact_dir: Option<PathBuf>,
    /// Decision threshold applied to the default probability (0-1)
    #[arg(long, value_parser = crate::infra::parse_threshold_arg)]
    pub(crate) threshold: Option<RiskThreshold>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluation(args),
        Command::Vehicles(args) => list_vehicles(args),
    }
}
