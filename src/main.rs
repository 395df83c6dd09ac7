use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod store;

use commands::{
    ConfigCommand, DashboardCommand, MaintenanceCommand, RecordsCommand, ReportCommand,
};
use config::Config;
use renalog_core::maintenance::MaintenanceGate;
use store::HealthStore;

#[derive(Parser)]
#[command(name = "rena")]
#[command(version)]
#[command(about = "A renal care tracking companion", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard (stats, alerts, reminders, appointments, meals)
    Dashboard(DashboardCommand),

    /// Inspect and import the local record snapshot
    Records(RecordsCommand),

    /// Create, preview and export reports
    Report(ReportCommand),

    /// Inspect and flip the maintenance gate
    Maintenance(MaintenanceCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config)?;

    // The gate is owned here and handed down by reference; commands never
    // reach for ambient global state.
    let mut gate = MaintenanceGate::new(config.maintenance.clone());
    let store = HealthStore::new(config.data_dir.value.clone());

    match &cli.command {
        Commands::Dashboard(cmd) => cmd.run(&config, &gate),
        Commands::Records(cmd) => cmd.run(&store, &gate),
        Commands::Report(cmd) => cmd.run(&store, &config, &gate),
        Commands::Maintenance(cmd) => cmd.run(&mut gate),
        Commands::Config(cmd) => cmd.run(&config),
    }
}
