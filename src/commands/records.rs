use clap::{Args, Subcommand};
use std::path::PathBuf;

use renalog_core::maintenance::MaintenanceGate;
use renalog_core::models::Category;

use crate::store::HealthStore;

use super::print_page_placeholder;

/// Inspect and import the local record snapshot
#[derive(Args)]
pub struct RecordsCommand {
    #[command(subcommand)]
    pub command: RecordsSubcommand,
}

#[derive(Subcommand)]
pub enum RecordsSubcommand {
    /// Show the profile and per-category record counts
    Summary,

    /// Install a snapshot file fetched from the backend
    Import {
        /// Path to a records JSON file
        file: PathBuf,
    },
}

impl RecordsCommand {
    pub fn run(
        &self,
        store: &HealthStore,
        gate: &MaintenanceGate,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if gate.is_under_construction("records") {
            print_page_placeholder("Records", &gate.page_config("records"));
            return Ok(());
        }

        match &self.command {
            RecordsSubcommand::Summary => {
                let records = store.load_records()?;

                println!("Records");
                println!("=======");
                println!();
                if records.profile.name.is_empty() {
                    println!("No profile yet. Import a snapshot with 'rena records import'.");
                } else {
                    print!("{}", records.profile);
                }
                println!();
                for category in Category::ALL {
                    println!("  {:12} {} record(s)", category.to_string(), records.count(category));
                }
                println!();
                println!("Data dir: {}", store.data_dir().display());
                Ok(())
            }
            RecordsSubcommand::Import { file } => {
                let records = store.import_records(file)?;
                println!(
                    "✓ Imported {} record(s) for {}",
                    records.total(),
                    if records.profile.name.is_empty() {
                        "unnamed profile"
                    } else {
                        records.profile.name.as_str()
                    }
                );
                Ok(())
            }
        }
    }
}
