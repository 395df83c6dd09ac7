use clap::{Args, Subcommand};

use renalog_core::maintenance::MaintenanceGate;

/// Pages the application knows how to gate.
const KNOWN_PAGES: [&str; 3] = ["dashboard", "records", "reports"];

/// Inspect and flip the maintenance gate
#[derive(Args)]
pub struct MaintenanceCommand {
    #[command(subcommand)]
    pub command: MaintenanceSubcommand,
}

#[derive(Subcommand)]
pub enum MaintenanceSubcommand {
    /// Show the effective gate state per page
    Status,

    /// Flip global maintenance for this process
    Global {
        /// Turn global maintenance on
        #[arg(long, conflicts_with = "off")]
        on: bool,

        /// Turn global maintenance off
        #[arg(long)]
        off: bool,

        /// Maintenance message shown on every page
        #[arg(long)]
        message: Option<String>,
    },

    /// Gate a single page
    Enable {
        /// Page name (dashboard, records, reports)
        page: String,
    },

    /// Open a single page back up
    Disable {
        /// Page name (dashboard, records, reports)
        page: String,
    },
}

impl MaintenanceCommand {
    pub fn run(&self, gate: &mut MaintenanceGate) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            MaintenanceSubcommand::Status => {}
            MaintenanceSubcommand::Global { on, off, message } => {
                let enabled = if *on {
                    true
                } else if *off {
                    false
                } else {
                    gate.global_enabled()
                };
                gate.set_maintenance_mode(enabled, message.clone());
                println!(
                    "✓ Global maintenance {}",
                    if enabled { "enabled" } else { "disabled" }
                );
                println!();
            }
            MaintenanceSubcommand::Enable { page } => {
                gate.set_page_status(page, true);
                println!("✓ Page '{}' gated", page);
                println!();
            }
            MaintenanceSubcommand::Disable { page } => {
                gate.set_page_status(page, false);
                println!("✓ Page '{}' opened", page);
                println!();
            }
        }

        print_status(gate);

        if !matches!(self.command, MaintenanceSubcommand::Status) {
            println!();
            println!(
                "Note: gate changes apply to this process only; edit the config file or \
                 RENA_MAINTENANCE_MODE to make them stick."
            );
        }
        Ok(())
    }
}

fn print_status(gate: &MaintenanceGate) {
    println!("Maintenance status");
    println!("==================");
    println!();
    println!(
        "Global maintenance: {}",
        if gate.global_enabled() { "ON" } else { "off" }
    );
    println!();

    // Known pages first, then anything extra from the config map.
    let mut pages: Vec<&str> = KNOWN_PAGES.to_vec();
    for page in gate.configured_pages() {
        if !pages.contains(&page) {
            pages.push(page);
        }
    }

    for page in pages {
        let effective = gate.page_config(page);
        if effective.enabled {
            let detail = effective
                .message
                .as_deref()
                .map(|m| format!(" - {}", m))
                .unwrap_or_default();
            println!("  ✗ {:12} {}{}", page, effective.mode, detail);
        } else {
            println!("  ✓ {:12} open", page);
        }
    }
}
