mod config_cmd;
mod dashboard;
mod maintenance_cmd;
mod records;
mod report;

pub use config_cmd::ConfigCommand;
pub use dashboard::DashboardCommand;
pub use maintenance_cmd::MaintenanceCommand;
pub use records::RecordsCommand;
pub use report::ReportCommand;

use renalog_core::maintenance::{EffectivePageConfig, PageMode};

/// Placeholder shown instead of real content when a page is gated.
pub(crate) fn print_page_placeholder(page_title: &str, config: &EffectivePageConfig) {
    let heading = config.title.clone().unwrap_or_else(|| match config.mode {
        PageMode::Maintenance => format!("{} is under maintenance", page_title),
        PageMode::ComingSoon => format!("{} is coming soon", page_title),
    });

    println!("{}", heading);
    println!("{}", "=".repeat(heading.len()));

    if let Some(message) = &config.message {
        println!();
        println!("{}", message);
    }
    if let Some(progress) = config.progress {
        println!("Progress: {}%", progress);
    }
    if let Some(date) = config.expected_date {
        println!("Expected: {}", date);
    }
    if config.is_global_maintenance {
        println!();
        println!("All pages are temporarily unavailable.");
    }
}
