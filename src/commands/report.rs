use chrono::Utc;
use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

use renalog_core::maintenance::MaintenanceGate;
use renalog_core::models::{Category, ReportConfig};
use renalog_core::report::{
    document_file_name, json_file_name, preview, render_document, to_json_pretty, DirectorySink,
    ExportPayload, ExportSink, RangeToken, SinkError,
};

use crate::config::Config;
use crate::store::HealthStore;

use super::print_page_placeholder;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum ExportFormat {
    /// Pretty-printed JSON file
    #[default]
    Json,
    /// Printable HTML document
    Document,
}

#[derive(Args)]
pub struct ReportCommand {
    #[command(subcommand)]
    pub command: ReportSubcommand,
}

#[derive(Subcommand)]
pub enum ReportSubcommand {
    /// Save a new report definition
    Create {
        /// Display name for the report
        name: String,

        /// Category to include (can be repeated)
        #[arg(long = "category", short = 'c', value_name = "CATEGORY")]
        categories: Vec<String>,

        /// Lookback window, e.g. 30days
        #[arg(long, default_value = "30days")]
        range: String,
    },

    /// List saved reports
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show per-category record counts for a report's range
    Preview {
        /// Report name or ID
        report: String,
    },

    /// Export a report
    Export {
        /// Report name or ID
        report: String,

        /// Export format
        #[arg(long, short, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Export directory (defaults to the configured export_dir)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

impl ReportCommand {
    pub fn run(
        &self,
        store: &HealthStore,
        config: &Config,
        gate: &MaintenanceGate,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if gate.is_under_construction("reports") {
            print_page_placeholder("Reports", &gate.page_config("reports"));
            return Ok(());
        }

        match &self.command {
            ReportSubcommand::Create {
                name,
                categories,
                range,
            } => self.create(name, categories, range, store),
            ReportSubcommand::List { format } => self.list(format, store),
            ReportSubcommand::Preview { report } => self.preview(report, store),
            ReportSubcommand::Export {
                report,
                format,
                out,
            } => self.export(report, *format, out.as_deref(), store, config),
        }
    }

    fn create(
        &self,
        name: &str,
        categories: &[String],
        range: &str,
        store: &HealthStore,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if categories.is_empty() {
            return Err("At least one --category is required".into());
        }

        let mut parsed = Vec::with_capacity(categories.len());
        for raw in categories {
            let category = Category::from_str(raw)?;
            if !parsed.contains(&category) {
                parsed.push(category);
            }
        }

        let range: RangeToken = range.parse()?;
        let report = ReportConfig::new(name, parsed, range);
        store.add_report(report.clone())?;

        println!("✓ Saved report '{}'", report.name);
        println!("  id: {}", report.id);
        println!("  {}", report);
        Ok(())
    }

    fn list(
        &self,
        format: &OutputFormat,
        store: &HealthStore,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let reports = store.load_reports()?;

        match format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            }
            OutputFormat::Text => {
                if reports.is_empty() {
                    println!("No saved reports. Create one with 'rena report create'.");
                    return Ok(());
                }

                println!("Saved reports");
                println!("=============");
                println!();
                for report in &reports {
                    println!("{}", report);
                    println!("  id: {}  created: {}", report.id, report.created_at.format("%Y-%m-%d"));
                }
            }
        }
        Ok(())
    }

    fn preview(
        &self,
        needle: &str,
        store: &HealthStore,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let report = self.find(needle, store)?;
        let records = store.load_records()?;
        let counts = preview(&records, &report, Utc::now());

        println!("Preview: {}", report.name);
        println!("{}", "=".repeat(9 + report.name.len()));
        println!();
        println!("Range: last {}", report.date_range);
        for row in counts {
            println!("  {:12} {} record(s)", row.category.to_string(), row.count);
        }
        Ok(())
    }

    fn export(
        &self,
        needle: &str,
        format: ExportFormat,
        out: Option<&std::path::Path>,
        store: &HealthStore,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let report = self.find(needle, store)?;
        let records = store.load_records()?;

        let now = Utc::now();
        let payload = ExportPayload::assemble(&records, &report, now)?;

        let dir = out
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| config.export_dir.value.clone());
        let sink = DirectorySink::new(dir);

        let result = match format {
            ExportFormat::Json => {
                let contents = to_json_pretty(&payload)?;
                let file_name = json_file_name(&report.name, now.date_naive());
                sink.save_json(&file_name, &contents)
            }
            ExportFormat::Document => {
                let html = render_document(&payload);
                let file_name = document_file_name(&report.name, now.date_naive());
                sink.open_document(&file_name, &html)
            }
        };

        let path = match result {
            Ok(path) => path,
            Err(SinkError::Unavailable(dir, reason)) => {
                return Err(format!(
                    "Export target '{}' is unavailable: {}\nRetry with --out <DIR> to pick another location.",
                    dir.display(),
                    reason
                )
                .into());
            }
            Err(e) => return Err(e.into()),
        };

        println!("✓ Exported '{}' to {}", report.name, path.display());
        for category in payload.present_categories() {
            let count = match category {
                Category::Sessions => payload.sessions.as_ref().map(Vec::len),
                Category::Weights => payload.weights.as_ref().map(Vec::len),
                Category::Fluids => payload.fluids.as_ref().map(Vec::len),
                Category::Vitals => payload.vitals.as_ref().map(Vec::len),
                Category::Medications => payload.medications.as_ref().map(Vec::len),
                Category::Moods => payload.moods.as_ref().map(Vec::len),
            }
            .unwrap_or(0);
            println!("  {:12} {} record(s)", category.to_string(), count);
        }
        Ok(())
    }

    fn find(
        &self,
        needle: &str,
        store: &HealthStore,
    ) -> Result<ReportConfig, Box<dyn std::error::Error>> {
        Ok(store
            .find_report(needle)?
            .ok_or_else(|| format!("Report not found: {}", needle))?)
    }
}
