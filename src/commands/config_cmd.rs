use clap::{Args, Subcommand, ValueEnum};
use std::fs;
use std::io::Write;

use crate::config::Config;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show current configuration values
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Initialize configuration file
    Init,
}

impl ConfigCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ConfigSubcommand::Show { format } => {
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(config)?);
                    }
                    OutputFormat::Text => {
                        println!("Configuration");
                        println!("=============\n");

                        if let Some(path) = &config.config_file {
                            println!("Config file: {}", path.display());
                        } else {
                            println!(
                                "Config file: {} (not found)",
                                Config::default_config_path().display()
                            );
                        }
                        println!();

                        println!("data_dir: {}", config.data_dir.value.display());
                        println!("  source: {}", config.data_dir.source);
                        println!();

                        println!("export_dir: {}", config.export_dir.value.display());
                        println!("  source: {}", config.export_dir.source);
                        println!();

                        println!(
                            "api: {}",
                            if config.api.is_configured() {
                                config.api.base_url.as_deref().unwrap_or("")
                            } else {
                                "(not configured)"
                            }
                        );
                        println!();

                        println!(
                            "maintenance: global {}",
                            if config.maintenance.enabled { "ON" } else { "off" }
                        );
                        for (page, page_config) in &config.maintenance.pages {
                            println!(
                                "  {}: {}",
                                page,
                                if page_config.enabled { "gated" } else { "open" }
                            );
                        }
                    }
                }
                Ok(())
            }

            ConfigSubcommand::Init => {
                let config_path = Config::default_config_path();

                // Check if config already exists
                if config_path.exists() {
                    println!("Config file already exists: {}", config_path.display());
                    println!("Use 'rena config show' to view current configuration.");
                    return Ok(());
                }

                // Create parent directory
                if let Some(parent) = config_path.parent() {
                    fs::create_dir_all(parent)?;
                }

                // Write default config
                let default_config = r#"# rena configuration

# Directory for the local record snapshot and saved reports
# data_dir: ~/.local/share/rena

# Directory exports are written into
# export_dir: ~/.local/share/rena/exports

# Backend API connection
# api:
#   base_url: https://api.renalog.example
#   api_key: your-key-here

# Maintenance gate. Global 'enabled' gates every page; the per-page map
# gates individual pages. RENA_MAINTENANCE_MODE / RENA_MAINTENANCE_MESSAGE
# override the global switch and message.
# maintenance:
#   enabled: false
#   message: ""
#   pages:
#     dashboard:
#       enabled: false
#       mode: coming-soon
#     reports:
#       enabled: false
#       mode: maintenance
"#;

                let mut file = fs::File::create(&config_path)?;
                file.write_all(default_config.as_bytes())?;

                println!("Created config file: {}", config_path.display());
                println!("\nEdit this file to customize your settings.");
                Ok(())
            }
        }
    }
}
