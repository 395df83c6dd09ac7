use clap::Args;

use renalog_core::api::{fetch_dashboard, ApiClient, DashboardData, Section};
use renalog_core::maintenance::MaintenanceGate;

use crate::config::Config;

use super::print_page_placeholder;

/// Show the dashboard
#[derive(Args)]
pub struct DashboardCommand {}

impl DashboardCommand {
    pub fn run(
        &self,
        config: &Config,
        gate: &MaintenanceGate,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if gate.is_under_construction("dashboard") {
            print_page_placeholder("Dashboard", &gate.page_config("dashboard"));
            return Ok(());
        }

        let (base_url, api_key) = match (&config.api.base_url, &config.api.api_key) {
            (Some(url), Some(key)) => (url.clone(), key.clone()),
            _ => {
                return Err(
                    "Backend not configured. Set api.base_url and api.api_key in the config \
                     file, or RENA_API_URL and RENA_API_KEY."
                        .into(),
                )
            }
        };

        let client = ApiClient::new(base_url, api_key)?;

        let rt = tokio::runtime::Runtime::new()?;
        let data = rt.block_on(fetch_dashboard(&client));

        if data.session_expired() {
            return Err("Session expired. Sign in again to refresh your data.".into());
        }

        print_dashboard(&data);
        Ok(())
    }
}

fn print_dashboard(data: &DashboardData) {
    println!("Dashboard");
    println!("=========");
    println!();

    match &data.stats {
        Some(stats) => {
            println!("Sessions this week: {}", stats.sessions_this_week);
            println!(
                "Fluid today: {} / {} ml ({}%)",
                stats.fluid_today_ml,
                stats.fluid_limit_ml,
                stats.fluid_used_percent()
            );
            match stats.last_weight_kg {
                Some(kg) => {
                    let change = stats
                        .weight_change_kg
                        .map(|c| format!(" ({:+.1} kg)", c))
                        .unwrap_or_default();
                    println!("Last weight: {:.1} kg{}", kg, change);
                }
                None => println!("Last weight: -"),
            }
        }
        None => println!("Stats: -"),
    }

    println!();
    print_section_header(data, Section::Alerts, "Alerts", data.alerts.len());
    for alert in &data.alerts {
        let marker = if alert.acknowledged { " " } else { "!" };
        println!(
            "  {} [{}] {}",
            marker,
            alert.severity,
            alert.message
        );
    }

    println!();
    print_section_header(data, Section::Reminders, "Reminders", data.reminders.len());
    for reminder in &data.reminders {
        let status = if reminder.completed { "✓" } else { "·" };
        println!(
            "  {} {} (due {})",
            status,
            reminder.title,
            reminder.due_at.format("%Y-%m-%d %H:%M")
        );
    }

    println!();
    print_section_header(
        data,
        Section::Appointments,
        "Appointments",
        data.appointments.len(),
    );
    for appointment in &data.appointments {
        let provider = appointment
            .provider
            .as_deref()
            .map(|p| format!(" with {}", p))
            .unwrap_or_default();
        println!(
            "  {} {}{}",
            appointment.scheduled_at.format("%Y-%m-%d %H:%M"),
            appointment.title,
            provider
        );
    }

    println!();
    print_section_header(data, Section::Meals, "Recent meals", data.meals.len());
    for meal in &data.meals {
        let mut nutrients = Vec::new();
        if let Some(mg) = meal.sodium_mg {
            nutrients.push(format!("Na {} mg", mg));
        }
        if let Some(mg) = meal.potassium_mg {
            nutrients.push(format!("K {} mg", mg));
        }
        if let Some(mg) = meal.phosphorus_mg {
            nutrients.push(format!("P {} mg", mg));
        }
        let detail = if nutrients.is_empty() {
            String::new()
        } else {
            format!(" [{}]", nutrients.join(", "))
        };
        println!(
            "  {} {}{}",
            meal.eaten_at.format("%Y-%m-%d"),
            meal.description,
            detail
        );
    }

    if data.is_degraded() {
        println!();
        for failure in &data.failures {
            println!("✗ Could not load {}: {}", failure.section, failure.message);
        }
    }
}

fn print_section_header(data: &DashboardData, section: Section, title: &str, count: usize) {
    if data.failure_for(section).is_some() {
        println!("{}: -", title);
    } else if count == 0 {
        println!("{}: none", title);
    } else {
        println!("{}:", title);
    }
}
