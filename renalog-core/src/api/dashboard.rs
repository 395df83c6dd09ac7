//! Dashboard page load: fan-out over the five backend endpoints.
//!
//! The calls are issued concurrently and awaited independently; each one
//! that fails degrades its own section to an empty/default value and is
//! recorded on the result, so a single slow or broken endpoint never
//! blanks the whole page. There is deliberately no aggregate call that
//! could fail as a unit.

use serde::Serialize;
use std::fmt;

use super::client::{ApiClient, ApiError};
use super::types::{Alert, Appointment, DashboardStats, MealEntry, Reminder};

/// One independently fetched dashboard section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Stats,
    Alerts,
    Reminders,
    Appointments,
    Meals,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Stats => write!(f, "stats"),
            Section::Alerts => write!(f, "alerts"),
            Section::Reminders => write!(f, "reminders"),
            Section::Appointments => write!(f, "appointments"),
            Section::Meals => write!(f, "meals"),
        }
    }
}

/// A section that could not be loaded, kept for visible display instead of
/// silently rendering dashes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionFailure {
    pub section: Section,
    pub message: String,
}

/// Everything the dashboard shows, with per-section degradation.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub stats: Option<DashboardStats>,
    pub alerts: Vec<Alert>,
    pub reminders: Vec<Reminder>,
    pub appointments: Vec<Appointment>,
    pub meals: Vec<MealEntry>,
    pub failures: Vec<SectionFailure>,
}

impl DashboardData {
    pub fn is_degraded(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn failure_for(&self, section: Section) -> Option<&SectionFailure> {
        self.failures.iter().find(|f| f.section == section)
    }

    /// True when the backend reported an expired session on any section.
    pub fn session_expired(&self) -> bool {
        self.failures
            .iter()
            .any(|f| f.message == ApiError::SessionExpired.to_string())
    }
}

/// Loads the dashboard with independent graceful degradation per section.
pub async fn fetch_dashboard(client: &ApiClient) -> DashboardData {
    let (stats, alerts, reminders, appointments, meals) = futures::join!(
        client.dashboard_stats(),
        client.alerts(),
        client.reminders(),
        client.appointments(),
        client.meals(),
    );

    let mut failures = Vec::new();
    let stats = recover(Section::Stats, stats, &mut failures);
    let alerts = recover(Section::Alerts, alerts, &mut failures).unwrap_or_default();
    let reminders = recover(Section::Reminders, reminders, &mut failures).unwrap_or_default();
    let appointments =
        recover(Section::Appointments, appointments, &mut failures).unwrap_or_default();
    let meals = recover(Section::Meals, meals, &mut failures).unwrap_or_default();

    DashboardData {
        stats,
        alerts,
        reminders,
        appointments,
        meals,
        failures,
    }
}

/// Fallback-to-default combinator for one section. Failures are logged,
/// except a recognized expired session which is expected to be handled by
/// re-authentication rather than warned about.
fn recover<T>(
    section: Section,
    result: Result<T, ApiError>,
    failures: &mut Vec<SectionFailure>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            match error {
                ApiError::SessionExpired => {
                    tracing::debug!(section = %section, "session expired, section skipped");
                }
                ref e => {
                    tracing::warn!(section = %section, error = %e, "dashboard section failed");
                }
            }
            failures.push(SectionFailure {
                section,
                message: error.to_string(),
            });
            None
        }
    }
}
