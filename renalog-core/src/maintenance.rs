//! Maintenance / coming-soon gate.
//!
//! Decides, per named page, whether the application shows real content or
//! a placeholder. The gate is a plain value built once by the application
//! shell from its settings and passed down by reference; runtime mutation
//! methods only touch that owned value and nothing is persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Fallback message when global maintenance is on and no message is set.
pub const DEFAULT_MAINTENANCE_MESSAGE: &str =
    "The application is temporarily down for maintenance.";

/// What kind of placeholder a gated page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PageMode {
    #[default]
    ComingSoon,
    Maintenance,
}

impl fmt::Display for PageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageMode::ComingSoon => write!(f, "coming-soon"),
            PageMode::Maintenance => write!(f, "maintenance"),
        }
    }
}

/// Per-page gate configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PageConfig {
    pub enabled: bool,
    pub title: Option<String>,
    pub message: Option<String>,
    /// Build-out progress, 0..=100, for coming-soon pages.
    pub progress: Option<u8>,
    pub expected_date: Option<NaiveDate>,
    pub mode: PageMode,
}

/// The settings bundle the gate is built from, as it appears in the
/// application config file (and env overrides applied by the loader).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MaintenanceSettings {
    /// Global maintenance switch; overrides every page when set.
    pub enabled: bool,
    pub message: Option<String>,
    pub pages: HashMap<String, PageConfig>,
}

/// The effective configuration for one page after applying the global
/// override.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectivePageConfig {
    pub enabled: bool,
    pub mode: PageMode,
    pub title: Option<String>,
    pub message: Option<String>,
    pub progress: Option<u8>,
    pub expected_date: Option<NaiveDate>,
    pub is_global_maintenance: bool,
}

/// Process-wide page gate, owned by the application shell.
#[derive(Debug, Clone, Default)]
pub struct MaintenanceGate {
    global_enabled: bool,
    global_message: Option<String>,
    pages: HashMap<String, PageConfig>,
}

impl MaintenanceGate {
    pub fn new(settings: MaintenanceSettings) -> Self {
        Self {
            global_enabled: settings.enabled,
            global_message: settings.message,
            pages: settings.pages,
        }
    }

    pub fn global_enabled(&self) -> bool {
        self.global_enabled
    }

    /// True when the page should show a placeholder instead of content:
    /// global maintenance is on, or the page itself is gated.
    pub fn is_under_construction(&self, page: &str) -> bool {
        if self.global_enabled {
            return true;
        }
        self.pages.get(page).map(|p| p.enabled).unwrap_or(false)
    }

    /// The effective config for a page. Global maintenance fully overrides
    /// per-page settings: enabled/mode/message are forced and the
    /// coming-soon-only fields are cleared. Unknown pages resolve to the
    /// default (disabled) config.
    pub fn page_config(&self, page: &str) -> EffectivePageConfig {
        let own = self.pages.get(page).cloned().unwrap_or_default();

        if self.global_enabled {
            return EffectivePageConfig {
                enabled: true,
                mode: PageMode::Maintenance,
                title: own.title,
                message: Some(
                    self.global_message
                        .clone()
                        .unwrap_or_else(|| DEFAULT_MAINTENANCE_MESSAGE.to_string()),
                ),
                progress: None,
                expected_date: None,
                is_global_maintenance: true,
            };
        }

        EffectivePageConfig {
            enabled: own.enabled,
            mode: own.mode,
            title: own.title,
            message: own.message,
            progress: own.progress,
            expected_date: own.expected_date,
            is_global_maintenance: false,
        }
    }

    /// Flips a single page's gate, keeping the rest of its config.
    pub fn set_page_status(&mut self, page: &str, enabled: bool) {
        self.pages.entry(page.to_string()).or_default().enabled = enabled;
    }

    /// Flips global maintenance. A `None` message keeps the current one.
    pub fn set_maintenance_mode(&mut self, enabled: bool, message: Option<String>) {
        self.global_enabled = enabled;
        if message.is_some() {
            self.global_message = message;
        }
    }

    /// Replaces a page's full config.
    pub fn update_page(&mut self, page: &str, config: PageConfig) {
        self.pages.insert(page.to_string(), config);
    }

    /// Configured page names, sorted for stable display.
    pub fn configured_pages(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.pages.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate_with_page(page: &str, config: PageConfig) -> MaintenanceGate {
        let mut settings = MaintenanceSettings::default();
        settings.pages.insert(page.to_string(), config);
        MaintenanceGate::new(settings)
    }

    #[test]
    fn test_disabled_page_without_global_is_open() {
        let gate = gate_with_page("dashboard", PageConfig::default());
        assert!(!gate.is_under_construction("dashboard"));
        assert!(!gate.is_under_construction("reports"));
    }

    #[test]
    fn test_page_gate_applies_without_global() {
        let gate = gate_with_page(
            "reports",
            PageConfig {
                enabled: true,
                mode: PageMode::ComingSoon,
                progress: Some(60),
                ..Default::default()
            },
        );

        assert!(gate.is_under_construction("reports"));
        assert!(!gate.is_under_construction("dashboard"));

        let effective = gate.page_config("reports");
        assert!(effective.enabled);
        assert_eq!(effective.mode, PageMode::ComingSoon);
        assert_eq!(effective.progress, Some(60));
        assert!(!effective.is_global_maintenance);
    }

    #[test]
    fn test_global_maintenance_gates_every_page() {
        let mut settings = MaintenanceSettings {
            enabled: true,
            message: Some("Upgrading".to_string()),
            ..Default::default()
        };
        settings
            .pages
            .insert("dashboard".to_string(), PageConfig::default());
        let gate = MaintenanceGate::new(settings);

        for page in ["dashboard", "reports", "records", "anything-else"] {
            assert!(gate.is_under_construction(page), "page {}", page);
        }
    }

    #[test]
    fn test_global_maintenance_overrides_page_config() {
        let mut settings = MaintenanceSettings {
            enabled: true,
            message: Some("Upgrading".to_string()),
            ..Default::default()
        };
        settings.pages.insert(
            "dashboard".to_string(),
            PageConfig {
                enabled: false,
                mode: PageMode::ComingSoon,
                message: Some("own message".to_string()),
                progress: Some(10),
                ..Default::default()
            },
        );
        let gate = MaintenanceGate::new(settings);

        let effective = gate.page_config("dashboard");
        assert!(effective.enabled);
        assert_eq!(effective.mode, PageMode::Maintenance);
        assert_eq!(effective.message.as_deref(), Some("Upgrading"));
        assert!(effective.is_global_maintenance);
        assert_eq!(effective.progress, None);
    }

    #[test]
    fn test_global_maintenance_default_message() {
        let gate = MaintenanceGate::new(MaintenanceSettings {
            enabled: true,
            ..Default::default()
        });

        let effective = gate.page_config("dashboard");
        assert_eq!(effective.message.as_deref(), Some(DEFAULT_MAINTENANCE_MESSAGE));
    }

    #[test]
    fn test_set_page_status_creates_entry() {
        let mut gate = MaintenanceGate::default();
        gate.set_page_status("records", true);
        assert!(gate.is_under_construction("records"));

        gate.set_page_status("records", false);
        assert!(!gate.is_under_construction("records"));
    }

    #[test]
    fn test_set_maintenance_mode_keeps_message_when_none() {
        let mut gate = MaintenanceGate::new(MaintenanceSettings {
            enabled: false,
            message: Some("Scheduled window".to_string()),
            ..Default::default()
        });

        gate.set_maintenance_mode(true, None);
        assert_eq!(
            gate.page_config("dashboard").message.as_deref(),
            Some("Scheduled window")
        );

        gate.set_maintenance_mode(true, Some("New message".to_string()));
        assert_eq!(
            gate.page_config("dashboard").message.as_deref(),
            Some("New message")
        );
    }

    #[test]
    fn test_update_page_replaces_config() {
        let mut gate = gate_with_page(
            "reports",
            PageConfig {
                enabled: true,
                ..Default::default()
            },
        );

        gate.update_page(
            "reports",
            PageConfig {
                enabled: false,
                mode: PageMode::Maintenance,
                ..Default::default()
            },
        );

        assert!(!gate.is_under_construction("reports"));
        assert_eq!(gate.page_config("reports").mode, PageMode::Maintenance);
    }

    #[test]
    fn test_configured_pages_sorted() {
        let mut settings = MaintenanceSettings::default();
        settings.pages.insert("records".into(), PageConfig::default());
        settings.pages.insert("dashboard".into(), PageConfig::default());
        let gate = MaintenanceGate::new(settings);

        assert_eq!(gate.configured_pages(), vec!["dashboard", "records"]);
    }
}
