//! Wire types for the backend REST API.
//!
//! Every endpoint wraps its body in a `{ data, meta }` envelope. Field
//! names use camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The `{ data, meta }` wrapper around every response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub meta: Option<ResponseMeta>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponseMeta {
    pub request_id: Option<String>,
    pub generated_at: Option<DateTime<Utc>>,
}

/// Aggregated numbers for the dashboard header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub sessions_this_week: u32,
    pub fluid_today_ml: u32,
    pub fluid_limit_ml: u32,
    pub last_weight_kg: Option<f64>,
    pub weight_change_kg: Option<f64>,
}

impl DashboardStats {
    /// Percentage of today's fluid limit already used. Zero when no limit
    /// is configured; may exceed 100 when over the limit.
    pub fn fluid_used_percent(&self) -> u32 {
        if self.fluid_limit_ml == 0 {
            return 0;
        }
        self.fluid_today_ml * 100 / self.fluid_limit_ml
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertSeverity::Info => write!(f, "info"),
            AlertSeverity::Warning => write!(f, "warning"),
            AlertSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// A clinician- or rule-generated alert (computed backend-side).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: Uuid,
    pub severity: AlertSeverity,
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub acknowledged: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: Uuid,
    pub title: String,
    pub due_at: DateTime<Utc>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub title: String,
    pub provider: Option<String>,
    pub location: Option<String>,
    pub scheduled_at: DateTime<Utc>,
}

/// A logged meal with the nutrients that matter on a renal diet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealEntry {
    pub id: Uuid,
    pub eaten_at: DateTime<Utc>,
    pub description: String,
    pub sodium_mg: Option<u32>,
    pub potassium_mg: Option<u32>,
    pub phosphorus_mg: Option<u32>,
    pub protein_g: Option<f32>,
    pub fluid_ml: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_meta() {
        let json = r#"{
            "data": {
                "sessionsThisWeek": 3,
                "fluidTodayMl": 900,
                "fluidLimitMl": 1500,
                "lastWeightKg": 72.4,
                "weightChangeKg": -0.6
            },
            "meta": { "requestId": "req-123", "generatedAt": "2025-06-30T12:00:00Z" }
        }"#;

        let envelope: Envelope<DashboardStats> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.sessions_this_week, 3);
        assert_eq!(envelope.meta.unwrap().request_id.as_deref(), Some("req-123"));
    }

    #[test]
    fn test_envelope_without_meta() {
        let json = r#"{ "data": [] }"#;
        let envelope: Envelope<Vec<Alert>> = serde_json::from_str(json).unwrap();
        assert!(envelope.data.is_empty());
        assert!(envelope.meta.is_none());
    }

    #[test]
    fn test_fluid_used_percent() {
        let mut stats = DashboardStats {
            sessions_this_week: 0,
            fluid_today_ml: 900,
            fluid_limit_ml: 1500,
            last_weight_kg: None,
            weight_change_kg: None,
        };
        assert_eq!(stats.fluid_used_percent(), 60);

        stats.fluid_today_ml = 1800;
        assert_eq!(stats.fluid_used_percent(), 120);

        stats.fluid_limit_ml = 0;
        assert_eq!(stats.fluid_used_percent(), 0);
    }

    #[test]
    fn test_alert_decodes_camel_case() {
        let json = r#"{
            "id": "6f0a1f9a-0f2e-4a3b-8a25-94a1f0d2b111",
            "severity": "critical",
            "message": "Potassium trending high",
            "createdAt": "2025-06-29T08:00:00Z"
        }"#;

        let alert: Alert = serde_json::from_str(json).unwrap();
        assert_eq!(alert.severity, AlertSeverity::Critical);
        assert!(!alert.acknowledged);
    }
}
