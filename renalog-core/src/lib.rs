//! Renalog Core Library
//!
//! Shared types and logic for Renalog applications: health record models,
//! the report/export pipeline, the maintenance gate, and the backend API
//! client.

pub mod api;
pub mod maintenance;
pub mod models;
pub mod report;

pub use api::{ApiClient, ApiError, DashboardData, fetch_dashboard};
pub use maintenance::{
    EffectivePageConfig, MaintenanceGate, MaintenanceSettings, PageConfig, PageMode,
};
pub use models::{
    Category, DialysisSession, FluidEntry, HealthRecords, MedicationEntry, Modality, MoodEntry,
    PatientProfile, ReportConfig, SessionType, VitalEntry, VitalType, WeightEntry,
};
pub use report::{
    count_recent, preview, render_document, select_recent, to_json_pretty, CategoryCount,
    DirectorySink, ExportPayload, ExportSink, RangeToken, ReportError, SinkError, Timestamped,
};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
