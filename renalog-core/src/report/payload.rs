//! Export payload assembly.
//!
//! The payload is a transient aggregate built fresh for each export: the
//! profile snapshot, generation metadata, and one collection per selected
//! category. Collections are range-filtered with the same cutoff the
//! preview uses, so preview counts always match exported rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::range::{count_recent, select_recent, RangeToken};
use super::ReportError;
use crate::models::{
    Category, DialysisSession, FluidEntry, HealthRecords, MedicationEntry, MoodEntry,
    PatientProfile, ReportConfig, VitalEntry, WeightEntry,
};

/// The export-ready aggregate. Serializes with camelCase keys; a category
/// key is present iff the category was selected in the report config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub profile: PatientProfile,
    pub generated_at: DateTime<Utc>,
    pub report_name: String,
    pub date_range: RangeToken,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sessions: Option<Vec<DialysisSession>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<WeightEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fluids: Option<Vec<FluidEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vitals: Option<Vec<VitalEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medications: Option<Vec<MedicationEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moods: Option<Vec<MoodEntry>>,
}

impl ExportPayload {
    /// Assembles a payload from the record snapshot and a report config.
    ///
    /// `now` is injected so a frozen clock yields identical payloads; it is
    /// both the generation timestamp and the basis of the range cutoff.
    /// The snapshot is read-only and never mutated.
    pub fn assemble(
        records: &HealthRecords,
        report: &ReportConfig,
        now: DateTime<Utc>,
    ) -> Result<ExportPayload, ReportError> {
        let range = report.date_range;
        let pick = |category: Category| report.includes(category);

        Ok(ExportPayload {
            profile: records.profile.clone(),
            generated_at: now,
            report_name: report.name.clone(),
            date_range: range,
            sessions: pick(Category::Sessions)
                .then(|| select_recent(&records.sessions, now, range)),
            weights: pick(Category::Weights).then(|| select_recent(&records.weights, now, range)),
            fluids: pick(Category::Fluids).then(|| select_recent(&records.fluids, now, range)),
            vitals: pick(Category::Vitals).then(|| select_recent(&records.vitals, now, range)),
            medications: pick(Category::Medications)
                .then(|| select_recent(&records.medications, now, range)),
            moods: pick(Category::Moods).then(|| select_recent(&records.moods, now, range)),
        })
    }

    /// Categories present in this payload, in canonical order.
    pub fn present_categories(&self) -> Vec<Category> {
        let mut present = Vec::new();
        if self.sessions.is_some() {
            present.push(Category::Sessions);
        }
        if self.weights.is_some() {
            present.push(Category::Weights);
        }
        if self.fluids.is_some() {
            present.push(Category::Fluids);
        }
        if self.vitals.is_some() {
            present.push(Category::Vitals);
        }
        if self.medications.is_some() {
            present.push(Category::Medications);
        }
        if self.moods.is_some() {
            present.push(Category::Moods);
        }
        present
    }
}

/// One row of the report preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Per-category record counts for the selected categories, using the same
/// strictly-after window the export applies.
pub fn preview(
    records: &HealthRecords,
    report: &ReportConfig,
    now: DateTime<Utc>,
) -> Vec<CategoryCount> {
    let range = report.date_range;
    report
        .categories
        .iter()
        .map(|&category| {
            let count = match category {
                Category::Sessions => count_recent(&records.sessions, now, range),
                Category::Weights => count_recent(&records.weights, now, range),
                Category::Fluids => count_recent(&records.fluids, now, range),
                Category::Vitals => count_recent(&records.vitals, now, range),
                Category::Medications => count_recent(&records.medications, now, range),
                Category::Moods => count_recent(&records.moods, now, range),
            };
            CategoryCount { category, count }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Modality, SessionType, VitalType};
    use chrono::Duration;

    fn frozen_now() -> DateTime<Utc> {
        "2025-06-30T12:00:00Z".parse().unwrap()
    }

    fn sample_records(now: DateTime<Utc>) -> HealthRecords {
        let mut records = HealthRecords::new(
            PatientProfile::new("Alex", Modality::Hemodialysis)
                .with_dry_weight_goal(72.0)
                .with_daily_fluid_limit(1500),
        );
        records.sessions.push(
            DialysisSession::new(now - Duration::days(2), SessionType::InCenter, 240)
                .with_fluid_removed(1800),
        );
        records.sessions.push(DialysisSession::new(
            now - Duration::days(45),
            SessionType::InCenter,
            240,
        ));
        records.vitals.push(VitalEntry::new(
            now - Duration::days(1),
            VitalType::BloodPressure,
            "128/82",
        ));
        records
            .weights
            .push(WeightEntry::new(now - Duration::days(3), 72.8));
        records
    }

    fn sample_report() -> ReportConfig {
        ReportConfig::new(
            "Clinic summary",
            vec![Category::Sessions, Category::Vitals],
            "30days".parse().unwrap(),
        )
    }

    #[test]
    fn test_assemble_includes_only_selected_categories() {
        let now = frozen_now();
        let payload =
            ExportPayload::assemble(&sample_records(now), &sample_report(), now).unwrap();

        assert_eq!(
            payload.present_categories(),
            vec![Category::Sessions, Category::Vitals]
        );
        assert!(payload.weights.is_none());
        assert!(payload.fluids.is_none());
        assert!(payload.medications.is_none());
        assert!(payload.moods.is_none());
    }

    #[test]
    fn test_assemble_serialized_keys_are_exact() {
        let now = frozen_now();
        let payload =
            ExportPayload::assemble(&sample_records(now), &sample_report(), now).unwrap();

        let value = serde_json::to_value(&payload).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "dateRange",
                "generatedAt",
                "profile",
                "reportName",
                "sessions",
                "vitals"
            ]
        );
    }

    #[test]
    fn test_assemble_applies_range_filter() {
        let now = frozen_now();
        let payload =
            ExportPayload::assemble(&sample_records(now), &sample_report(), now).unwrap();

        // The 45-day-old session falls outside the 30 day window.
        assert_eq!(payload.sessions.as_ref().unwrap().len(), 1);
        assert_eq!(payload.vitals.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_assemble_is_idempotent_with_frozen_clock() {
        let now = frozen_now();
        let records = sample_records(now);
        let report = sample_report();

        let a = ExportPayload::assemble(&records, &report, now).unwrap();
        let b = ExportPayload::assemble(&records, &report, now).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_assemble_does_not_mutate_snapshot() {
        let now = frozen_now();
        let records = sample_records(now);
        let before = records.clone();

        let _ = ExportPayload::assemble(&records, &sample_report(), now).unwrap();
        assert_eq!(records, before);
    }

    #[test]
    fn test_preview_counts_match_export_rows() {
        let now = frozen_now();
        let records = sample_records(now);
        let report = sample_report();

        let counts = preview(&records, &report, now);
        let payload = ExportPayload::assemble(&records, &report, now).unwrap();

        assert_eq!(
            counts,
            vec![
                CategoryCount { category: Category::Sessions, count: 1 },
                CategoryCount { category: Category::Vitals, count: 1 },
            ]
        );
        assert_eq!(
            payload.sessions.unwrap().len(),
            counts[0].count,
        );
    }

    #[test]
    fn test_empty_category_selected_is_present_and_empty() {
        let now = frozen_now();
        let records = sample_records(now);
        let report = ReportConfig::new(
            "Moods only",
            vec![Category::Moods],
            "30days".parse().unwrap(),
        );

        let payload = ExportPayload::assemble(&records, &report, now).unwrap();
        assert!(payload.moods.as_ref().unwrap().is_empty());

        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("moods").is_some());
        assert!(value.get("sessions").is_none());
    }
}
