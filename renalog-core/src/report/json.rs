//! JSON export rendering.

use chrono::NaiveDate;

use super::payload::ExportPayload;
use super::ReportError;

/// Serializes the payload with stable 2-space indentation.
pub fn to_json_pretty(payload: &ExportPayload) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(payload)?)
}

/// `<slug>-<YYYY-MM-DD>.json`
pub fn json_file_name(report_name: &str, date: NaiveDate) -> String {
    format!("{}-{}.json", slug(report_name), date.format("%Y-%m-%d"))
}

/// `<slug>-<YYYY-MM-DD>.html`
pub fn document_file_name(report_name: &str, date: NaiveDate) -> String {
    format!("{}-{}.html", slug(report_name), date.format("%Y-%m-%d"))
}

/// Lowercases the name and collapses anything non-alphanumeric to single
/// dashes so it is safe as a filename on every platform.
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if out.is_empty() {
        out.push_str("report");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, HealthRecords, Modality, PatientProfile, ReportConfig};
    use chrono::{DateTime, Utc};

    fn sample_payload() -> ExportPayload {
        let now: DateTime<Utc> = "2025-06-30T12:00:00Z".parse().unwrap();
        let records = HealthRecords::new(PatientProfile::new("Alex", Modality::Hemodialysis));
        let report = ReportConfig::new(
            "Clinic summary",
            vec![Category::Sessions, Category::Vitals],
            "30days".parse().unwrap(),
        );
        ExportPayload::assemble(&records, &report, now).unwrap()
    }

    #[test]
    fn test_json_round_trip() {
        let payload = sample_payload();
        let json = to_json_pretty(&payload).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["reportName"], "Clinic summary");

        // generatedAt must parse back as ISO-8601.
        let generated_at = value["generatedAt"].as_str().unwrap();
        assert!(generated_at.parse::<DateTime<Utc>>().is_ok());

        // Exactly the selected category keys, no extras, no omissions.
        assert!(value.get("sessions").is_some());
        assert!(value.get("vitals").is_some());
        assert!(value.get("weights").is_none());
        assert!(value.get("fluids").is_none());
        assert!(value.get("medications").is_none());
        assert!(value.get("moods").is_none());

        let parsed: ExportPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, payload);
    }

    #[test]
    fn test_json_uses_two_space_indentation() {
        let json = to_json_pretty(&sample_payload()).unwrap();
        assert!(json.contains("\n  \"profile\""));
    }

    #[test]
    fn test_file_name_pattern() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        assert_eq!(
            json_file_name("Clinic summary", date),
            "clinic-summary-2025-06-30.json"
        );
        assert_eq!(
            document_file_name("Dr. Okafor / June", date),
            "dr-okafor-june-2025-06-30.html"
        );
    }

    #[test]
    fn test_file_name_empty_slug_falls_back() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        assert_eq!(json_file_name("***", date), "report-2025-06-30.json");
    }
}
