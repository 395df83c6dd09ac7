//! Print-ready HTML document rendering.
//!
//! Produces a self-contained document with inline CSS that opens straight
//! into the print dialog. Each category table is capped at the first
//! [`DOCUMENT_ROW_LIMIT`] records.

use std::fmt::Write;

use super::payload::ExportPayload;
use crate::models::{
    DialysisSession, FluidEntry, MedicationEntry, MoodEntry, VitalEntry, WeightEntry,
};

/// Maximum rows shown per category table.
pub const DOCUMENT_ROW_LIMIT: usize = 5;

const STYLE: &str = "\
body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; color: #1a202c; margin: 2rem; }\n\
h1 { font-size: 1.5rem; margin-bottom: 0.25rem; }\n\
h2 { font-size: 1.1rem; border-bottom: 1px solid #cbd5e0; padding-bottom: 0.25rem; margin-top: 1.5rem; }\n\
.meta { color: #4a5568; font-size: 0.85rem; }\n\
.card { background: #f7fafc; border: 1px solid #e2e8f0; border-radius: 6px; padding: 0.75rem 1rem; margin-top: 1rem; }\n\
.card dt { font-weight: 600; font-size: 0.8rem; color: #4a5568; }\n\
.card dd { margin: 0 0 0.5rem 0; }\n\
table { width: 100%; border-collapse: collapse; margin-top: 0.5rem; font-size: 0.9rem; }\n\
th { text-align: left; background: #edf2f7; padding: 0.35rem 0.5rem; }\n\
td { padding: 0.35rem 0.5rem; border-top: 1px solid #e2e8f0; }\n\
.truncated { color: #718096; font-size: 0.8rem; margin-top: 0.25rem; }\n";

/// Renders the payload as a standalone printable HTML document.
pub fn render_document(payload: &ExportPayload) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape(&payload.report_name));
    let _ = writeln!(html, "<style>\n{}</style>", STYLE);
    html.push_str("</head>\n<body onload=\"window.print()\">\n");

    // Header: report name, generation time, patient, modality.
    let _ = writeln!(html, "<h1>{}</h1>", escape(&payload.report_name));
    let _ = writeln!(
        html,
        "<p class=\"meta\">Generated {} &middot; {} &middot; {} &middot; range {}</p>",
        payload.generated_at.format("%Y-%m-%d %H:%M UTC"),
        escape(&payload.profile.name),
        payload.profile.modality,
        payload.date_range,
    );

    // Clinical profile card.
    html.push_str("<dl class=\"card\">\n");
    let _ = writeln!(
        html,
        "<dt>Dry weight goal</dt><dd>{:.1} kg</dd>",
        payload.profile.dry_weight_goal_kg
    );
    let _ = writeln!(
        html,
        "<dt>Daily fluid limit</dt><dd>{} ml</dd>",
        payload.profile.daily_fluid_limit_ml
    );
    html.push_str("</dl>\n");

    if let Some(sessions) = &payload.sessions {
        render_sessions(&mut html, sessions);
    }
    if let Some(weights) = &payload.weights {
        render_weights(&mut html, weights);
    }
    if let Some(fluids) = &payload.fluids {
        render_fluids(&mut html, fluids);
    }
    if let Some(vitals) = &payload.vitals {
        render_vitals(&mut html, vitals);
    }
    if let Some(medications) = &payload.medications {
        render_medications(&mut html, medications);
    }
    if let Some(moods) = &payload.moods {
        render_moods(&mut html, moods);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_sessions(html: &mut String, sessions: &[DialysisSession]) {
    section_heading(html, "Dialysis sessions", sessions.len());
    if sessions.is_empty() {
        return;
    }
    html.push_str(
        "<table>\n<tr><th>Date</th><th>Type</th><th>Fluid removed</th><th>Pre &rarr; post weight</th></tr>\n",
    );
    for session in sessions.iter().take(DOCUMENT_ROW_LIMIT) {
        let fluid = match session.fluid_removed_ml {
            Some(ml) => format!("{} ml", ml),
            None => "-".to_string(),
        };
        let weights = match (session.pre_weight_kg, session.post_weight_kg) {
            (Some(pre), Some(post)) => format!("{:.1} &rarr; {:.1} kg", pre, post),
            _ => "-".to_string(),
        };
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            session.recorded_at.format("%Y-%m-%d"),
            session.session_type,
            fluid,
            weights,
        );
    }
    close_table(html, sessions.len());
}

fn render_weights(html: &mut String, weights: &[WeightEntry]) {
    section_heading(html, "Weights", weights.len());
    if weights.is_empty() {
        return;
    }
    html.push_str("<table>\n<tr><th>Date</th><th>Weight</th><th>Notes</th></tr>\n");
    for entry in weights.iter().take(DOCUMENT_ROW_LIMIT) {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{:.1} kg</td><td>{}</td></tr>",
            entry.recorded_at.format("%Y-%m-%d"),
            entry.weight_kg,
            escape(entry.notes.as_deref().unwrap_or("")),
        );
    }
    close_table(html, weights.len());
}

fn render_fluids(html: &mut String, fluids: &[FluidEntry]) {
    section_heading(html, "Fluid intake", fluids.len());
    if fluids.is_empty() {
        return;
    }
    html.push_str("<table>\n<tr><th>Date</th><th>Source</th><th>Amount</th></tr>\n");
    for entry in fluids.iter().take(DOCUMENT_ROW_LIMIT) {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{} ml</td></tr>",
            entry.recorded_at.format("%Y-%m-%d"),
            escape(&entry.source),
            entry.amount_ml,
        );
    }
    close_table(html, fluids.len());
}

fn render_vitals(html: &mut String, vitals: &[VitalEntry]) {
    section_heading(html, "Vitals", vitals.len());
    if vitals.is_empty() {
        return;
    }
    html.push_str("<table>\n<tr><th>Date</th><th>Type</th><th>Reading</th><th>Notes</th></tr>\n");
    for entry in vitals.iter().take(DOCUMENT_ROW_LIMIT) {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            entry.recorded_at.format("%Y-%m-%d"),
            entry.vital_type,
            escape(&entry.reading),
            escape(entry.notes.as_deref().unwrap_or("")),
        );
    }
    close_table(html, vitals.len());
}

fn render_medications(html: &mut String, medications: &[MedicationEntry]) {
    section_heading(html, "Medications", medications.len());
    if medications.is_empty() {
        return;
    }
    html.push_str(
        "<table>\n<tr><th>Date</th><th>Medication</th><th>Dosage</th><th>Taken</th></tr>\n",
    );
    for entry in medications.iter().take(DOCUMENT_ROW_LIMIT) {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            entry.recorded_at.format("%Y-%m-%d"),
            escape(&entry.name),
            escape(&entry.dosage),
            if entry.taken { "yes" } else { "no" },
        );
    }
    close_table(html, medications.len());
}

fn render_moods(html: &mut String, moods: &[MoodEntry]) {
    section_heading(html, "Mood", moods.len());
    if moods.is_empty() {
        return;
    }
    html.push_str("<table>\n<tr><th>Date</th><th>Score</th><th>Notes</th></tr>\n");
    for entry in moods.iter().take(DOCUMENT_ROW_LIMIT) {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}/5</td><td>{}</td></tr>",
            entry.recorded_at.format("%Y-%m-%d"),
            entry.score,
            escape(entry.notes.as_deref().unwrap_or("")),
        );
    }
    close_table(html, moods.len());
}

fn section_heading(html: &mut String, title: &str, count: usize) {
    let _ = writeln!(html, "<h2>{} ({})</h2>", title, count);
    if count == 0 {
        html.push_str("<p class=\"meta\">No records in the selected range.</p>\n");
    }
}

fn close_table(html: &mut String, total: usize) {
    html.push_str("</table>\n");
    if total > DOCUMENT_ROW_LIMIT {
        let _ = writeln!(
            html,
            "<p class=\"truncated\">Showing first {} of {} records.</p>",
            DOCUMENT_ROW_LIMIT, total
        );
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Category, HealthRecords, Modality, PatientProfile, ReportConfig, SessionType, VitalType,
    };
    use chrono::{DateTime, Duration, Utc};

    fn frozen_now() -> DateTime<Utc> {
        "2025-06-30T12:00:00Z".parse().unwrap()
    }

    fn sample_payload() -> ExportPayload {
        let now = frozen_now();
        let mut records = HealthRecords::new(
            PatientProfile::new("Alex", Modality::Hemodialysis)
                .with_dry_weight_goal(72.0)
                .with_daily_fluid_limit(1500),
        );
        for i in 0..8 {
            records.sessions.push(
                DialysisSession::new(now - Duration::days(i), SessionType::InCenter, 240)
                    .with_fluid_removed(1500 + i as u32 * 100)
                    .with_weights(74.0, 72.0),
            );
        }
        records.vitals.push(
            VitalEntry::new(now - Duration::days(1), VitalType::BloodPressure, "128/82")
                .with_notes("morning <pre-dialysis>"),
        );
        let report = ReportConfig::new(
            "Clinic summary",
            vec![Category::Sessions, Category::Vitals],
            "30days".parse().unwrap(),
        );
        ExportPayload::assemble(&records, &report, now).unwrap()
    }

    #[test]
    fn test_document_contains_header_and_profile_card() {
        let html = render_document(&sample_payload());
        assert!(html.contains("<h1>Clinic summary</h1>"));
        assert!(html.contains("Alex"));
        assert!(html.contains("hemodialysis"));
        assert!(html.contains("72.0 kg"));
        assert!(html.contains("1500 ml"));
        assert!(html.contains("window.print()"));
    }

    #[test]
    fn test_document_caps_rows_at_limit() {
        let html = render_document(&sample_payload());
        let rows = html.matches("<td>2025-").count();
        // 5 capped session rows + 1 vital row.
        assert_eq!(rows, DOCUMENT_ROW_LIMIT + 1);
        assert!(html.contains("Showing first 5 of 8 records."));
    }

    #[test]
    fn test_document_escapes_user_text() {
        let html = render_document(&sample_payload());
        assert!(html.contains("&lt;pre-dialysis&gt;"));
        assert!(!html.contains("<pre-dialysis>"));
    }

    #[test]
    fn test_document_omits_unselected_categories() {
        let html = render_document(&sample_payload());
        assert!(!html.contains("<h2>Weights"));
        assert!(!html.contains("<h2>Mood"));
    }
}
