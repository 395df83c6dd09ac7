use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::fluid::FluidEntry;
use super::medication::MedicationEntry;
use super::mood::MoodEntry;
use super::profile::PatientProfile;
use super::session::DialysisSession;
use super::vital::VitalEntry;
use super::weight::WeightEntry;

/// The client-side snapshot of everything the backend knows about a
/// patient: the profile plus one collection per record category.
///
/// The report pipeline reads this snapshot and never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthRecords {
    pub profile: PatientProfile,
    pub sessions: Vec<DialysisSession>,
    pub weights: Vec<WeightEntry>,
    pub fluids: Vec<FluidEntry>,
    pub vitals: Vec<VitalEntry>,
    pub medications: Vec<MedicationEntry>,
    pub moods: Vec<MoodEntry>,
}

impl HealthRecords {
    pub fn new(profile: PatientProfile) -> Self {
        Self {
            profile,
            ..Default::default()
        }
    }

    /// Number of records in one category.
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Sessions => self.sessions.len(),
            Category::Weights => self.weights.len(),
            Category::Fluids => self.fluids.len(),
            Category::Vitals => self.vitals.len(),
            Category::Medications => self.medications.len(),
            Category::Moods => self.moods.len(),
        }
    }

    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.count(*c)).sum()
    }

    /// Total fluid intake logged on a calendar day (UTC).
    pub fn total_fluid_on(&self, date: NaiveDate) -> u32 {
        self.fluids
            .iter()
            .filter(|f| f.recorded_at.date_naive() == date)
            .map(|f| f.amount_ml)
            .sum()
    }

    /// Most recent weight measurement, if any.
    pub fn latest_weight(&self) -> Option<&WeightEntry> {
        self.weights.iter().max_by_key(|w| w.recorded_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Modality;
    use chrono::{DateTime, Utc};

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn sample() -> HealthRecords {
        let mut records =
            HealthRecords::new(PatientProfile::new("Alex", Modality::Hemodialysis));
        records.weights.push(WeightEntry::new(at("2025-06-01T07:00:00Z"), 74.0));
        records.weights.push(WeightEntry::new(at("2025-06-03T07:00:00Z"), 73.2));
        records.fluids.push(FluidEntry::new(at("2025-06-03T09:00:00Z"), 250, "water"));
        records.fluids.push(FluidEntry::new(at("2025-06-03T13:00:00Z"), 150, "coffee"));
        records.fluids.push(FluidEntry::new(at("2025-06-02T13:00:00Z"), 500, "water"));
        records
    }

    #[test]
    fn test_count_per_category() {
        let records = sample();
        assert_eq!(records.count(Category::Weights), 2);
        assert_eq!(records.count(Category::Fluids), 3);
        assert_eq!(records.count(Category::Sessions), 0);
        assert_eq!(records.total(), 5);
    }

    #[test]
    fn test_total_fluid_on_day() {
        let records = sample();
        let day = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
        assert_eq!(records.total_fluid_on(day), 400);

        let other = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert_eq!(records.total_fluid_on(other), 500);
    }

    #[test]
    fn test_latest_weight() {
        let records = sample();
        let latest = records.latest_weight().unwrap();
        assert_eq!(latest.weight_kg, 73.2);
    }

    #[test]
    fn test_empty_snapshot_deserializes() {
        let records: HealthRecords = serde_json::from_str("{}").unwrap();
        assert_eq!(records.total(), 0);
    }
}
