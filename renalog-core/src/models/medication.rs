use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A medication dose, either taken or skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationEntry {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub name: String,
    /// Free-form dosage ("800 mg", "1 tablet").
    pub dosage: String,
    pub taken: bool,
    pub notes: Option<String>,
}

impl MedicationEntry {
    pub fn new(
        recorded_at: DateTime<Utc>,
        name: impl Into<String>,
        dosage: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at,
            name: name.into(),
            dosage: dosage.into(),
            taken: true,
            notes: None,
        }
    }

    pub fn skipped(mut self) -> Self {
        self.taken = false;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medication_entry_new() {
        let entry = MedicationEntry::new(
            "2025-06-01T09:00:00Z".parse().unwrap(),
            "Sevelamer",
            "800 mg",
        );
        assert_eq!(entry.name, "Sevelamer");
        assert!(entry.taken);
    }

    #[test]
    fn test_medication_entry_skipped() {
        let entry = MedicationEntry::new(
            "2025-06-01T09:00:00Z".parse().unwrap(),
            "Calcitriol",
            "0.25 mcg",
        )
        .skipped()
        .with_notes("out of stock");

        assert!(!entry.taken);
        assert_eq!(entry.notes.as_deref(), Some("out of stock"));
    }

    #[test]
    fn test_medication_entry_json_roundtrip() {
        let entry = MedicationEntry::new(
            "2025-06-01T09:00:00Z".parse().unwrap(),
            "Epoetin",
            "4000 IU",
        );

        let json = serde_json::to_string(&entry).unwrap();
        let parsed: MedicationEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }
}
