use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A body weight measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub weight_kg: f64,
    pub notes: Option<String>,
}

impl WeightEntry {
    pub fn new(recorded_at: DateTime<Utc>, weight_kg: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at,
            weight_kg,
            notes: None,
        }
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
    fn test_weight_entry_new() {
        let entry = WeightEntry::new("2025-06-01T07:30:00Z".parse().unwrap(), 73.4);
        assert_eq!(entry.weight_kg, 73.4);
        assert!(entry.notes.is_none());
    }

    #[test]
    fn test_weight_entry_json_roundtrip() {
        let entry = WeightEntry::new("2025-06-01T07:30:00Z".parse().unwrap(), 73.4)
            .with_notes("before breakfast");

        let json = serde_json::to_string(&entry).unwrap();
        let parsed: WeightEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }
}
