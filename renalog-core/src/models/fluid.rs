use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A fluid intake entry, counted against the daily limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluidEntry {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub amount_ml: u32,
    /// What was drunk (water, coffee, soup, ...).
    pub source: String,
    pub notes: Option<String>,
}

impl FluidEntry {
    pub fn new(recorded_at: DateTime<Utc>, amount_ml: u32, source: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at,
            amount_ml,
            source: source.into(),
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
    fn test_fluid_entry_new() {
        let entry = FluidEntry::new("2025-06-01T12:00:00Z".parse().unwrap(), 250, "water");
        assert_eq!(entry.amount_ml, 250);
        assert_eq!(entry.source, "water");
    }

    #[test]
    fn test_fluid_entry_json_roundtrip() {
        let entry = FluidEntry::new("2025-06-01T12:00:00Z".parse().unwrap(), 150, "coffee")
            .with_notes("small cup");

        let json = serde_json::to_string(&entry).unwrap();
        let parsed: FluidEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }
}
