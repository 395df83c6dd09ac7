use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A mood check-in on a 1 (worst) to 5 (best) scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub score: u8,
    pub notes: Option<String>,
}

impl MoodEntry {
    /// Creates a mood entry. Scores outside 1..=5 are clamped.
    pub fn new(recorded_at: DateTime<Utc>, score: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at,
            score: score.clamp(1, 5),
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
    fn test_mood_entry_new() {
        let entry = MoodEntry::new("2025-06-01T20:00:00Z".parse().unwrap(), 4);
        assert_eq!(entry.score, 4);
    }

    #[test]
    fn test_mood_entry_clamps_score() {
        let low = MoodEntry::new("2025-06-01T20:00:00Z".parse().unwrap(), 0);
        let high = MoodEntry::new("2025-06-01T20:00:00Z".parse().unwrap(), 9);
        assert_eq!(low.score, 1);
        assert_eq!(high.score, 5);
    }
}
