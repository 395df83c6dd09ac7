use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Where a dialysis session took place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionType {
    InCenter,
    Home,
    Nocturnal,
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionType::InCenter => write!(f, "in-center"),
            SessionType::Home => write!(f, "home"),
            SessionType::Nocturnal => write!(f, "nocturnal"),
        }
    }
}

impl FromStr for SessionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in-center" | "incenter" | "center" => Ok(SessionType::InCenter),
            "home" => Ok(SessionType::Home),
            "nocturnal" => Ok(SessionType::Nocturnal),
            _ => Err(format!(
                "Invalid session type '{}'. Valid options: in-center, home, nocturnal",
                s
            )),
        }
    }
}

/// A single completed dialysis session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialysisSession {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub session_type: SessionType,
    pub duration_minutes: u32,
    /// Ultrafiltration volume removed during the session, in milliliters.
    pub fluid_removed_ml: Option<u32>,
    pub pre_weight_kg: Option<f64>,
    pub post_weight_kg: Option<f64>,
    pub notes: Option<String>,
}

impl DialysisSession {
    pub fn new(
        recorded_at: DateTime<Utc>,
        session_type: SessionType,
        duration_minutes: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at,
            session_type,
            duration_minutes,
            fluid_removed_ml: None,
            pre_weight_kg: None,
            post_weight_kg: None,
            notes: None,
        }
    }

    pub fn with_fluid_removed(mut self, ml: u32) -> Self {
        self.fluid_removed_ml = Some(ml);
        self
    }

    pub fn with_weights(mut self, pre_kg: f64, post_kg: f64) -> Self {
        self.pre_weight_kg = Some(pre_kg);
        self.post_weight_kg = Some(post_kg);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Weight lost over the session, when both measurements are present.
    pub fn weight_change_kg(&self) -> Option<f64> {
        match (self.pre_weight_kg, self.post_weight_kg) {
            (Some(pre), Some(post)) => Some(pre - post),
            _ => None,
        }
    }
}
