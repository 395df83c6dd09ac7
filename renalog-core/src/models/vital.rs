use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VitalType {
    BloodPressure,
    HeartRate,
    Temperature,
    OxygenSaturation,
}

impl fmt::Display for VitalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VitalType::BloodPressure => write!(f, "blood pressure"),
            VitalType::HeartRate => write!(f, "heart rate"),
            VitalType::Temperature => write!(f, "temperature"),
            VitalType::OxygenSaturation => write!(f, "oxygen saturation"),
        }
    }
}

impl FromStr for VitalType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(' ', "-").as_str() {
            "blood-pressure" | "bp" => Ok(VitalType::BloodPressure),
            "heart-rate" | "pulse" => Ok(VitalType::HeartRate),
            "temperature" | "temp" => Ok(VitalType::Temperature),
            "oxygen-saturation" | "spo2" => Ok(VitalType::OxygenSaturation),
            _ => Err(format!(
                "Invalid vital type '{}'. Valid options: blood-pressure, heart-rate, temperature, oxygen-saturation",
                s
            )),
        }
    }
}

/// A vital sign observation.
///
/// The reading is kept as the string the patient entered ("120/80",
/// "36.8", "98%") since display formats differ per vital type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalEntry {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub vital_type: VitalType,
    pub reading: String,
    pub notes: Option<String>,
}

impl VitalEntry {
    pub fn new(
        recorded_at: DateTime<Utc>,
        vital_type: VitalType,
        reading: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at,
            vital_type,
            reading: reading.into(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
