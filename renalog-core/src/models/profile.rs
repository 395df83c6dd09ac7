use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Renal replacement therapy modality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modality {
    Hemodialysis,
    PeritonealDialysis,
    PreDialysis,
    Transplant,
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modality::Hemodialysis => write!(f, "hemodialysis"),
            Modality::PeritonealDialysis => write!(f, "peritoneal dialysis"),
            Modality::PreDialysis => write!(f, "pre-dialysis"),
            Modality::Transplant => write!(f, "transplant"),
        }
    }
}

impl FromStr for Modality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(' ', "-").as_str() {
            "hemodialysis" | "hd" => Ok(Modality::Hemodialysis),
            "peritoneal-dialysis" | "pd" => Ok(Modality::PeritonealDialysis),
            "pre-dialysis" | "predialysis" => Ok(Modality::PreDialysis),
            "transplant" => Ok(Modality::Transplant),
            _ => Err(format!(
                "Invalid modality '{}'. Valid options: hemodialysis, peritoneal-dialysis, pre-dialysis, transplant",
                s
            )),
        }
    }
}

/// Patient profile snapshot carried into reports and exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub name: String,
    pub modality: Modality,
    /// Target dry weight in kilograms.
    pub dry_weight_goal_kg: f64,
    /// Daily fluid intake limit in milliliters.
    pub daily_fluid_limit_ml: u32,
}

impl PatientProfile {
    pub fn new(name: impl Into<String>, modality: Modality) -> Self {
        Self {
            name: name.into(),
            modality,
            dry_weight_goal_kg: 0.0,
            daily_fluid_limit_ml: 0,
        }
    }

    pub fn with_dry_weight_goal(mut self, kg: f64) -> Self {
        self.dry_weight_goal_kg = kg;
        self
    }

    pub fn with_daily_fluid_limit(mut self, ml: u32) -> Self {
        self.daily_fluid_limit_ml = ml;
        self
    }
}

impl Default for PatientProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            modality: Modality::PreDialysis,
            dry_weight_goal_kg: 0.0,
            daily_fluid_limit_ml: 0,
        }
    }
}

impl fmt::Display for PatientProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.name, self.modality)?;
        if self.dry_weight_goal_kg > 0.0 {
            writeln!(f, "Dry weight goal: {:.1} kg", self.dry_weight_goal_kg)?;
        }
        if self.daily_fluid_limit_ml > 0 {
            writeln!(f, "Daily fluid limit: {} ml", self.daily_fluid_limit_ml)?;
        }
        Ok(())
    }
}
