use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One named class of health record that can be selected into a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sessions,
    Weights,
    Fluids,
    Vitals,
    Medications,
    Moods,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 6] = [
        Category::Sessions,
        Category::Weights,
        Category::Fluids,
        Category::Vitals,
        Category::Medications,
        Category::Moods,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Sessions => write!(f, "sessions"),
            Category::Weights => write!(f, "weights"),
            Category::Fluids => write!(f, "fluids"),
            Category::Vitals => write!(f, "vitals"),
            Category::Medications => write!(f, "medications"),
            Category::Moods => write!(f, "moods"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sessions" => Ok(Category::Sessions),
            "weights" => Ok(Category::Weights),
            "fluids" => Ok(Category::Fluids),
            "vitals" => Ok(Category::Vitals),
            "medications" => Ok(Category::Medications),
            "moods" => Ok(Category::Moods),
            _ => Err(format!(
                "Invalid category '{}'. Valid options: sessions, weights, fluids, vitals, medications, moods",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", Category::Sessions), "sessions");
        assert_eq!(format!("{}", Category::Medications), "medications");
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(Category::from_str("sessions").unwrap(), Category::Sessions);
        assert_eq!(Category::from_str("VITALS").unwrap(), Category::Vitals);
        assert_eq!(Category::from_str("Moods").unwrap(), Category::Moods);
    }

    #[test]
    fn test_category_from_str_invalid() {
        assert!(Category::from_str("steps").is_err());
        assert!(Category::from_str("").is_err());
    }

    #[test]
    fn test_category_json_roundtrip() {
        let json = serde_json::to_string(&Category::Weights).unwrap();
        assert_eq!(json, "\"weights\"");

        let parsed: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Category::Weights);
    }

    #[test]
    fn test_all_contains_every_category() {
        assert_eq!(Category::ALL.len(), 6);
    }
}
