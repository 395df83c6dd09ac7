use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::category::Category;
use crate::report::RangeToken;

/// A saved report definition: which categories to include and how far back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub id: Uuid,
    pub name: String,
    pub categories: Vec<Category>,
    pub date_range: RangeToken,
    pub created_at: DateTime<Utc>,
}

impl ReportConfig {
    pub fn new(name: impl Into<String>, categories: Vec<Category>, date_range: RangeToken) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            categories,
            date_range,
            created_at: Utc::now(),
        }
    }

    pub fn includes(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}

impl fmt::Display for ReportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let categories = self
            .categories
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{} [{}] over {}", self.name, categories, self.date_range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_config_new() {
        let report = ReportConfig::new(
            "Monthly summary",
            vec![Category::Sessions, Category::Vitals],
            "30days".parse().unwrap(),
        );

        assert_eq!(report.name, "Monthly summary");
        assert!(report.includes(Category::Sessions));
        assert!(report.includes(Category::Vitals));
        assert!(!report.includes(Category::Moods));
    }

    #[test]
    fn test_report_config_display() {
        let report = ReportConfig::new(
            "Clinic visit",
            vec![Category::Weights],
            "7days".parse().unwrap(),
        );

        let output = format!("{}", report);
        assert!(output.contains("Clinic visit"));
        assert!(output.contains("weights"));
        assert!(output.contains("7days"));
    }

    #[test]
    fn test_report_config_json_roundtrip() {
        let report = ReportConfig::new(
            "Everything",
            Category::ALL.to_vec(),
            "90days".parse().unwrap(),
        );

        let json = serde_json::to_string(&report).unwrap();
        let parsed: ReportConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
