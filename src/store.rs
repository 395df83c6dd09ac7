//! Local JSON snapshot store.
//!
//! The CLI keeps the patient's record snapshot and saved report configs as
//! JSON files under the data directory. Missing files load as empty
//! defaults so a fresh install works without setup.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use renalog_core::models::{HealthRecords, ReportConfig};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

const RECORDS_FILE: &str = "records.json";
const REPORTS_FILE: &str = "reports.json";

/// File-backed store for the record snapshot and saved reports.
#[derive(Debug, Clone)]
pub struct HealthStore {
    data_dir: PathBuf,
}

impl HealthStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn load_records(&self) -> Result<HealthRecords, StoreError> {
        self.read_json(RECORDS_FILE)
    }

    pub fn save_records(&self, records: &HealthRecords) -> Result<(), StoreError> {
        self.write_json(RECORDS_FILE, records)
    }

    pub fn load_reports(&self) -> Result<Vec<ReportConfig>, StoreError> {
        self.read_json(REPORTS_FILE)
    }

    pub fn save_reports(&self, reports: &[ReportConfig]) -> Result<(), StoreError> {
        self.write_json(REPORTS_FILE, &reports)
    }

    /// Appends a report config to the saved list.
    pub fn add_report(&self, report: ReportConfig) -> Result<(), StoreError> {
        let mut reports = self.load_reports()?;
        reports.push(report);
        self.save_reports(&reports)
    }

    /// Looks a report up by id or (case-insensitive) name.
    pub fn find_report(&self, needle: &str) -> Result<Option<ReportConfig>, StoreError> {
        let reports = self.load_reports()?;
        if let Ok(id) = Uuid::parse_str(needle) {
            if let Some(report) = reports.iter().find(|r| r.id == id) {
                return Ok(Some(report.clone()));
            }
        }
        Ok(reports
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(needle))
            .cloned())
    }

    /// Validates and installs an externally produced snapshot file.
    pub fn import_records(&self, path: &Path) -> Result<HealthRecords, StoreError> {
        let contents =
            fs::read_to_string(path).map_err(|e| StoreError::Io(path.to_path_buf(), e))?;
        let records: HealthRecords = serde_json::from_str(&contents)
            .map_err(|e| StoreError::Parse(path.to_path_buf(), e))?;
        self.save_records(&records)?;
        Ok(records)
    }

    /// Loads a JSON file, or the type's default when it doesn't exist.
    fn read_json<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T, StoreError> {
        let path = self.data_dir.join(name);
        match fs::read_to_string(&path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|e| StoreError::Parse(path, e))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(T::default()),
            Err(e) => Err(StoreError::Io(path, e)),
        }
    }

    /// Saves a value as JSON, creating the data directory if needed.
    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir)
            .map_err(|e| StoreError::Io(self.data_dir.clone(), e))?;

        let path = self.data_dir.join(name);
        let contents =
            serde_json::to_string_pretty(value).map_err(|e| StoreError::Parse(path.clone(), e))?;
        fs::write(&path, contents).map_err(|e| StoreError::Io(path, e))
    }
}

/// Errors from the local snapshot store.
#[derive(Debug)]
pub enum StoreError {
    Io(PathBuf, io::Error),
    Parse(PathBuf, serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(path, e) => {
                write!(f, "Failed to access '{}': {}", path.display(), e)
            }
            StoreError::Parse(path, e) => {
                write!(f, "Failed to parse '{}': {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for StoreError {}
