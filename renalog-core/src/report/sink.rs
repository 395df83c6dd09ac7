//! Export sinks: the only host-environment I/O in the report pipeline.
//!
//! Rendering is pure; handing the result to the outside world (a download
//! directory, a document viewer) goes through [`ExportSink`] so commands
//! and tests can inject their own target.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from writing an export to its target.
#[derive(Error, Debug)]
pub enum SinkError {
    /// The export target cannot be opened at all. Recoverable by picking a
    /// different target; callers should surface a retry affordance instead
    /// of dropping the export.
    #[error("export target '{0}' is unavailable: {1}")]
    Unavailable(PathBuf, String),
    /// The target opened but the write failed.
    #[error("failed to write export '{0}': {1}")]
    Io(PathBuf, #[source] io::Error),
}

/// Destination for rendered exports.
pub trait ExportSink {
    /// Persists a JSON export, returning where it landed.
    fn save_json(&self, file_name: &str, contents: &str) -> Result<PathBuf, SinkError>;

    /// Opens a rendered document for viewing/printing, returning its
    /// location.
    fn open_document(&self, file_name: &str, html: &str) -> Result<PathBuf, SinkError>;
}

/// Sink that writes exports into a directory, creating it on demand.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf, SinkError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| SinkError::Unavailable(self.dir.clone(), e.to_string()))?;

        let path = self.dir.join(file_name);
        fs::write(&path, contents).map_err(|e| SinkError::Io(path.clone(), e))?;
        Ok(path)
    }
}

impl ExportSink for DirectorySink {
    fn save_json(&self, file_name: &str, contents: &str) -> Result<PathBuf, SinkError> {
        self.write(file_name, contents)
    }

    fn open_document(&self, file_name: &str, html: &str) -> Result<PathBuf, SinkError> {
        self.write(file_name, html)
    }
}
