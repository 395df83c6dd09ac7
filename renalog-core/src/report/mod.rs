//! Report generation and export.
//!
//! The pipeline is three pure steps plus one I/O seam:
//! selection (range filter) -> payload assembly -> format rendering
//! (JSON or printable HTML) -> [`ExportSink`].

mod document;
mod json;
mod payload;
mod range;
mod sink;

use thiserror::Error;

pub use document::{render_document, DOCUMENT_ROW_LIMIT};
pub use json::{document_file_name, json_file_name, to_json_pretty};
pub use payload::{preview, CategoryCount, ExportPayload};
pub use range::{count_recent, select_recent, RangeToken, Timestamped};
pub use sink::{DirectorySink, ExportSink, SinkError};

/// Errors from report assembly and rendering.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The date-range token did not look like `"<N>days"` with N >= 1.
    #[error("invalid date range '{0}': expected a value like '30days'")]
    InvalidRangeToken(String),
    /// Payload serialization failed.
    #[error("failed to serialize export payload: {0}")]
    Serialize(#[from] serde_json::Error),
}
