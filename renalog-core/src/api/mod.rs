//! Backend API client.
//!
//! REST-style endpoints under a versioned path, `{ data, meta }` response
//! envelopes, Bearer authentication. The dashboard fetch fans out over
//! the endpoints with independent per-section degradation.

mod client;
mod dashboard;
mod types;

pub use client::{ApiClient, ApiError};
pub use dashboard::{fetch_dashboard, DashboardData, Section, SectionFailure};
pub use types::{
    Alert, AlertSeverity, Appointment, DashboardStats, Envelope, MealEntry, Reminder, ResponseMeta,
};
