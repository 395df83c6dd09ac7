//! HTTP client for the backend REST API.
//!
//! All endpoints live under a versioned path and return `{ data, meta }`
//! envelopes. Every request carries a bounded timeout; transport failures
//! and 5xx responses are retried once after a short backoff, other HTTP
//! statuses are not.

use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::{Alert, Appointment, DashboardStats, Envelope, MealEntry, Reminder};

/// Versioned API path segment.
const API_VERSION: &str = "v1";
/// Upper bound on any single request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Pause before the single retry.
const RETRY_BACKOFF: Duration = Duration::from_millis(300);

/// Errors from backend API calls.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid API base URL '{0}': expected http(s)://...")]
    InvalidBaseUrl(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("server returned status {0}")]
    Status(u16),
    #[error("session expired, sign in again")]
    SessionExpired,
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether a second attempt could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Timeout | ApiError::Transport(_) => true,
            ApiError::Status(code) => *code >= 500,
            _ => false,
        }
    }
}

/// Client for the patient-facing backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::InvalidBaseUrl(base_url));
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            base_url,
            api_key: api_key.into(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path under the versioned prefix.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/api/{}/{}",
            self.base_url,
            API_VERSION,
            path.trim_start_matches('/')
        )
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get("dashboard/stats").await
    }

    pub async fn alerts(&self) -> Result<Vec<Alert>, ApiError> {
        self.get("alerts").await
    }

    pub async fn reminders(&self) -> Result<Vec<Reminder>, ApiError> {
        self.get("reminders").await
    }

    pub async fn appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        self.get("appointments").await
    }

    pub async fn meals(&self) -> Result<Vec<MealEntry>, ApiError> {
        self.get("meals").await
    }

    /// GET with the retry policy applied.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        match self.get_once(path).await {
            Err(e) if e.is_retryable() => {
                tracing::debug!(path, error = %e, "retrying request");
                tokio::time::sleep(RETRY_BACKOFF).await;
                self.get_once(path).await
            }
            other => other,
        }
    }

    async fn get_once<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .http
            .get(self.endpoint_url(path))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(map_transport)?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::SessionExpired);
        }
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }
}

fn map_transport(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_non_http_urls() {
        assert!(matches!(
            ApiClient::new("ftp://backend", "key"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            ApiClient::new("backend.example.com", "key"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_endpoint_url_versioned() {
        let client = ApiClient::new("https://backend.example.com/", "key").unwrap();
        assert_eq!(
            client.endpoint_url("dashboard/stats"),
            "https://backend.example.com/api/v1/dashboard/stats"
        );
        assert_eq!(
            client.endpoint_url("/alerts"),
            "https://backend.example.com/api/v1/alerts"
        );
    }

    #[test]
    fn test_retry_classification() {
        assert!(ApiError::Timeout.is_retryable());
        assert!(ApiError::Transport("connection refused".into()).is_retryable());
        assert!(ApiError::Status(502).is_retryable());

        assert!(!ApiError::Status(404).is_retryable());
        assert!(!ApiError::SessionExpired.is_retryable());
        assert!(!ApiError::Decode("bad json".into()).is_retryable());
    }
}
