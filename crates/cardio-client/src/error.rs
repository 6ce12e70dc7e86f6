//! Error types for the submission exchange.

use cardio_model::RangeIssue;
use thiserror::Error;

/// Errors that can occur while submitting a record for prediction.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PredictError {
    /// Network-level failure before any response arrived (connection
    /// refused, timeout, DNS failure).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success HTTP status.
    #[error("prediction service returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// The response body could not be interpreted as a prediction.
    #[error("malformed prediction response: {0}")]
    MalformedResponse(String),

    /// The record carried out-of-range values and was never sent.
    #[error("record failed validation: {}", format_issues(.issues))]
    Validation {
        /// Every out-of-range field found.
        issues: Vec<RangeIssue>,
    },
}

impl PredictError {
    /// Returns a user-friendly message suitable for display in the UI.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => {
                "Could not reach the prediction service. Please check the endpoint and your connection.".to_string()
            }
            Self::Status { status, .. } => {
                format!("The prediction service reported an error (status {status}). Please try again.")
            }
            Self::MalformedResponse(_) => {
                "The prediction service sent an unexpected response.".to_string()
            }
            Self::Validation { issues } => {
                format!("Please correct the highlighted values: {}", format_issues(issues))
            }
        }
    }

    /// Returns whether resubmitting unchanged input could succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Status { .. })
    }
}

impl From<reqwest::Error> for PredictError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if message.is_empty() {
            Self::Network("network request failed".to_string())
        } else {
            Self::Network(message)
        }
    }
}

fn format_issues(issues: &[RangeIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for submission operations.
pub type Result<T> = std::result::Result<T, PredictError>;
