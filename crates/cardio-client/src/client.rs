//! HTTP client for the prediction service.
//!
//! The service is an opaque collaborator: one POST with the eleven wire
//! fields, one JSON response carrying a `prediction` label. A submission is
//! a single attempt with no retries or backoff; callers decide whether to
//! resubmit.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use cardio_model::{ClinicalInputRecord, RiskLabel};

use crate::error::{PredictError, Result};

/// Base URL the original deployment used for its collaborator.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

/// Path of the prediction operation on the collaborator.
const PREDICT_PATH: &str = "/predict";

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Response body of the prediction service.
///
/// Only the `prediction` field is contractual; anything else the service
/// includes is ignored.
#[derive(Debug, Deserialize)]
struct PredictionResponse {
    prediction: Option<String>,
}

/// Client for submitting clinical records to the prediction service.
pub struct PredictionClient {
    /// HTTP client.
    client: Client,
    /// Collaborator base URL, without the `/predict` path.
    base_url: String,
}

impl PredictionClient {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(PredictError::from)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Get the prediction endpoint URL.
    fn predict_url(&self) -> String {
        format!("{}{PREDICT_PATH}", self.base_url.trim_end_matches('/'))
    }

    /// Submit one record and decode the returned risk label.
    ///
    /// The record is serialized as a JSON object with exactly the eleven
    /// wire fields and sent with `Content-Type: application/json`. A
    /// response missing the `prediction` field, or carrying a label other
    /// than `"0"`/`"1"`, is an explicit [`PredictError::MalformedResponse`]
    /// rather than a defaulted negative result.
    pub fn predict(&self, record: &ClinicalInputRecord) -> Result<RiskLabel> {
        let url = self.predict_url();
        debug!("submitting clinical record to {url}");

        let response = self
            .client
            .post(&url)
            .json(record)
            .send()
            .map_err(PredictError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PredictError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: PredictionResponse = response
            .json()
            .map_err(|err| PredictError::MalformedResponse(err.to_string()))?;

        let label = body.prediction.ok_or_else(|| {
            PredictError::MalformedResponse("response has no `prediction` field".to_string())
        })?;

        let risk = RiskLabel::from_wire(&label).ok_or_else(|| {
            PredictError::MalformedResponse(format!("unrecognized prediction label: {label:?}"))
        })?;

        debug!("prediction service answered with label {}", risk.as_wire());
        Ok(risk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_url() {
        let client = PredictionClient::new("http://localhost:8000").unwrap();
        assert_eq!(client.predict_url(), "http://localhost:8000/predict");

        let client = PredictionClient::new("http://example.org/").unwrap();
        assert_eq!(client.predict_url(), "http://example.org/predict");
    }

    #[test]
    fn test_client_creation() {
        assert!(PredictionClient::new(DEFAULT_ENDPOINT).is_ok());
    }
}
