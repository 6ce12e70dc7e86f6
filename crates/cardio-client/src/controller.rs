//! Form-session controller: one record, one outcome, one client.

use tracing::{debug, warn};

use cardio_model::{
    ClinicalInputRecord, Field, PredictionOutcome, validate_record,
};

use crate::client::PredictionClient;
use crate::error::PredictError;

/// Owns the state of one form session.
///
/// The controller holds the mutable [`ClinicalInputRecord`], applies
/// field-by-field updates, and runs the submit cycle. Every failure is
/// converted into [`PredictionOutcome::Failed`] at this boundary; nothing
/// propagates further and nothing is fatal to the session.
///
/// `submit` blocks on the network call, so a session cannot re-enter it
/// while a request is in flight; the `Pending` state exists so frontends
/// can still render the in-flight phase.
pub struct PredictionFormController {
    record: ClinicalInputRecord,
    outcome: PredictionOutcome,
    client: PredictionClient,
}

impl PredictionFormController {
    /// Start a session from the baseline record.
    pub fn new(client: PredictionClient) -> Self {
        Self::with_record(client, ClinicalInputRecord::baseline())
    }

    /// Start a session from an already-populated record.
    pub fn with_record(client: PredictionClient, record: ClinicalInputRecord) -> Self {
        Self {
            record,
            outcome: PredictionOutcome::Idle,
            client,
        }
    }

    /// The current record.
    pub fn record(&self) -> &ClinicalInputRecord {
        &self.record
    }

    /// The outcome of the most recent submission cycle.
    pub fn outcome(&self) -> &PredictionOutcome {
        &self.outcome
    }

    /// Apply one field edit from a raw input value.
    ///
    /// Edits are independent of any completed submission; a rejected edit
    /// leaves the record untouched.
    pub fn update_field(&mut self, field: Field, raw: &str) -> cardio_model::Result<()> {
        self.record.set_field(field, raw)
    }

    /// Run one submission cycle and return the resulting outcome.
    ///
    /// The record is validated first: out-of-range values fail the cycle
    /// without constructing a request. Otherwise the record as it stands at
    /// this moment is serialized and sent exactly once.
    pub fn submit(&mut self) -> &PredictionOutcome {
        self.outcome = PredictionOutcome::Pending;

        let issues = validate_record(&self.record);
        if !issues.is_empty() {
            let err = PredictError::Validation { issues };
            warn!("submission rejected: {err}");
            self.outcome = PredictionOutcome::Failed {
                message: err.to_string(),
            };
            return &self.outcome;
        }

        // Snapshot so the in-flight body cannot observe later edits.
        let submitted = self.record.clone();

        self.outcome = match self.client.predict(&submitted) {
            Ok(label) => {
                debug!("submission resolved: {label}");
                PredictionOutcome::Resolved(label)
            }
            Err(err) => {
                warn!("submission failed: {err}");
                PredictionOutcome::Failed {
                    message: err.to_string(),
                }
            }
        };
        &self.outcome
    }
}
