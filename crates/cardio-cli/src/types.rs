use cardio_model::PredictionOutcome;

/// Result of one `predict` invocation, ready for rendering.
#[derive(Debug)]
pub struct PredictReport {
    pub endpoint: String,
    pub request_body: String,
    pub outcome: PredictionOutcome,
    pub dry_run: bool,
}
