//! Submission outcome state.

use std::fmt;

/// Binary risk label returned by the prediction service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLabel {
    /// Wire label `"0"`: no heart-disease risk detected.
    Negative,
    /// Wire label `"1"`: heart-disease risk detected.
    Positive,
}

impl RiskLabel {
    /// The string label as transmitted by the service.
    pub fn as_wire(self) -> &'static str {
        match self {
            RiskLabel::Negative => "0",
            RiskLabel::Positive => "1",
        }
    }

    /// Decode the service's string label. Anything other than `"0"` or
    /// `"1"` is not a label.
    pub fn from_wire(label: &str) -> Option<Self> {
        match label.trim() {
            "0" => Some(RiskLabel::Negative),
            "1" => Some(RiskLabel::Positive),
            _ => None,
        }
    }

    pub fn is_positive(self) -> bool {
        matches!(self, RiskLabel::Positive)
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RiskLabel::Negative => "no heart-disease risk detected",
            RiskLabel::Positive => "heart-disease risk detected",
        };
        write!(f, "{text}")
    }
}

/// Result of one submission cycle.
///
/// Transitions: `Idle -> Pending` on submit, `Pending -> Resolved` on a
/// parsed success response, `Pending -> Failed` on any error. A new submit
/// restarts the cycle from whatever state the previous one left.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    /// No submission has run yet.
    Idle,
    /// A request is in flight.
    Pending,
    /// The service answered with a parseable label.
    Resolved(RiskLabel),
    /// The submission failed; the message is safe to surface to the user.
    Failed { message: String },
}

impl PredictionOutcome {
    pub fn is_idle(&self) -> bool {
        matches!(self, PredictionOutcome::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, PredictionOutcome::Pending)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, PredictionOutcome::Resolved(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PredictionOutcome::Failed { .. })
    }

    /// The resolved label, if any.
    pub fn label(&self) -> Option<RiskLabel> {
        match self {
            PredictionOutcome::Resolved(label) => Some(*label),
            _ => None,
        }
    }
}

impl fmt::Display for PredictionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictionOutcome::Idle => write!(f, "idle"),
            PredictionOutcome::Pending => write!(f, "pending"),
            PredictionOutcome::Resolved(label) => write!(f, "{label}"),
            PredictionOutcome::Failed { message } => write!(f, "failed: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_wire_round_trip() {
        assert_eq!(RiskLabel::from_wire("1"), Some(RiskLabel::Positive));
        assert_eq!(RiskLabel::from_wire(" 0 "), Some(RiskLabel::Negative));
        assert_eq!(RiskLabel::from_wire(""), None);
        assert_eq!(RiskLabel::from_wire("yes"), None);
        assert_eq!(RiskLabel::Positive.as_wire(), "1");
    }

    #[test]
    fn test_outcome_accessors() {
        assert!(PredictionOutcome::Idle.is_idle());
        assert!(PredictionOutcome::Pending.is_pending());
        let resolved = PredictionOutcome::Resolved(RiskLabel::Negative);
        assert_eq!(resolved.label(), Some(RiskLabel::Negative));
        let failed = PredictionOutcome::Failed {
            message: "status 500".to_string(),
        };
        assert!(failed.is_failed());
        assert_eq!(failed.label(), None);
    }
}
