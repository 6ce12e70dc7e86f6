//! Range validation for the numeric measurements.
//!
//! Edits accept whatever parses; the submit boundary runs these checks and
//! refuses to forward a record carrying out-of-range values. Issues are
//! collected rather than aborting on the first, so a summary can report all
//! of them at once.

use std::fmt;
use std::ops::RangeInclusive;

use crate::record::{ClinicalInputRecord, Field};

const AGE_RANGE: RangeInclusive<f64> = 1.0..=120.0;
const RESTING_BP_RANGE: RangeInclusive<f64> = 80.0..=200.0;
const CHOLESTEROL_RANGE: RangeInclusive<f64> = 100.0..=600.0;
const MAX_HR_RANGE: RangeInclusive<f64> = 60.0..=220.0;
const OLDPEAK_RANGE: RangeInclusive<f64> = 0.0..=10.0;

/// One out-of-range value found in a record.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeIssue {
    pub field: Field,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for RangeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is {} but must be between {} and {}",
            self.field, self.value, self.min, self.max
        )
    }
}

/// The accepted range for a numeric field, `None` for categorical fields.
pub fn range_for(field: Field) -> Option<RangeInclusive<f64>> {
    match field {
        Field::Age => Some(AGE_RANGE),
        Field::RestingBp => Some(RESTING_BP_RANGE),
        Field::Cholesterol => Some(CHOLESTEROL_RANGE),
        Field::MaxHr => Some(MAX_HR_RANGE),
        Field::Oldpeak => Some(OLDPEAK_RANGE),
        _ => None,
    }
}

/// Check every numeric measurement against its clinical range.
///
/// Categorical fields cannot hold an invalid value by construction and are
/// not checked.
pub fn validate_record(record: &ClinicalInputRecord) -> Vec<RangeIssue> {
    let mut issues = Vec::new();
    for field in Field::ALL {
        let Some(range) = range_for(field) else {
            continue;
        };
        let value = match field {
            Field::Age => f64::from(record.age),
            Field::RestingBp => f64::from(record.resting_bp),
            Field::Cholesterol => f64::from(record.cholesterol),
            Field::MaxHr => f64::from(record.max_hr),
            Field::Oldpeak => record.oldpeak,
            _ => continue,
        };
        if !range.contains(&value) {
            issues.push(RangeIssue {
                field,
                value,
                min: *range.start(),
                max: *range.end(),
            });
        }
    }
    issues
}
