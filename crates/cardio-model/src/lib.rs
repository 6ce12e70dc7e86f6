pub mod enums;
pub mod error;
pub mod outcome;
pub mod record;
pub mod validate;

pub use enums::{ChestPainType, RestingEcg, Sex, StSlope, YesNo};
pub use error::{ModelError, Result};
pub use outcome::{PredictionOutcome, RiskLabel};
pub use record::{ClinicalInputRecord, Field};
pub use validate::{RangeIssue, range_for, validate_record};
