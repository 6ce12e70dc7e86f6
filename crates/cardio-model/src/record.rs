//! The eleven-field clinical input record and field-level update surface.
//!
//! Wire names and the integer/float encoding match exactly what the
//! prediction service expects in its JSON request body; the serde renames
//! here are the single source of truth for that contract.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::enums::{ChestPainType, RestingEcg, Sex, StSlope, YesNo};
use crate::error::{ModelError, Result};

/// One patient's measurements submitted for prediction.
///
/// Every field always holds a value: a record is default-constructed from
/// the baseline and only ever mutated field-by-field. Numeric fields accept
/// out-of-range values at edit time (mirroring widget-level leniency);
/// ranges are enforced by [`crate::validate::validate_record`] at the
/// submit boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalInputRecord {
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Sex")]
    pub sex: Sex,
    #[serde(rename = "ChestPainType")]
    pub chest_pain_type: ChestPainType,
    #[serde(rename = "RestingBP")]
    pub resting_bp: u32,
    #[serde(rename = "Cholesterol")]
    pub cholesterol: u32,
    #[serde(rename = "FastingBS")]
    pub fasting_bs: YesNo,
    #[serde(rename = "RestingECG")]
    pub resting_ecg: RestingEcg,
    #[serde(rename = "MaxHR")]
    pub max_hr: u32,
    #[serde(rename = "ExerciseAngina")]
    pub exercise_angina: YesNo,
    #[serde(rename = "Oldpeak")]
    pub oldpeak: f64,
    #[serde(rename = "ST_Slope")]
    pub st_slope: StSlope,
}

impl ClinicalInputRecord {
    /// The sane baseline a fresh session starts from.
    pub fn baseline() -> Self {
        Self {
            age: 50,
            sex: Sex::Female,
            chest_pain_type: ChestPainType::TypicalAngina,
            resting_bp: 120,
            cholesterol: 200,
            fasting_bs: YesNo::No,
            resting_ecg: RestingEcg::Normal,
            max_hr: 150,
            exercise_angina: YesNo::No,
            oldpeak: 0.0,
            st_slope: StSlope::Up,
        }
    }

    /// Update one field from a raw input value.
    ///
    /// Integer fields parse as base-10 integers and the `Oldpeak` field as
    /// floating point. Categorical fields accept either an integer wire
    /// code or a label (see the enum `FromStr` impls). All other fields are
    /// left untouched regardless of the result.
    pub fn set_field(&mut self, field: Field, raw: &str) -> Result<()> {
        match field {
            Field::Age => self.age = parse_int(field, raw)?,
            Field::Sex => self.sex = parse_coded(field, raw)?,
            Field::ChestPainType => self.chest_pain_type = parse_coded(field, raw)?,
            Field::RestingBp => self.resting_bp = parse_int(field, raw)?,
            Field::Cholesterol => self.cholesterol = parse_int(field, raw)?,
            Field::FastingBs => self.fasting_bs = parse_coded(field, raw)?,
            Field::RestingEcg => self.resting_ecg = parse_coded(field, raw)?,
            Field::MaxHr => self.max_hr = parse_int(field, raw)?,
            Field::ExerciseAngina => self.exercise_angina = parse_coded(field, raw)?,
            Field::Oldpeak => self.oldpeak = parse_float(field, raw)?,
            Field::StSlope => self.st_slope = parse_coded(field, raw)?,
        }
        Ok(())
    }
}

impl Default for ClinicalInputRecord {
    fn default() -> Self {
        Self::baseline()
    }
}

fn parse_int(field: Field, raw: &str) -> Result<u32> {
    raw.trim().parse().map_err(|_| ModelError::InvalidValue {
        field: field.wire_name(),
        value: raw.to_string(),
    })
}

fn parse_float(field: Field, raw: &str) -> Result<f64> {
    raw.trim().parse().map_err(|_| ModelError::InvalidValue {
        field: field.wire_name(),
        value: raw.to_string(),
    })
}

fn parse_coded<T>(field: Field, raw: &str) -> Result<T>
where
    T: FromStr<Err = String>,
{
    raw.parse().map_err(|_| ModelError::InvalidValue {
        field: field.wire_name(),
        value: raw.to_string(),
    })
}

/// Names the eleven fields of [`ClinicalInputRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Age,
    Sex,
    ChestPainType,
    RestingBp,
    Cholesterol,
    FastingBs,
    RestingEcg,
    MaxHr,
    ExerciseAngina,
    Oldpeak,
    StSlope,
}

impl Field {
    /// All eleven fields in wire order.
    pub const ALL: [Field; 11] = [
        Field::Age,
        Field::Sex,
        Field::ChestPainType,
        Field::RestingBp,
        Field::Cholesterol,
        Field::FastingBs,
        Field::RestingEcg,
        Field::MaxHr,
        Field::ExerciseAngina,
        Field::Oldpeak,
        Field::StSlope,
    ];

    /// The JSON key used on the wire.
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::Sex => "Sex",
            Field::ChestPainType => "ChestPainType",
            Field::RestingBp => "RestingBP",
            Field::Cholesterol => "Cholesterol",
            Field::FastingBs => "FastingBS",
            Field::RestingEcg => "RestingECG",
            Field::MaxHr => "MaxHR",
            Field::ExerciseAngina => "ExerciseAngina",
            Field::Oldpeak => "Oldpeak",
            Field::StSlope => "ST_Slope",
        }
    }

    /// Option list `(wire code, label)` for categorical fields, `None` for
    /// numeric measurements. This is what presentation layers render as
    /// choice widgets.
    pub fn options(self) -> Option<Vec<(u8, &'static str)>> {
        fn collect<T: Copy + Into<u8>>(variants: &[T], label: fn(T) -> &'static str) -> Vec<(u8, &'static str)> {
            variants.iter().map(|v| ((*v).into(), label(*v))).collect()
        }
        match self {
            Field::Sex => Some(collect(Sex::variants(), Sex::label)),
            Field::ChestPainType => Some(collect(ChestPainType::variants(), ChestPainType::label)),
            Field::FastingBs | Field::ExerciseAngina => {
                Some(collect(YesNo::variants(), YesNo::label))
            }
            Field::RestingEcg => Some(collect(RestingEcg::variants(), RestingEcg::label)),
            Field::StSlope => Some(collect(StSlope::variants(), StSlope::label)),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

impl FromStr for Field {
    type Err = ModelError;

    /// Parse a wire name into a `Field` (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        Field::ALL
            .into_iter()
            .find(|field| field.wire_name().to_lowercase() == normalized)
            .ok_or_else(|| ModelError::UnknownField(s.to_string()))
    }
}
