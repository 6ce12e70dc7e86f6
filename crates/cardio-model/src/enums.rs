//! Type-safe enumerations for categorical clinical fields.
//!
//! The prediction service speaks a compact integer encoding (`0`, `1`, ...)
//! for every categorical field. These enums carry the enumerated meaning in
//! the implementation and convert to the integer wire code only at the
//! serialization boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Patient sex as encoded by the prediction service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Sex {
    /// Wire code 0.
    Female,
    /// Wire code 1.
    Male,
}

/// Chest pain classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ChestPainType {
    /// Wire code 0.
    TypicalAngina,
    /// Wire code 1.
    AtypicalAngina,
    /// Wire code 2.
    NonAnginalPain,
    /// Wire code 3.
    Asymptomatic,
}

/// Resting electrocardiogram result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum RestingEcg {
    /// Wire code 0.
    Normal,
    /// Wire code 1: ST-T wave abnormality.
    SttAbnormality,
    /// Wire code 2: left ventricular hypertrophy.
    LvHypertrophy,
}

/// Slope of the peak exercise ST segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum StSlope {
    /// Wire code 0.
    Up,
    /// Wire code 1.
    Flat,
    /// Wire code 2.
    Down,
}

/// Binary yes/no flag (fasting blood sugar, exercise-induced angina).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum YesNo {
    /// Wire code 0.
    No,
    /// Wire code 1.
    Yes,
}

/// Implements the shared coded-enum surface: `code`, `from_code`, `label`,
/// `variants`, `Display`, `FromStr` (accepting either a label or a wire
/// code), and the `u8` conversions backing the serde integer wire form.
macro_rules! coded_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $code:literal, $label:literal;)+ }) => {
        impl $name {
            /// All variants in wire-code order.
            pub fn variants() -> &'static [$name] {
                &[$($name::$variant),+]
            }

            /// Integer wire code transmitted to the prediction service.
            pub fn code(self) -> u8 {
                match self {
                    $($name::$variant => $code),+
                }
            }

            /// Human-readable label for option lists and summaries.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Decode an integer wire code.
            pub fn from_code(code: u8) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.label())
            }
        }

        impl FromStr for $name {
            type Err = String;

            /// Parse either a label (case-insensitive, `-`/`_` treated as
            /// spaces) or an integer wire code.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if let Ok(code) = s.trim().parse::<u8>() {
                    return Self::from_code(code)
                        .ok_or_else(|| format!("unknown {} code: {code}", $kind));
                }
                let normalized = normalize_label(s);
                Self::variants()
                    .iter()
                    .find(|v| normalize_label(v.label()) == normalized)
                    .copied()
                    .ok_or_else(|| format!("unknown {}: {s}", $kind))
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value.code()
            }
        }

        impl TryFrom<u8> for $name {
            type Error = String;

            fn try_from(code: u8) -> Result<Self, Self::Error> {
                Self::from_code(code).ok_or_else(|| format!("unknown {} code: {code}", $kind))
            }
        }
    };
}

coded_enum!(Sex, "sex", {
    Female => 0, "female";
    Male => 1, "male";
});

coded_enum!(ChestPainType, "chest pain type", {
    TypicalAngina => 0, "typical angina";
    AtypicalAngina => 1, "atypical angina";
    NonAnginalPain => 2, "non-anginal pain";
    Asymptomatic => 3, "asymptomatic";
});

coded_enum!(RestingEcg, "resting ECG result", {
    Normal => 0, "normal";
    SttAbnormality => 1, "ST-T wave abnormality";
    LvHypertrophy => 2, "left ventricular hypertrophy";
});

coded_enum!(StSlope, "ST slope", {
    Up => 0, "up";
    Flat => 1, "flat";
    Down => 2, "down";
});

coded_enum!(YesNo, "yes/no flag", {
    No => 0, "no";
    Yes => 1, "yes";
});

/// Normalize a label for matching: lowercase, hyphens and underscores
/// treated as spaces, surrounding whitespace trimmed.
fn normalize_label(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .replace(['-', '_'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for variant in ChestPainType::variants() {
            assert_eq!(ChestPainType::from_code(variant.code()), Some(*variant));
        }
        assert_eq!(ChestPainType::from_code(4), None);
    }

    #[test]
    fn test_from_str_accepts_labels_and_codes() {
        assert_eq!("male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!("1".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!(
            "non-anginal-pain".parse::<ChestPainType>().unwrap(),
            ChestPainType::NonAnginalPain
        );
        assert_eq!(
            "ST-T WAVE ABNORMALITY".parse::<RestingEcg>().unwrap(),
            RestingEcg::SttAbnormality
        );
        assert!("sideways".parse::<StSlope>().is_err());
        assert!("7".parse::<YesNo>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_codes() {
        let json = serde_json::to_string(&StSlope::Down).unwrap();
        assert_eq!(json, "2");
        let parsed: StSlope = serde_json::from_str("1").unwrap();
        assert_eq!(parsed, StSlope::Flat);
        assert!(serde_json::from_str::<StSlope>("9").is_err());
    }
}
