use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Patient sex as recorded in the registry export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sex {
    Female,
    Male,
    #[default]
    Unknown,
}

impl Sex {
    /// Parses the registry encoding: exact trimmed, uppercased "F" or "M".
    pub fn parse(value: &str) -> Sex {
        match value.trim().to_uppercase().as_str() {
            "F" => Sex::Female,
            "M" => Sex::Male,
            _ => Sex::Unknown,
        }
    }

    /// Cohort label used in summary output.
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Female => "F",
            Sex::Male => "M",
            Sex::Unknown => "?",
        }
    }
}

/// Clinical disease stage extracted from free-text staging fields.
///
/// Only the four Roman-numeral codes are ever accepted; any other token in
/// the staging text leaves the stage undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    I,
    II,
    III,
    IV,
}

impl Stage {
    /// All stages in count-column order.
    pub const ALL: [Stage; 4] = [Stage::I, Stage::II, Stage::III, Stage::IV];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::I => "I",
            Stage::II => "II",
            Stage::III => "III",
            Stage::IV => "IV",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fully normalized and derived registry record.
///
/// `sex`, `is_deceased`, and `is_relapsed` are always defined (defaulting to
/// unknown/false); every other field is null when the source value was
/// absent or unparseable. `treatment_years` is clamped to zero when the
/// consult date falls after the reference end date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub sex: Sex,
    pub age: Option<f64>,
    pub is_deceased: bool,
    pub death_date: Option<NaiveDate>,
    pub is_relapsed: bool,
    pub relapse_year: Option<i32>,
    pub treatment_years: Option<f64>,
    pub stage: Option<Stage>,
}
