//! Per-disease pipeline configuration.
//!
//! Every registry variant is the same pipeline parameterized by one of these
//! plain data values: which header offset its spreadsheet layout uses, which
//! roles apply, how affirmative flags are read, how the relapse year is
//! derived, and which fixed cutoff date bounds treatment durations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::Sex;

/// Disease types with a registry export variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiseaseType {
    Lymphoma,
    MultipleMyeloma,
    Lung,
    Prostate,
    Melanoma,
    Gynecologic,
    Gastric,
}

impl DiseaseType {
    pub const ALL: [DiseaseType; 7] = [
        DiseaseType::Lymphoma,
        DiseaseType::MultipleMyeloma,
        DiseaseType::Lung,
        DiseaseType::Prostate,
        DiseaseType::Melanoma,
        DiseaseType::Gynecologic,
        DiseaseType::Gastric,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiseaseType::Lymphoma => "lymphoma",
            DiseaseType::MultipleMyeloma => "multiple-myeloma",
            DiseaseType::Lung => "lung",
            DiseaseType::Prostate => "prostate",
            DiseaseType::Melanoma => "melanoma",
            DiseaseType::Gynecologic => "gynecologic",
            DiseaseType::Gastric => "gastric",
        }
    }
}

impl std::fmt::Display for DiseaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a relapse-flag cell is interpreted as boolean true.
///
/// The two readings disagree on values like "SUSPEITA" or "SEM DADOS", so
/// the choice is an explicit per-disease configuration, never inferred from
/// file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AffirmativePolicy {
    /// Trimmed, uppercased value must be exactly "S", "SIM", or "YES".
    Exact,
    /// Trimmed, uppercased value merely has to start with "S".
    StartsWithS,
}

/// Where a record's relapse year comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelapseYearPolicy {
    /// Year of the parsed relapse-date column value.
    FromRelapseDate,
    /// Every relapsed record is attributed to this single reporting year.
    FixedYear(i32),
    /// No relapse-year source; only the catch-all relapse total applies.
    Unavailable,
}

/// Pipeline parameters for one disease type variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseConfig {
    pub disease: DiseaseType,
    /// Leading non-data rows to discard before the header row.
    pub header_offset: usize,
    /// Whether this variant carries a staging field at all.
    pub staging: bool,
    pub affirmative: AffirmativePolicy,
    pub relapse_year: RelapseYearPolicy,
    /// Fixed report cutoff bounding treatment durations. Never "now".
    pub reference_end: NaiveDate,
    /// Set for single-sex diseases; drives cohort de-duplication.
    pub fixed_sex: Option<Sex>,
}

/// Default reporting cutoff used by every variant: end of the 2025 report year.
pub const DEFAULT_REFERENCE_END: NaiveDate = match NaiveDate::from_ymd_opt(2025, 12, 31) {
    Some(date) => date,
    None => unreachable!(),
};

impl DiseaseConfig {
    /// Canonical defaults for a disease type. Every field may be overridden
    /// by the caller afterwards.
    pub fn for_disease(disease: DiseaseType) -> DiseaseConfig {
        let mut config = DiseaseConfig {
            disease,
            header_offset: default_header_offset(disease),
            staging: disease != DiseaseType::MultipleMyeloma,
            affirmative: AffirmativePolicy::Exact,
            relapse_year: RelapseYearPolicy::FromRelapseDate,
            reference_end: DEFAULT_REFERENCE_END,
            fixed_sex: None,
        };
        match disease {
            DiseaseType::Lymphoma | DiseaseType::MultipleMyeloma => {
                // These layouts have no relapse-date column; the original
                // report attributes every relapse to the 2025 column.
                config.relapse_year = RelapseYearPolicy::FixedYear(2025);
            }
            DiseaseType::Prostate => config.fixed_sex = Some(Sex::Male),
            DiseaseType::Gynecologic => config.fixed_sex = Some(Sex::Female),
            DiseaseType::Gastric => config.affirmative = AffirmativePolicy::StartsWithS,
            DiseaseType::Lung | DiseaseType::Melanoma => {}
        }
        config
    }

    /// Reference year used when age has to be derived from a birth year.
    pub fn reference_year(&self) -> i32 {
        use chrono::Datelike;
        self.reference_end.year()
    }
}

fn default_header_offset(disease: DiseaseType) -> usize {
    match disease {
        DiseaseType::Lymphoma => 7,
        DiseaseType::MultipleMyeloma => 2,
        DiseaseType::Lung => 1,
        DiseaseType::Prostate => 10,
        DiseaseType::Melanoma => 13,
        DiseaseType::Gynecologic => 8,
        DiseaseType::Gastric => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_observed_layouts() {
        let lymphoma = DiseaseConfig::for_disease(DiseaseType::Lymphoma);
        assert_eq!(lymphoma.header_offset, 7);
        assert!(lymphoma.staging);
        assert_eq!(lymphoma.relapse_year, RelapseYearPolicy::FixedYear(2025));

        let myeloma = DiseaseConfig::for_disease(DiseaseType::MultipleMyeloma);
        assert_eq!(myeloma.header_offset, 2);
        assert!(!myeloma.staging);

        let prostate = DiseaseConfig::for_disease(DiseaseType::Prostate);
        assert_eq!(prostate.fixed_sex, Some(Sex::Male));
        assert_eq!(prostate.affirmative, AffirmativePolicy::Exact);

        let gastric = DiseaseConfig::for_disease(DiseaseType::Gastric);
        assert_eq!(gastric.affirmative, AffirmativePolicy::StartsWithS);
    }

    #[test]
    fn reference_year_follows_cutoff() {
        let mut config = DiseaseConfig::for_disease(DiseaseType::Lung);
        assert_eq!(config.reference_year(), 2025);
        config.reference_end = NaiveDate::from_ymd_opt(2023, 6, 30).unwrap();
        assert_eq!(config.reference_year(), 2023);
    }
}
