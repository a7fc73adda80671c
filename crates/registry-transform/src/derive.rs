//! Derived fields: treatment duration and relapse year.

use chrono::{Datelike, NaiveDate};

use registry_model::{DiseaseConfig, PatientRecord, RelapseYearPolicy};

use crate::normalize::RecordDraft;

/// Days per year used for duration arithmetic.
const DAYS_PER_YEAR: f64 = 365.25;

/// Elapsed treatment time in years.
///
/// The end of treatment is the death date when one exists, otherwise the
/// configured reference cutoff. A consult date after the end clamps to zero;
/// a missing consult date leaves the duration undefined.
pub fn treatment_years(
    consult: Option<NaiveDate>,
    death: Option<NaiveDate>,
    reference_end: NaiveDate,
) -> Option<f64> {
    let start = consult?;
    let end = death.unwrap_or(reference_end);
    if start > end {
        return Some(0.0);
    }
    Some((end - start).num_days() as f64 / DAYS_PER_YEAR)
}

/// Relapse year under the configured policy.
pub fn relapse_year(
    relapse_date: Option<NaiveDate>,
    is_relapsed: bool,
    policy: RelapseYearPolicy,
) -> Option<i32> {
    match policy {
        RelapseYearPolicy::FromRelapseDate => relapse_date.map(|date| date.year()),
        RelapseYearPolicy::FixedYear(year) => is_relapsed.then_some(year),
        RelapseYearPolicy::Unavailable => None,
    }
}

/// Completes a normalized draft into a [`PatientRecord`].
pub fn derive(draft: RecordDraft, config: &DiseaseConfig) -> PatientRecord {
    let treatment_years =
        treatment_years(draft.consult_date, draft.death_date, config.reference_end);
    let relapse_year = relapse_year(draft.relapse_date, draft.is_relapsed, config.relapse_year);
    PatientRecord {
        sex: draft.sex,
        age: draft.age,
        is_deceased: draft.is_deceased,
        death_date: draft.death_date,
        is_relapsed: draft.is_relapsed,
        relapse_year,
        treatment_years,
        stage: draft.stage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry_model::DiseaseType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn duration_to_reference_end() {
        let years = treatment_years(Some(date(2020, 1, 1)), None, date(2024, 12, 31)).unwrap();
        // 1826 days over a 365.25-day year.
        assert!((years - 1826.0 / 365.25).abs() < 1e-9);
        assert!((years - 4.999).abs() < 1e-3);
    }

    #[test]
    fn duration_to_death_date_when_deceased() {
        let years =
            treatment_years(Some(date(2020, 1, 1)), Some(date(2021, 1, 1)), date(2025, 12, 31))
                .unwrap();
        assert!((years - 366.0 / 365.25).abs() < 1e-9);
    }

    #[test]
    fn consult_after_end_clamps_to_zero() {
        let years = treatment_years(Some(date(2026, 1, 1)), None, date(2024, 12, 31));
        assert_eq!(years, Some(0.0));
    }

    #[test]
    fn missing_consult_date_is_undefined() {
        assert_eq!(treatment_years(None, None, date(2024, 12, 31)), None);
    }

    #[test]
    fn relapse_year_policies() {
        let relapse = Some(date(2023, 4, 2));
        assert_eq!(
            relapse_year(relapse, true, RelapseYearPolicy::FromRelapseDate),
            Some(2023)
        );
        assert_eq!(
            relapse_year(None, true, RelapseYearPolicy::FixedYear(2025)),
            Some(2025)
        );
        assert_eq!(
            relapse_year(None, false, RelapseYearPolicy::FixedYear(2025)),
            None
        );
        assert_eq!(relapse_year(relapse, true, RelapseYearPolicy::Unavailable), None);
    }

    #[test]
    fn derive_fills_all_fields() {
        let config = DiseaseConfig::for_disease(DiseaseType::Lymphoma);
        let draft = RecordDraft {
            sex: registry_model::Sex::Female,
            age: Some(54.0),
            consult_date: Some(date(2020, 1, 1)),
            is_deceased: false,
            death_date: None,
            is_relapsed: true,
            relapse_date: None,
            stage: None,
        };
        let record = derive(draft, &config);
        assert_eq!(record.relapse_year, Some(2025));
        assert!(record.treatment_years.unwrap() > 5.9);
        assert!(!record.is_deceased);
    }
}
