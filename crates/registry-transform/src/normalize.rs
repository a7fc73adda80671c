//! Field normalization: raw column text to typed per-record values.
//!
//! Every rule here is best-effort with silent fallback to null; only the
//! column resolution step before this can reject a run.

use chrono::NaiveDate;

use registry_ingest::RawTable;
use registry_map::ColumnMap;
use registry_model::{ColumnRole, DiseaseConfig, Sex, Stage};

use crate::datetime::parse_date;
use crate::flags::{is_affirmative, is_death_affirmative};
use crate::numeric::parse_age;
use crate::stage::extract_stage;

/// A record after normalization, before derived fields are computed.
#[derive(Debug, Clone, Default)]
pub struct RecordDraft {
    pub sex: Sex,
    pub age: Option<f64>,
    pub consult_date: Option<NaiveDate>,
    pub is_deceased: bool,
    pub death_date: Option<NaiveDate>,
    pub is_relapsed: bool,
    pub relapse_date: Option<NaiveDate>,
    pub stage: Option<Stage>,
}

/// Normalizes every row of the raw table into a [`RecordDraft`].
pub fn normalize(table: &RawTable, map: &ColumnMap, config: &DiseaseConfig) -> Vec<RecordDraft> {
    let sex_col = column(table, map, ColumnRole::Sex);
    let consult_col = column(table, map, ColumnRole::ConsultDate);
    let birth_col = column(table, map, ColumnRole::BirthDate);
    let age_col = column(table, map, ColumnRole::Age);
    let death_date_col = column(table, map, ColumnRole::DeathDate);
    let death_flag_col = column(table, map, ColumnRole::DeathFlag);
    let relapse_flag_col = column(table, map, ColumnRole::RelapseFlag);
    let relapse_date_col = column(table, map, ColumnRole::RelapseDate);
    let stage_col = column(table, map, ColumnRole::StageText);

    // Age falls back to birth-year arithmetic only when the age column is
    // absent or yields no parseable value in the whole table.
    let ages: Option<Vec<Option<f64>>> =
        age_col.map(|col| col.iter().map(|v| parse_age(v)).collect());
    let use_age_column = ages
        .as_ref()
        .is_some_and(|parsed| parsed.iter().any(Option::is_some));
    if !use_age_column && age_col_resolved(map) {
        tracing::warn!("age column resolved but no value parsed; deriving from birth year");
    }

    let mut drafts = Vec::with_capacity(table.n_rows());
    for row in 0..table.n_rows() {
        let birth_date = cell(&birth_col, row).and_then(parse_date);
        let age = if use_age_column {
            ages.as_ref().and_then(|parsed| parsed[row])
        } else {
            birth_date.map(|birth| {
                use chrono::Datelike;
                f64::from(config.reference_year() - birth.year())
            })
        };

        let (is_deceased, death_date) = if death_date_col.is_some() {
            let parsed = cell(&death_date_col, row).and_then(parse_date);
            (parsed.is_some(), parsed)
        } else if let Some(flag) = cell(&death_flag_col, row) {
            (is_death_affirmative(flag), None)
        } else {
            (false, None)
        };

        drafts.push(RecordDraft {
            sex: cell(&sex_col, row).map(Sex::parse).unwrap_or_default(),
            age: age.filter(|a| *a >= 0.0),
            consult_date: cell(&consult_col, row).and_then(parse_date),
            is_deceased,
            death_date,
            is_relapsed: cell(&relapse_flag_col, row)
                .is_some_and(|flag| is_affirmative(flag, config.affirmative)),
            relapse_date: cell(&relapse_date_col, row).and_then(parse_date),
            stage: cell(&stage_col, row).and_then(extract_stage),
        });
    }
    tracing::debug!(records = drafts.len(), "records normalized");
    drafts
}

fn column<'a>(table: &'a RawTable, map: &ColumnMap, role: ColumnRole) -> Option<Vec<&'a str>> {
    map.get(role).and_then(|name| table.column(name))
}

fn cell<'a>(col: &Option<Vec<&'a str>>, row: usize) -> Option<&'a str> {
    col.as_ref().and_then(|values| values.get(row).copied())
}

fn age_col_resolved(map: &ColumnMap) -> bool {
    map.is_resolved(ColumnRole::Age)
}
