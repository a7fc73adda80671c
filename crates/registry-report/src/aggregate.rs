//! Cohort aggregation into the consolidated summary table.

use std::collections::BTreeSet;

use registry_model::{DiseaseConfig, PatientRecord, Sex, Stage, SummaryTable};

use crate::buckets::{AGE_BOUNDS, AGE_LABELS, DURATION_BOUNDS, DURATION_LABELS, bucket_index};

/// Header label of the cohort column.
pub const COHORT_COLUMN: &str = "Gênero";

/// Label of the catch-all relapse column used when no relapse year could be
/// derived for any record.
pub const RELAPSE_TOTAL_COLUMN: &str = "Recidivas (Total)";

/// Aggregates records into one summary row per cohort (F, M, Total).
///
/// The relapse-year columns are computed once over the entire input so every
/// cohort row carries the identical column set and the table stays
/// rectangular. Sex cohorts are emitted only when non-empty; the all-records
/// cohort is dropped only when a fixed-sex disease makes it identical to the
/// single sex cohort already emitted.
pub fn aggregate(records: &[PatientRecord], config: &DiseaseConfig) -> SummaryTable {
    let relapse_years: BTreeSet<i32> = records.iter().filter_map(|r| r.relapse_year).collect();

    let mut columns = vec![COHORT_COLUMN.to_string(), "Total".to_string()];
    for label in AGE_LABELS {
        columns.push(format!("Idade ({label})"));
    }
    for label in DURATION_LABELS {
        columns.push(format!("Tempo ({label})"));
    }
    if config.staging {
        for stage in Stage::ALL {
            columns.push(format!("Est. {stage}"));
        }
    }
    columns.push("Óbitos".to_string());
    if relapse_years.is_empty() {
        columns.push(RELAPSE_TOTAL_COLUMN.to_string());
    } else {
        for year in &relapse_years {
            columns.push(format!("{year} (Recidiva)"));
        }
    }

    let mut table = SummaryTable::new(columns);

    let female: Vec<&PatientRecord> = records.iter().filter(|r| r.sex == Sex::Female).collect();
    let male: Vec<&PatientRecord> = records.iter().filter(|r| r.sex == Sex::Male).collect();

    if !female.is_empty() {
        table.push_row("F", cohort_counts(&female, config, &relapse_years));
    }
    if !male.is_empty() {
        table.push_row("M", cohort_counts(&male, config, &relapse_years));
    }

    let single_sex_covers_all = match config.fixed_sex {
        Some(Sex::Female) => !records.is_empty() && female.len() == records.len(),
        Some(Sex::Male) => !records.is_empty() && male.len() == records.len(),
        _ => false,
    };
    if !single_sex_covers_all {
        let all: Vec<&PatientRecord> = records.iter().collect();
        table.push_row("Total", cohort_counts(&all, config, &relapse_years));
    }

    tracing::debug!(
        cohorts = table.rows.len(),
        relapse_years = relapse_years.len(),
        "summary aggregated"
    );
    table
}

fn cohort_counts(
    cohort: &[&PatientRecord],
    config: &DiseaseConfig,
    relapse_years: &BTreeSet<i32>,
) -> Vec<u64> {
    let mut counts = vec![cohort.len() as u64];

    let mut age_counts = [0u64; AGE_LABELS.len()];
    let mut duration_counts = [0u64; DURATION_LABELS.len()];
    let mut stage_counts = [0u64; Stage::ALL.len()];
    let mut deaths = 0u64;
    for record in cohort {
        if let Some(age) = record.age
            && let Some(idx) = bucket_index(age, &AGE_BOUNDS)
        {
            age_counts[idx] += 1;
        }
        if let Some(years) = record.treatment_years
            && let Some(idx) = bucket_index(years, &DURATION_BOUNDS)
        {
            duration_counts[idx] += 1;
        }
        if let Some(stage) = record.stage {
            stage_counts[stage as usize] += 1;
        }
        if record.is_deceased {
            deaths += 1;
        }
    }

    counts.extend(age_counts);
    counts.extend(duration_counts);
    if config.staging {
        counts.extend(stage_counts);
    }
    counts.push(deaths);

    if relapse_years.is_empty() {
        counts.push(cohort.iter().filter(|r| r.is_relapsed).count() as u64);
    } else {
        for year in relapse_years {
            counts.push(
                cohort
                    .iter()
                    .filter(|r| r.relapse_year == Some(*year))
                    .count() as u64,
            );
        }
    }
    counts
}
