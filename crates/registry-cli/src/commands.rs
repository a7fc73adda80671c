//! Command implementations.

use std::fs::File;

use anyhow::{Context, Result};

use registry_ingest::RawTable;
use registry_model::{DiseaseConfig, DiseaseType, RelapseYearPolicy};
use registry_report::{ReportSession, write_summary_csv};

use crate::cli::ReportArgs;
use crate::render::{print_disease_defaults, print_summary};

/// Builds the effective disease configuration from defaults plus overrides.
fn effective_config(args: &ReportArgs) -> DiseaseConfig {
    let mut config = DiseaseConfig::for_disease(args.disease.to_disease());
    if let Some(offset) = args.header_offset {
        config.header_offset = offset;
    }
    if let Some(end) = args.reference_end {
        config.reference_end = end;
    }
    if let Some(policy) = args.affirmative {
        config.affirmative = policy.to_policy();
    }
    if args.relapse_year_from_date {
        config.relapse_year = RelapseYearPolicy::FromRelapseDate;
    }
    if let Some(year) = args.relapse_year {
        config.relapse_year = RelapseYearPolicy::FixedYear(year);
    }
    config
}

pub fn run_report(args: &ReportArgs) -> Result<()> {
    let config = effective_config(args);
    tracing::info!(
        disease = %config.disease,
        header_offset = config.header_offset,
        "generating report"
    );

    let table = RawTable::from_path(&args.file, config.header_offset)
        .with_context(|| format!("load registry export {}", args.file.display()))?;
    let session = ReportSession::load(&table, config)
        .context("resolve registry columns")?;
    let summary = session.summary();

    print_summary(&summary, session.config().disease);

    if let Some(path) = &args.output {
        let file = File::create(path)
            .with_context(|| format!("create output file {}", path.display()))?;
        write_summary_csv(&summary, file)
            .with_context(|| format!("write summary csv {}", path.display()))?;
        println!("Summary written to {}", path.display());
    }
    Ok(())
}

pub fn run_diseases() -> Result<()> {
    let configs: Vec<DiseaseConfig> = DiseaseType::ALL
        .iter()
        .map(|disease| DiseaseConfig::for_disease(*disease))
        .collect();
    print_disease_defaults(&configs);
    Ok(())
}
