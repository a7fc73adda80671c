//! Caller-owned report session.
//!
//! One session holds the state of one report generation: the raw table, the
//! resolved column map, and the derived record table. Loading a new session
//! replaces the previous one; dropping it discards all per-run state. There
//! is no persistence and no sharing across runs.

use registry_ingest::RawTable;
use registry_map::{ColumnMap, ResolveError, ensure_structural, resolve};
use registry_model::{DiseaseConfig, PatientRecord, SummaryTable};
use registry_transform::{derive, normalize};

use crate::aggregate::aggregate;

/// State of one report generation.
#[derive(Debug)]
pub struct ReportSession {
    config: DiseaseConfig,
    columns: ColumnMap,
    records: Vec<PatientRecord>,
}

impl ReportSession {
    /// Resolves, normalizes, and derives the record table for one raw input.
    ///
    /// Fails only when a structurally required column (sex, or both
    /// identifying dates) is missing; everything else degrades to nulls.
    pub fn load(table: &RawTable, config: DiseaseConfig) -> Result<ReportSession, ResolveError> {
        let columns = resolve(&table.headers, &config);
        ensure_structural(&columns, &config, &table.headers)?;
        let records: Vec<PatientRecord> = normalize(table, &columns, &config)
            .into_iter()
            .map(|draft| derive(draft, &config))
            .collect();
        tracing::info!(
            disease = %config.disease,
            records = records.len(),
            resolved_columns = columns.len(),
            "report session loaded"
        );
        Ok(ReportSession {
            config,
            columns,
            records,
        })
    }

    pub fn config(&self) -> &DiseaseConfig {
        &self.config
    }

    pub fn column_map(&self) -> &ColumnMap {
        &self.columns
    }

    pub fn records(&self) -> &[PatientRecord] {
        &self.records
    }

    /// Builds the consolidated summary table for this session's records.
    pub fn summary(&self) -> SummaryTable {
        aggregate(&self.records, &self.config)
    }

    /// Exports this session's summary as UTF-8 comma-separated text.
    pub fn write_csv<W: std::io::Write>(&self, writer: W) -> csv::Result<()> {
        crate::export::write_summary_csv(&self.summary(), writer)
    }
}
