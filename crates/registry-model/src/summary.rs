use serde::{Deserialize, Serialize};

/// One summary row: a cohort label plus its counts, aligned with the owning
/// table's count columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub cohort: String,
    pub counts: Vec<u64>,
}

/// The consolidated summary table for one report generation.
///
/// `columns` holds the full ordered header, label column first; every row's
/// `counts` has exactly `columns.len() - 1` entries, so the table is
/// rectangular by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTable {
    pub columns: Vec<String>,
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a cohort row. The count vector must line up with the count
    /// columns; mismatches are a programming error in the aggregator.
    pub fn push_row(&mut self, cohort: impl Into<String>, counts: Vec<u64>) {
        debug_assert_eq!(counts.len() + 1, self.columns.len());
        self.rows.push(SummaryRow {
            cohort: cohort.into(),
            counts,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks up a count by cohort label and column name.
    pub fn count(&self, cohort: &str, column: &str) -> Option<u64> {
        let col = self.columns.iter().position(|c| c == column)?;
        if col == 0 {
            return None;
        }
        let row = self.rows.iter().find(|r| r.cohort == cohort)?;
        row.counts.get(col - 1).copied()
    }
}
