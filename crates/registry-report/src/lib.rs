//! Report generation: bucketing, cohort aggregation, session lifecycle, and
//! summary CSV export.

pub mod aggregate;
pub mod buckets;
pub mod export;
pub mod session;

pub use aggregate::{COHORT_COLUMN, RELAPSE_TOTAL_COLUMN, aggregate};
pub use export::{summary_csv_string, write_summary_csv};
pub use session::ReportSession;
