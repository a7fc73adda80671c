pub mod config;
pub mod record;
pub mod roles;
pub mod summary;

pub use config::{
    AffirmativePolicy, DEFAULT_REFERENCE_END, DiseaseConfig, DiseaseType, RelapseYearPolicy,
};
pub use record::{PatientRecord, Sex, Stage};
pub use roles::ColumnRole;
pub use summary::{SummaryRow, SummaryTable};
