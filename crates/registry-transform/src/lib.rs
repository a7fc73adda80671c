//! Field normalization and derived-field calculation.
//!
//! Converts resolved raw columns into typed [`registry_model::PatientRecord`]
//! values: lenient date/numeric coercion, flag interpretation, stage
//! extraction, then treatment-duration and relapse-year derivation. Parse
//! failures become nulls; nothing in this crate raises per-field errors.

pub mod datetime;
pub mod derive;
pub mod flags;
pub mod normalize;
pub mod numeric;
pub mod stage;

pub use datetime::parse_date;
pub use derive::{derive, relapse_year, treatment_years};
pub use flags::{is_affirmative, is_death_affirmative};
pub use normalize::{RecordDraft, normalize};
pub use numeric::{parse_age, parse_numeric};
pub use stage::extract_stage;
