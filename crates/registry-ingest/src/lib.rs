//! Registry export ingestion.
//!
//! Turns a byte stream (or file) plus a header-offset hint into a [`RawTable`]
//! of trimmed, named text columns. Encoding and delimiter fallback is handled
//! here; column semantics are not.

pub mod error;
pub mod table;

pub use error::{IngestError, Result};
pub use table::RawTable;
