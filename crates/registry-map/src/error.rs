use registry_model::{ColumnRole, DiseaseType};
use thiserror::Error;

/// Errors from column resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A structurally required role could not be located. Usually means a
    /// wrong header offset or a wrong disease-type selection for the file.
    #[error(
        "missing required column(s) {} for disease type {disease}; headers read: [{}]; \
         check the header offset and the selected disease type",
        format_roles(.missing),
        .headers.join(", ")
    )]
    MissingStructuralColumns {
        disease: DiseaseType,
        missing: Vec<ColumnRole>,
        headers: Vec<String>,
    },
}

fn format_roles(roles: &[ColumnRole]) -> String {
    roles
        .iter()
        .map(ColumnRole::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, ResolveError>;
