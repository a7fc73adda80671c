//! Logical column roles a registry export can carry.

use serde::{Deserialize, Serialize};

/// Semantic role a raw column can be resolved to.
///
/// The death and relapse concerns each split into a date-form and a flag-form
/// role because source files encode them either way; the resolver prefers the
/// date form when both are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ColumnRole {
    Sex,
    ConsultDate,
    BirthDate,
    Age,
    DeathDate,
    DeathFlag,
    RelapseFlag,
    RelapseDate,
    StageText,
}

impl ColumnRole {
    /// Stable lowercase identifier, used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnRole::Sex => "sex",
            ColumnRole::ConsultDate => "consult_date",
            ColumnRole::BirthDate => "birth_date",
            ColumnRole::Age => "age",
            ColumnRole::DeathDate => "death_date",
            ColumnRole::DeathFlag => "death_flag",
            ColumnRole::RelapseFlag => "relapse_flag",
            ColumnRole::RelapseDate => "relapse_date",
            ColumnRole::StageText => "stage_text",
        }
    }
}

impl std::fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
