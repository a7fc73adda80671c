//! Column resolution over raw header names.
//!
//! For each role applicable to the disease type, the resolver scans the
//! headers for the first one whose folded form matches one of the role's
//! label patterns. Resolution never fails on its own; only the structural
//! check afterwards can reject a run.

use registry_model::{ColumnRole, DiseaseConfig, RelapseYearPolicy};

use crate::error::{ResolveError, Result};
use crate::patterns::role_patterns;
use crate::types::ColumnMap;
use crate::utils::fold_label;

/// Roles the resolver attempts for this configuration, in resolution order.
///
/// Staging is never attempted for variants without a staging field, and the
/// relapse-date role only applies under the from-date relapse-year policy.
/// The death flag is a fallback: it is consulted only when no death-date
/// column resolved.
fn applicable_roles(config: &DiseaseConfig) -> Vec<ColumnRole> {
    let mut roles = vec![
        ColumnRole::Sex,
        ColumnRole::ConsultDate,
        ColumnRole::BirthDate,
        ColumnRole::Age,
        ColumnRole::DeathDate,
        ColumnRole::RelapseFlag,
    ];
    if config.relapse_year == RelapseYearPolicy::FromRelapseDate {
        roles.push(ColumnRole::RelapseDate);
    }
    if config.staging {
        roles.push(ColumnRole::StageText);
    }
    roles
}

/// Resolves raw column names to logical roles.
pub fn resolve(headers: &[String], config: &DiseaseConfig) -> ColumnMap {
    let folded: Vec<String> = headers.iter().map(|h| fold_label(h)).collect();
    let mut map = ColumnMap::default();
    for role in applicable_roles(config) {
        if let Some(column) = find_column(headers, &folded, role) {
            tracing::debug!(role = %role, column = %column, "column resolved");
            map.insert(role, column);
        } else {
            tracing::debug!(role = %role, "no matching column");
        }
    }
    // Flag-form death is only a fallback for layouts without a death date.
    if !map.is_resolved(ColumnRole::DeathDate)
        && let Some(column) = find_column(headers, &folded, ColumnRole::DeathFlag)
    {
        tracing::debug!(column = %column, "falling back to death flag column");
        map.insert(ColumnRole::DeathFlag, column);
    }
    map
}

fn find_column(headers: &[String], folded: &[String], role: ColumnRole) -> Option<String> {
    for pattern in role_patterns(role) {
        for (header, folded_header) in headers.iter().zip(folded) {
            if pattern.matches(folded_header) {
                return Some(header.clone());
            }
        }
    }
    None
}

/// Verifies the structurally required roles: sex, plus at least one
/// identifying date (consult or birth). Anything else degrades gracefully.
pub fn ensure_structural(map: &ColumnMap, config: &DiseaseConfig, headers: &[String]) -> Result<()> {
    let mut missing = Vec::new();
    if !map.is_resolved(ColumnRole::Sex) {
        missing.push(ColumnRole::Sex);
    }
    if !map.is_resolved(ColumnRole::ConsultDate) && !map.is_resolved(ColumnRole::BirthDate) {
        missing.push(ColumnRole::ConsultDate);
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ResolveError::MissingStructuralColumns {
            disease: config.disease,
            missing,
            headers: headers.to_vec(),
        })
    }
}
