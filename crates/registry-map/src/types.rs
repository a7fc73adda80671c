use std::collections::BTreeMap;

use registry_model::ColumnRole;

/// Mapping from logical role to the raw column name it resolved to.
///
/// A role that is absent from the map either did not apply to the disease
/// type or had no matching header; either way downstream treats its values
/// as null for every record.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    entries: BTreeMap<ColumnRole, String>,
}

impl ColumnMap {
    pub fn insert(&mut self, role: ColumnRole, column: String) {
        self.entries.insert(role, column);
    }

    /// Raw column name resolved for a role, if any.
    pub fn get(&self, role: ColumnRole) -> Option<&str> {
        self.entries.get(&role).map(String::as_str)
    }

    pub fn is_resolved(&self, role: ColumnRole) -> bool {
        self.entries.contains_key(&role)
    }

    /// Resolved (role, column) pairs in role order.
    pub fn iter(&self) -> impl Iterator<Item = (ColumnRole, &str)> {
        self.entries.iter().map(|(role, col)| (*role, col.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
