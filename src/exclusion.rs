use std::collections::HashSet;

use crate::layout::ReconciledField;

/// Drop excluded-field entries that no longer exist in the reconciled field
/// list, keeping the author's ordering for the survivors. Total: stale
/// entries disappear silently.
pub fn reconcile(current: &[String], valid_names: &HashSet<String>) -> Vec<String> {
    current
        .iter()
        .filter(|name| valid_names.contains(name.as_str()))
        .cloned()
        .collect()
}

/// Convenience over `reconcile` for a freshly computed field list.
pub fn reconcile_with_fields(current: &[String], fields: &[ReconciledField]) -> Vec<String> {
    let valid_names: HashSet<String> = fields
        .iter()
        .map(|field| field.api_name().to_string())
        .collect();
    reconcile(current, &valid_names)
}
