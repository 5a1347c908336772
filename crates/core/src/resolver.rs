//! Slot-to-response resolution over a [`ResponseTable`].
//!
//! Matching is plain substring containment over the lowercased slot value,
//! first declared entry wins. This is deliberately not token matching: a
//! short matcher like "pr" also fires inside longer words, and table order
//! is what keeps specific entries ahead of broad ones.

use crate::knowledge::ResponseTable;

/// Resolve a slot value against a table.
///
/// - absent or blank slot: the table's overview text
/// - first entry with a contained matcher substring: that entry's response
/// - otherwise: the table's fallback prompt
pub fn resolve(table: &ResponseTable, slot: Option<&str>) -> &'static str {
    let Some(value) = slot.map(str::trim).filter(|value| !value.is_empty()) else {
        return table.overview;
    };

    let normalized = value.to_lowercase();
    for entry in table.entries {
        if entry.matchers.iter().any(|matcher| normalized.contains(matcher)) {
            return entry.response;
        }
    }

    table.fallback
}
