//! Pure merge computation for session indexes.
//!
//! Keeps the union logic out of the storage layer so the CLI can compute
//! the result (and its report) without touching a database, which is what
//! makes `--dry-run` trivial.

use crate::constants::INDEX_VERSION;
use crate::index::SessionIndex;

/// Entry counts for the user-facing summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeReport {
    /// Sessions in the old store's index.
    pub old: usize,
    /// Sessions in the new store's index.
    pub new: usize,
    /// Sessions in the merged index.
    pub total: usize,
}

impl MergeReport {
    #[must_use]
    pub fn new(old: &SessionIndex, new: &SessionIndex, merged: &SessionIndex) -> Self {
        Self { old: old.len(), new: new.len(), total: merged.len() }
    }
}

/// Merge two session indexes: the union of both entry maps, with the new
/// store's entry winning on a shared session id. Entry values are copied
/// whole; no field-level merging happens.
///
/// The output version is always 1, matching what the store itself writes.
#[must_use]
pub fn merge_indexes(old: &SessionIndex, new: &SessionIndex) -> SessionIndex {
    let mut entries = old.entries.clone();
    for (id, meta) in &new.entries {
        entries.insert(id.clone(), meta.clone());
    }
    SessionIndex { version: INDEX_VERSION, entries }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn index(entries: serde_json::Value) -> SessionIndex {
        SessionIndex::from_json(&json!({"version": 1, "entries": entries}).to_string()).unwrap()
    }

    #[test]
    fn test_union_of_key_sets() {
        let old = index(json!({"a": 1, "b": 2}));
        let new = index(json!({"b": 99, "c": 3}));

        let merged = merge_indexes(&old, &new);

        let mut keys: Vec<_> = merged.entries.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn test_new_store_wins_on_collision() {
        let old = index(json!({"a": 1, "b": 2}));
        let new = index(json!({"b": 99, "c": 3}));

        let merged = merge_indexes(&old, &new);

        assert_eq!(merged.entries["b"], json!(99));
    }

    #[test]
    fn test_old_only_keys_survive() {
        let old = index(json!({"a": {"title": "kept"}}));
        let new = index(json!({"c": 3}));

        let merged = merge_indexes(&old, &new);

        assert_eq!(merged.entries["a"], json!({"title": "kept"}));
    }

    #[test]
    fn test_counts_never_double_count_overlap() {
        let old = index(json!({"a": 1, "b": 2}));
        let new = index(json!({"b": 99, "c": 3}));

        let merged = merge_indexes(&old, &new);
        let report = MergeReport::new(&old, &new, &merged);

        assert_eq!(report, MergeReport { old: 2, new: 2, total: 3 });
    }

    #[test]
    fn test_empty_old_store() {
        let old = index(json!({}));
        let new = index(json!({"x": 1}));

        let merged = merge_indexes(&old, &new);
        let report = MergeReport::new(&old, &new, &merged);

        assert_eq!(merged.entries["x"], json!(1));
        assert_eq!(report, MergeReport { old: 0, new: 1, total: 1 });
    }

    #[test]
    fn test_merge_is_idempotent() {
        let old = index(json!({"a": 1, "b": 2}));
        let new = index(json!({"b": 99, "c": 3}));

        let once = merge_indexes(&old, &new);
        let twice = merge_indexes(&old, &once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_output_version_pinned_to_one() {
        let mut old = index(json!({"a": 1}));
        let mut new = index(json!({"b": 2}));
        old.version = 7;
        new.version = 9;

        assert_eq!(merge_indexes(&old, &new).version, 1);
    }
}
