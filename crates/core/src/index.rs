use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::INDEX_VERSION;

/// The chat-session index record as stored in `ItemTable`.
///
/// `entries` maps a session id to that session's metadata. The metadata is
/// opaque to this tool: it is carried through as raw JSON and never
/// inspected, so sessions written by any client version survive the merge
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionIndex {
    /// Format version. Defaults to 1 when the stored record omits it.
    #[serde(default = "default_version")]
    pub version: u32,
    /// Session id → opaque session metadata.
    pub entries: Map<String, Value>,
}

fn default_version() -> u32 {
    INDEX_VERSION
}

impl SessionIndex {
    /// Decode a stored index record.
    ///
    /// Fails on malformed JSON, a non-object top level, or a missing or
    /// non-object `entries` field.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Encode the index back to the stored representation.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Number of sessions in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_record() {
        let index =
            SessionIndex::from_json(r#"{"version": 1, "entries": {"s1": {"title": "x"}}}"#)
                .unwrap();
        assert_eq!(index.version, 1);
        assert_eq!(index.len(), 1);
        assert_eq!(index.entries["s1"]["title"], "x");
    }

    #[test]
    fn test_decode_defaults_missing_version() {
        let index = SessionIndex::from_json(r#"{"entries": {}}"#).unwrap();
        assert_eq!(index.version, INDEX_VERSION);
        assert!(index.is_empty());
    }

    #[test]
    fn test_decode_rejects_missing_entries() {
        assert!(SessionIndex::from_json(r#"{"version": 1}"#).is_err());
    }

    #[test]
    fn test_decode_rejects_non_object_entries() {
        assert!(SessionIndex::from_json(r#"{"version": 1, "entries": [1, 2]}"#).is_err());
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        assert!(SessionIndex::from_json("not json at all").is_err());
    }

    #[test]
    fn test_roundtrip_preserves_opaque_metadata() {
        let raw = r#"{"version":1,"entries":{"s1":{"nested":{"deep":[1,2,3]},"n":null}}}"#;
        let index = SessionIndex::from_json(raw).unwrap();
        let reparsed = SessionIndex::from_json(&index.to_json().unwrap()).unwrap();
        assert_eq!(index, reparsed);
    }
}
