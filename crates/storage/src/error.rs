//! Typed error enum for the storage layer.
//!
//! Every variant is fatal for the merge: the tool has no retry or
//! partial-completion logic, so callers only need enough structure to
//! report which step failed and leave the target store untouched.

use std::path::PathBuf;

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The path does not resolve to an openable state database.
    #[error("store not found: {}", .0.display())]
    StoreNotFound(PathBuf),

    /// `ItemTable` has no row for the expected key.
    #[error("record missing: no row for key {0:?}")]
    RecordMissing(String),

    /// The stored value is not a valid session index.
    #[error("decode error: {context}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The update did not commit; the store is left as the engine's own
    /// failure handling leaves it.
    #[error("write failure: {0}")]
    WriteFailure(#[source] rusqlite::Error),

    /// Any other SQL or connection failure.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode { context: "session index JSON".to_owned(), source: err }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
