//! Key-value access to a VS Code workspace `state.vscdb` file.
//!
//! The file is a SQLite database with a single generic table:
//! `ItemTable (key TEXT UNIQUE, value BLOB)`. Only point lookups and
//! point updates by exact key are needed here.

use std::path::Path;

use chat_merge_core::{SESSION_INDEX_KEY, SessionIndex};
use rusqlite::{Connection, OpenFlags, params};

use crate::error::{Result, StoreError};

/// Handle on an open state database.
///
/// Read-only handles never mutate the file; read-write handles never
/// create it. A missing file is always `StoreNotFound`, not a fresh
/// empty database.
pub struct StateDb {
    conn: Connection,
}

impl StateDb {
    /// Open an existing state database without write access.
    pub fn open_read_only(path: &Path) -> Result<Self> {
        Self::open_with(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
    }

    /// Open an existing state database for update.
    pub fn open_read_write(path: &Path) -> Result<Self> {
        Self::open_with(path, OpenFlags::SQLITE_OPEN_READ_WRITE)
    }

    fn open_with(path: &Path, flags: OpenFlags) -> Result<Self> {
        if !path.is_file() {
            return Err(StoreError::StoreNotFound(path.to_owned()));
        }
        let conn = Connection::open_with_flags(path, flags | OpenFlags::SQLITE_OPEN_NO_MUTEX)
            .map_err(|e| {
                tracing::debug!(path = %path.display(), "open failed: {e}");
                StoreError::StoreNotFound(path.to_owned())
            })?;
        Ok(Self { conn })
    }

    /// Point lookup of one `ItemTable` row.
    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT value FROM ItemTable WHERE key = ?1")?;
        let mut rows = stmt.query(params![key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    /// Point update of one existing `ItemTable` row, committed before
    /// return. Updating a key with no row is `RecordMissing`; the row is
    /// never inserted.
    pub fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let tx = self.conn.transaction()?;
        let updated = tx
            .execute("UPDATE ItemTable SET value = ?1 WHERE key = ?2", params![value, key])
            .map_err(StoreError::WriteFailure)?;
        if updated == 0 {
            // tx rolls back on drop; nothing was written
            return Err(StoreError::RecordMissing(key.to_owned()));
        }
        tx.commit().map_err(StoreError::WriteFailure)?;
        Ok(())
    }

    /// Fetch and decode the chat-session index record.
    pub fn read_session_index(&self) -> Result<SessionIndex> {
        let raw = self
            .get_item(SESSION_INDEX_KEY)?
            .ok_or_else(|| StoreError::RecordMissing(SESSION_INDEX_KEY.to_owned()))?;
        let index = SessionIndex::from_json(&raw)?;
        tracing::debug!(sessions = index.len(), version = index.version, "decoded session index");
        Ok(index)
    }

    /// Encode and write the chat-session index record.
    pub fn write_session_index(&mut self, index: &SessionIndex) -> Result<()> {
        let raw = index.to_json()?;
        self.set_item(SESSION_INDEX_KEY, &raw)
    }
}
