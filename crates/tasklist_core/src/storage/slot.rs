//! Named storage slots.
//!
//! # Responsibility
//! - Read and overwrite one string value per fixed key.
//!
//! # Invariants
//! - A write replaces the previous value unconditionally (last write wins).
//! - Reading an unknown key yields `None`, never an error.

use super::StorageResult;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

/// Key/value slot contract, the local analogue of browser storage.
pub trait SlotStore {
    fn read_slot(&self, key: &str) -> StorageResult<Option<String>>;
    fn write_slot(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// SQLite-backed slot store over the `storage_slots` table.
pub struct SqliteSlotStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotStore<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SlotStore for SqliteSlotStore<'_> {
    fn read_slot(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM storage_slots WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_slot(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO storage_slots (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        debug!(
            "event=slot_write module=storage status=ok key={} bytes={}",
            key,
            value.len()
        );
        Ok(())
    }
}
