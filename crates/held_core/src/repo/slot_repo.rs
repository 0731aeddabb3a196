//! Single-slot blob persistence contracts and implementations.
//!
//! # Responsibility
//! - Provide synchronous read/write/clear of one named text slot.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `read` of an absent slot is `Ok(None)`, not an error.
//! - `write` replaces the prior payload in full; there is no partial write.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SlotResult<T> = Result<T, SlotError>;

/// Transport error for slot persistence operations.
#[derive(Debug)]
pub enum SlotError {
    Db(DbError),
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for SlotError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SlotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable store adapter: a named text slot with synchronous access.
pub trait SlotRepository {
    /// Reads the slot payload; `None` when the slot was never written or was
    /// cleared.
    fn read(&self, key: &str) -> SlotResult<Option<String>>;
    /// Writes the full payload, replacing any prior value.
    fn write(&self, key: &str, payload: &str) -> SlotResult<()>;
    /// Removes the slot; absent slots are a no-op.
    fn clear(&self, key: &str) -> SlotResult<()>;
}

impl<T: SlotRepository + ?Sized> SlotRepository for &T {
    fn read(&self, key: &str) -> SlotResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, payload: &str) -> SlotResult<()> {
        (**self).write(key, payload)
    }

    fn clear(&self, key: &str) -> SlotResult<()> {
        (**self).clear(key)
    }
}

/// SQLite-backed slot repository over a migrated connection.
pub struct SqliteSlotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SlotRepository for SqliteSlotRepository<'_> {
    fn read(&self, key: &str) -> SlotResult<Option<String>> {
        let payload = self
            .conn
            .query_row(
                "SELECT payload FROM app_slots WHERE slot = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(payload)
    }

    fn write(&self, key: &str, payload: &str) -> SlotResult<()> {
        self.conn.execute(
            "INSERT INTO app_slots (slot, payload, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(slot) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![key, payload],
        )?;
        Ok(())
    }

    fn clear(&self, key: &str) -> SlotResult<()> {
        self.conn
            .execute("DELETE FROM app_slots WHERE slot = ?1;", [key])?;
        Ok(())
    }
}

/// In-process slot repository for tests and smoke probes.
///
/// Interior mutability keeps the trait's `&self` contract while the store
/// remains single-threaded.
#[derive(Debug, Default)]
pub struct MemorySlotRepository {
    slots: RefCell<HashMap<String, String>>,
}

impl MemorySlotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a slot payload directly, bypassing the store. Test setup only.
    pub fn seed(&self, key: &str, payload: &str) {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), payload.to_string());
    }
}

impl SlotRepository for MemorySlotRepository {
    fn read(&self, key: &str) -> SlotResult<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> SlotResult<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> SlotResult<()> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}
