//! Key-value storage contract.
//!
//! # Responsibility
//! - Define the string key-value surface the persistence adapter writes
//!   through (`get`/`set`, both fallible).
//! - Provide an in-memory implementation for tests and ephemeral sessions.
//!
//! # Invariants
//! - `get` distinguishes "key absent" (`Ok(None)`) from "store failed"
//!   (`Err`).
//! - Implementations never interpret the stored value; payload encoding is
//!   the adapter's concern.

use crate::db::DbError;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure raised by a key-value store backend.
#[derive(Debug)]
pub enum StorageError {
    /// Durable backend (SQLite) failure.
    Db(DbError),
    /// Store is unable to serve requests (quota, injected test failure).
    Unavailable(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Unavailable(reason) => write!(f, "storage unavailable: {reason}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Synchronous string key-value store.
///
/// Models the environment-supplied storage primitive: both operations can
/// fail, and callers above the adapter must never see those failures.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Writes `value` under `key`, replacing any prior value.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

/// HashMap-backed store for tests and ephemeral sessions.
///
/// Read/write failures can be injected to exercise the adapter's
/// error-absorption paths.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.into(), value.into());
        store
    }

    /// Makes every subsequent `get` fail.
    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Makes every subsequent `set` fail.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Direct read of the raw stored value, bypassing the failure switches.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        if self.fail_reads {
            return Err(StorageError::Unavailable("injected read failure".into()));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("injected write failure".into()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueStore, MemoryKeyValueStore, StorageError};

    #[test]
    fn get_reports_absent_key_as_none() {
        let store = MemoryKeyValueStore::new();
        assert_eq!(store.get("todoList").unwrap(), None);
    }

    #[test]
    fn set_then_get_returns_latest_value() {
        let mut store = MemoryKeyValueStore::new();
        store.set("todoList", "[]").unwrap();
        store.set("todoList", "[1]").unwrap();

        assert_eq!(store.get("todoList").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn injected_failures_surface_as_unavailable() {
        let mut store = MemoryKeyValueStore::with_entry("todoList", "[]");
        store.fail_reads(true);
        store.fail_writes(true);

        assert!(matches!(
            store.get("todoList"),
            Err(StorageError::Unavailable(_))
        ));
        assert!(matches!(
            store.set("todoList", "[]"),
            Err(StorageError::Unavailable(_))
        ));
        // Raw access still sees the seeded value.
        assert_eq!(store.raw("todoList"), Some("[]"));
    }
}
