//! Core state-management and persistence logic for the todo list.
//! This crate is the single source of truth for validation, ordering, and
//! storage round-trip invariants; rendering and input wiring live elsewhere.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;

pub use db::{open_db, open_db_in_memory, DbError, DbResult, SqliteKeyValueStore};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{normalize_title, now_epoch_ms, Item};
pub use repo::item_repo::{ItemRepository, KeyValueItemRepository, STORAGE_KEY};
pub use service::todo_service::TodoService;
pub use storage::{KeyValueStore, MemoryKeyValueStore, StorageError, StorageResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
