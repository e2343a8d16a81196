//! Item persistence adapter.
//!
//! # Responsibility
//! - Serialize the full item collection to a JSON array under one fixed key.
//! - Absorb every storage and parse failure; callers never see an error.
//!
//! # Invariants
//! - A missing key, an unreadable store, and a malformed payload all load as
//!   an empty collection (corruption self-heals on the next save).
//! - A failed save is logged and dropped; in-memory state is allowed to run
//!   ahead of storage until the next successful save.

use crate::model::item::Item;
use crate::storage::KeyValueStore;
use log::{error, warn};

/// Fixed storage key. Part of the wire layout; never rename.
pub const STORAGE_KEY: &str = "todoList";

/// Load/save contract the item store persists through.
///
/// Intentionally infallible on the surface: the availability-over-durability
/// tradeoff lives behind this trait.
pub trait ItemRepository {
    /// Reads the persisted collection, or an empty one when nothing usable
    /// is stored.
    fn load(&self) -> Vec<Item>;

    /// Overwrites the persisted collection with `items`.
    fn save(&mut self, items: &[Item]);
}

/// Repository over any [`KeyValueStore`], encoding items as a JSON array.
pub struct KeyValueItemRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> KeyValueItemRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Releases the underlying store at session teardown.
    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S: KeyValueStore> ItemRepository for KeyValueItemRepository<S> {
    fn load(&self) -> Vec<Item> {
        let raw = match self.store.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                error!("event=items_load module=repo status=error error={err}");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Item>>(&raw) {
            Ok(items) => items,
            Err(err) => {
                // Shape mismatch counts as absent data; the payload is
                // dropped wholesale rather than partially salvaged.
                warn!(
                    "event=items_load module=repo status=discarded reason=malformed_payload error={err}"
                );
                Vec::new()
            }
        }
    }

    fn save(&mut self, items: &[Item]) {
        let payload = match serde_json::to_string(items) {
            Ok(payload) => payload,
            Err(err) => {
                error!("event=items_save module=repo status=error stage=encode error={err}");
                return;
            }
        };

        if let Err(err) = self.store.set(STORAGE_KEY, &payload) {
            error!(
                "event=items_save module=repo status=error stage=write items={} error={err}",
                items.len()
            );
        }
    }
}
