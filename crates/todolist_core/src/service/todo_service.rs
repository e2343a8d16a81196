//! Todo item store.
//!
//! # Responsibility
//! - Own the canonical insertion-ordered item collection.
//! - Validate every mutation and trigger persistence after it applies.
//! - Serve the sorted read-only view.
//!
//! # Invariants
//! - The canonical collection keeps insertion order; only `list()` sorts.
//! - Invalid input is a no-op signaled by `None`/`false`; no public
//!   operation returns an error or panics.
//! - Every applied mutation is followed by exactly one save call.

use crate::model::item::{normalize_title, now_epoch_ms, Item};
use crate::repo::item_repo::ItemRepository;
use log::info;

/// Authoritative in-memory item store, one instance per session.
pub struct TodoService<R: ItemRepository> {
    repo: R,
    items: Vec<Item>,
}

impl<R: ItemRepository> TodoService<R> {
    /// Creates the store, loading the initial collection through `repo`.
    ///
    /// Never fails: absent or unusable persisted state starts the session
    /// with an empty collection.
    pub fn new(repo: R) -> Self {
        let items = repo.load();
        info!(
            "event=service_init module=service status=ok items={}",
            items.len()
        );
        Self { repo, items }
    }

    /// Adds a new item with the trimmed `title`.
    ///
    /// # Contract
    /// - Whitespace-only `title` returns `None` without touching the
    ///   collection or storage.
    /// - Otherwise the item is appended, persisted, and returned; its id is
    ///   the creation timestamp rendered as a string.
    pub fn add(&mut self, title: &str) -> Option<Item> {
        let title = normalize_title(title)?;
        let item = Item::new(title, now_epoch_ms());

        self.items.push(item.clone());
        self.repo.save(&self.items);

        Some(item)
    }

    /// Replaces the title of the item identified by `id`.
    ///
    /// # Contract
    /// - Whitespace-only `new_title` or an unknown `id` returns `false`
    ///   without touching the collection or storage.
    /// - On success only `title` changes; `id`, `created_at`, and the item's
    ///   position in the canonical collection stay fixed.
    pub fn update(&mut self, id: &str, new_title: &str) -> bool {
        let Some(title) = normalize_title(new_title) else {
            return false;
        };
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };

        item.title = title;
        self.repo.save(&self.items);

        true
    }

    /// Returns a snapshot sorted by `created_at` descending (newest first).
    ///
    /// The sort is stable, so items created in the same millisecond keep
    /// their insertion order. Pure read; recomputed on every call.
    pub fn list(&self) -> Vec<Item> {
        let mut view = self.items.clone();
        view.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        view
    }

    /// Number of items in the canonical collection.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Tears the store down, releasing its repository.
    pub fn into_repo(self) -> R {
        self.repo
    }
}
