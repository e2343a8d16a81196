//! Item domain model.
//!
//! # Responsibility
//! - Define the single persisted record: a titled, timestamped entry.
//! - Provide the creation-time id/timestamp derivation used by the store.
//!
//! # Invariants
//! - `id` is assigned once at creation and stays stable for the item's
//!   lifetime.
//! - `title` is non-empty after trimming by the time an item is stored.
//! - `created_at` is epoch milliseconds and never changes after creation.
//!
//! # Known gaps
//! - There is no delete operation; items leave the collection only when the
//!   whole collection is overwritten.
//! - Two items created within the same millisecond receive the same id.
//!   Callers are expected to drive the store at UI speed, where this does
//!   not occur in practice.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Canonical record for one list entry.
///
/// The serialized shape (`id`, `title`, `createdAt`) is the persisted wire
/// layout and must stay stable; see `repo::item_repo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, the creation timestamp rendered as a decimal
    /// string.
    pub id: String,
    /// Display text. Non-empty after trimming once stored.
    pub title: String,
    /// Creation time in epoch milliseconds.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Item {
    /// Creates an item stamped with the given creation time.
    ///
    /// The id is derived from `created_at_ms`; the caller supplies a
    /// pre-normalized title (see [`normalize_title`]).
    pub fn new(title: impl Into<String>, created_at_ms: i64) -> Self {
        Self {
            id: created_at_ms.to_string(),
            title: title.into(),
            created_at: created_at_ms,
        }
    }
}

/// Trims the raw title and rejects empty results.
///
/// Returns `None` when nothing but whitespace remains; mutations receiving
/// `None` must not touch the collection.
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Current time in epoch milliseconds.
///
/// Falls back to 0 if the system clock reports a pre-epoch time.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
