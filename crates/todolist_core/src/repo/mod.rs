//! Persistence layer for the canonical item collection.
//!
//! # Responsibility
//! - Define the load/save contract the item store persists through.
//! - Keep payload encoding and storage failure absorption in one place.
//!
//! # Invariants
//! - No storage or parse failure ever crosses this boundary upward.
//! - Every save is a full-collection overwrite of the fixed key.

pub mod item_repo;
