//! Domain model for the todo list core.
//!
//! # Responsibility
//! - Define the canonical `Item` record shared by store and persistence.
//! - Own title normalization and timestamp/id derivation rules.
//!
//! # Invariants
//! - An `Item` stored in the canonical collection never has an empty or
//!   whitespace-only title.
//! - `id` and `created_at` are fixed at creation and never change.

pub mod item;
