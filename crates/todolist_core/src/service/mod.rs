//! Use-case services for the todo list core.
//!
//! # Responsibility
//! - Orchestrate validation, in-memory mutation, and persistence into the
//!   caller-facing API.
//! - Keep callers decoupled from storage details.

pub mod todo_service;
