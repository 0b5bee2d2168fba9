//! Repository layer over per-list SQLite tables.
//!
//! # Responsibility
//! - Define the storage-adapter contract used by the dispatcher.
//! - Isolate SQL text and identifier quoting from command logic.
//!
//! # Invariants
//! - Table identifiers only come from validated `ListName` values.
//! - Task names, statuses and prefixes are always bound parameters.

pub mod list_repo;
