//! Domain model for lists and their tasks.
//!
//! # Responsibility
//! - Define the values materialized from storage queries.
//! - Own the list-name normalization shared by every storage access.
//!
//! # Invariants
//! - A `ListName` always holds a normalized, allow-listed identifier.
//! - Tasks have no identity beyond `(list, name)`.

pub mod list_name;
pub mod task;
