//! Core use-case services.
//!
//! # Responsibility
//! - Map recognized flags onto list/task operations.
//! - Return outcome records; rendering belongs to the caller.

pub mod dispatch;
pub mod todo_service;
