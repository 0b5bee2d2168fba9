//! Core logic for the terminal to-do list manager.
//! This crate owns argument interpretation, validation and list/task storage;
//! rendering is left to callers.

pub mod command;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use command::error::{CommandError, CommandResult};
pub use command::flag::Flag;
pub use command::validate::TaskTargets;
pub use command::{Invocation, HELP_TEXT};
pub use config::Config;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::list_name::{ListName, ListNameError};
pub use model::task::{Task, TaskStatus, TaskValidationError};
pub use repo::list_repo::{ListRepository, RepoError, RepoResult, SqliteListRepository};
pub use service::dispatch::{dispatch, is_affirmative, ConfirmDelete, DispatchError, Outcome};
pub use service::todo_service::TodoService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
