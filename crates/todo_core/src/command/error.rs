//! Command-level error taxonomy.
//!
//! Every variant is terminal for the invocation and is reported exactly once
//! at the CLI boundary.

use crate::model::list_name::ListNameError;
use crate::repo::list_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CommandResult<T> = Result<T, CommandError>;

/// Exit status for usage-class failures.
pub const EXIT_USAGE: u8 = 2;
/// Exit status for domain and storage failures.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug)]
pub enum CommandError {
    /// No arguments (or no options) supplied.
    Usage,
    /// Option outside the recognized short/long set.
    InvalidOption(String),
    /// More positional arguments than the global ceiling.
    TooManyArguments { given: usize, max: usize },
    /// A positional argument the operation needs is missing.
    InsufficientArguments,
    /// An operation that needs target names received none.
    BlankArgument,
    ListNotFound(String),
    ListAlreadyExists(String),
    /// A task argument equals an existing list name.
    NameCollision(String),
    InvalidListName(ListNameError),
    Repo(RepoError),
    /// Confirmation prompt could not be read.
    Prompt(String),
}

impl CommandError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage
            | Self::InvalidOption(_)
            | Self::TooManyArguments { .. }
            | Self::InsufficientArguments
            | Self::BlankArgument
            | Self::InvalidListName(_) => EXIT_USAGE,
            Self::ListNotFound(_)
            | Self::ListAlreadyExists(_)
            | Self::NameCollision(_)
            | Self::Repo(_)
            | Self::Prompt(_) => EXIT_FAILURE,
        }
    }

    /// Stable snake_case code for log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usage => "usage",
            Self::InvalidOption(_) => "invalid_option",
            Self::TooManyArguments { .. } => "too_many_arguments",
            Self::InsufficientArguments => "insufficient_arguments",
            Self::BlankArgument => "blank_argument",
            Self::ListNotFound(_) => "list_not_found",
            Self::ListAlreadyExists(_) => "list_already_exists",
            Self::NameCollision(_) => "name_collision",
            Self::InvalidListName(_) => "invalid_list_name",
            Self::Repo(_) => "storage",
            Self::Prompt(_) => "prompt",
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage => write!(
                f,
                "Usage: todo [OPTION]... [LIST]... [TASK]...\nUse -h or --help for more details"
            ),
            Self::InvalidOption(name) => write!(
                f,
                "invalid option: `{name}`: Use -h or --help for more details."
            ),
            Self::TooManyArguments { given, max } => write!(
                f,
                "invalid usage: number of arguments exceeded limit ({given} given, at most {max})."
            ),
            Self::InsufficientArguments => write!(
                f,
                "invalid usage: incorrect number of arguments specified."
            ),
            Self::BlankArgument => {
                write!(f, "invalid usage: a non-blank list or task name is required.")
            }
            Self::ListNotFound(name) => {
                write!(f, "invalid list: specified list `{name}` not found.")
            }
            Self::ListAlreadyExists(name) => {
                write!(f, "invalid list: list `{name}` already exists.")
            }
            Self::NameCollision(name) => write!(
                f,
                "invalid arguments: `{name}` is a list name and cannot be a task"
            ),
            Self::InvalidListName(err) => write!(f, "invalid name: {err}"),
            Self::Repo(err) => write!(f, "storage error: {err}"),
            Self::Prompt(message) => write!(f, "confirmation failed: {message}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidListName(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for CommandError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::ListNotFound(name) => Self::ListNotFound(name.display()),
            RepoError::ListAlreadyExists(name) => Self::ListAlreadyExists(name.display()),
            RepoError::Validation(_) => Self::BlankArgument,
            other => Self::Repo(other),
        }
    }
}

impl From<ListNameError> for CommandError {
    fn from(value: ListNameError) -> Self {
        match value {
            ListNameError::Blank => Self::BlankArgument,
            other => Self::InvalidListName(other),
        }
    }
}
