//! Command-line interpretation: classification, flag resolution, validation.
//!
//! # Responsibility
//! - Turn raw argv tokens into a validated [`Invocation`].
//! - Hold the argument rules shared by every operation.
//!
//! # Invariants
//! - Parsing never touches storage.
//! - The positional ceiling is checked before flag validity.

pub mod classify;
pub mod error;
pub mod flag;
pub mod validate;

use classify::{classify, flag_check};
use error::{CommandError, CommandResult};
use flag::Flag;
use validate::positional_count_check;

/// Usage documentation returned by the help operation.
pub const HELP_TEXT: &str = "Usage: todo [OPTION]... [LIST]... [TASK]...
A terminal TO-DO list application.

Options:
Mandatory arguments to long options are mandatory for short options too.
-N, --new-list      Creates a new list
-l, --list          List all existing lists
-d, --delete        Delete an existing list
-n, --new-task      Creates a new task in the list
-v, --view          View an existing list with tasks
-m, --mark          Mark a task as completed
-r, --remove        Remove a task from the list
-h, --help          Display this help and exit

The new-list, view and delete arguments support at most three list operations simultaneously.
The new-task, mark and remove arguments support at most two tasks in a single list at a time.
The mark and remove arguments also support input as initials of the task to be marked/removed.
";

/// One validated unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub flags: Vec<Flag>,
    pub positionals: Vec<String>,
}

impl Invocation {
    /// Parses argv tokens (program name excluded).
    ///
    /// # Errors
    /// - [`CommandError::Usage`] for no tokens or no flags.
    /// - [`CommandError::TooManyArguments`] for more than three positionals.
    /// - [`CommandError::InvalidOption`] for an unknown flag.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> CommandResult<Self> {
        let (names, positionals) = classify(tokens)?;
        positional_count_check(&positionals)?;
        let flags = flag_check(&names)?;
        if flags.is_empty() {
            return Err(CommandError::Usage);
        }

        Ok(Self { flags, positionals })
    }
}
