//! Argument-count, blank-argument and list/task name rules.
//!
//! # Invariants
//! - Every check here runs before the mutation it guards.
//! - A task argument may never equal (after normalization) an existing
//!   list identifier.

use super::error::{CommandError, CommandResult};
use crate::model::list_name::{self, ListName};
use crate::repo::list_repo::ListRepository;

/// Global ceiling on positional arguments, independent of the flags given.
pub const MAX_POSITIONALS: usize = 3;

/// Fails when an operation that needs target names received none.
pub fn blank_check<S>(args: &[S]) -> CommandResult<()> {
    if args.is_empty() {
        return Err(CommandError::BlankArgument);
    }
    Ok(())
}

/// Enforces [`MAX_POSITIONALS`].
pub fn positional_count_check<S>(args: &[S]) -> CommandResult<()> {
    if args.len() > MAX_POSITIONALS {
        return Err(CommandError::TooManyArguments {
            given: args.len(),
            max: MAX_POSITIONALS,
        });
    }
    Ok(())
}

/// Resolves a positional to the identifier of a list that must already exist.
///
/// Names that fail identifier validation cannot exist, so they resolve to
/// `ListNotFound` rather than a name error.
pub fn existing_list<R: ListRepository>(repo: &R, raw: &str) -> CommandResult<ListName> {
    let list = match ListName::parse(raw) {
        Ok(list) => list,
        Err(list_name::ListNameError::Blank) => return Err(CommandError::BlankArgument),
        Err(_) => return Err(CommandError::ListNotFound(raw.to_string())),
    };

    if !repo.collection_exists(&list)? {
        return Err(CommandError::ListNotFound(raw.to_string()));
    }
    Ok(list)
}

/// Target of a task-level operation: one list plus task names or prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTargets {
    pub list: ListName,
    pub tasks: Vec<String>,
}

/// Splits positionals into the target list and its task arguments.
///
/// # Errors
/// - [`CommandError::InsufficientArguments`] when no list name was given.
/// - [`CommandError::ListNotFound`] when the list does not exist.
/// - [`CommandError::BlankArgument`] when no task argument follows, or one is
///   whitespace only.
/// - [`CommandError::NameCollision`] when a task argument names a list.
pub fn resolve_task_targets<R: ListRepository>(
    positionals: &[String],
    repo: &R,
) -> CommandResult<TaskTargets> {
    let (first, rest) = positionals
        .split_first()
        .ok_or(CommandError::InsufficientArguments)?;
    let list = existing_list(repo, first)?;

    blank_check(rest)?;
    if rest.iter().any(|task| task.trim().is_empty()) {
        return Err(CommandError::BlankArgument);
    }

    let existing = repo.list_collections()?;
    if let Some(task) = rest
        .iter()
        .find(|task| existing.iter().any(|name| name.as_str() == list_name::normalize(task)))
    {
        return Err(CommandError::NameCollision(task.clone()));
    }

    Ok(TaskTargets {
        list,
        tasks: rest.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::{blank_check, positional_count_check};
    use crate::command::error::CommandError;

    #[test]
    fn blank_check_rejects_empty_only() {
        let empty: [&str; 0] = [];
        assert!(matches!(blank_check(&empty), Err(CommandError::BlankArgument)));
        blank_check(&["x"]).unwrap();
    }

    #[test]
    fn positional_ceiling_is_three() {
        positional_count_check(&["a", "b", "c"]).unwrap();
        let err = positional_count_check(&["a", "b", "c", "d"]).unwrap_err();
        assert!(matches!(
            err,
            CommandError::TooManyArguments { given: 4, max: 3 }
        ));
    }
}
