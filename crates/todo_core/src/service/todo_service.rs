//! List and task use-case service.
//!
//! # Responsibility
//! - Provide single-item list/task operations with command-level errors.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - Service layer remains storage-agnostic.

use crate::command::error::{CommandError, CommandResult};
use crate::command::validate::{existing_list, resolve_task_targets, TaskTargets};
use crate::model::list_name::ListName;
use crate::model::task::Task;
use crate::repo::list_repo::ListRepository;

/// Use-case service wrapper over a list repository.
pub struct TodoService<R: ListRepository> {
    repo: R,
}

impl<R: ListRepository> TodoService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one list.
    ///
    /// # Errors
    /// - [`CommandError::ListAlreadyExists`] when the list is present.
    /// - [`CommandError::InvalidListName`] when the name is not a safe identifier.
    pub fn create_list(&self, raw: &str) -> CommandResult<ListName> {
        let list = ListName::parse(raw)?;
        self.repo.create_collection(&list)?;
        Ok(list)
    }

    /// Lists every list in creation order.
    pub fn all_lists(&self) -> CommandResult<Vec<ListName>> {
        Ok(self.repo.list_collections()?)
    }

    /// Drops one list that must exist.
    pub fn delete_list(&self, raw: &str) -> CommandResult<ListName> {
        let list = existing_list(&self.repo, raw)?;
        self.repo.drop_collection(&list)?;
        Ok(list)
    }

    /// Resolves `[list, task...]` positionals for task-level operations.
    pub fn task_targets(&self, positionals: &[String]) -> CommandResult<TaskTargets> {
        resolve_task_targets(positionals, &self.repo)
    }

    /// Inserts one `undone` task.
    pub fn add_task(&self, list: &ListName, name: &str) -> CommandResult<Task> {
        let task = Task::new(name).map_err(|_| CommandError::BlankArgument)?;
        self.repo.insert(list, &task)?;
        Ok(task)
    }

    /// Returns the ordered tasks of one existing list.
    pub fn view_list(&self, raw: &str) -> CommandResult<(ListName, Vec<Task>)> {
        let list = existing_list(&self.repo, raw)?;
        let tasks = self.repo.select_all(&list)?;
        Ok((list, tasks))
    }

    /// Marks every task starting with `prefix` as done; zero matches is fine.
    pub fn mark_tasks(&self, list: &ListName, prefix: &str) -> CommandResult<usize> {
        Ok(self.repo.update_status_by_prefix(list, prefix)?)
    }

    /// Removes every task starting with `prefix`; zero matches is fine.
    pub fn remove_tasks(&self, list: &ListName, prefix: &str) -> CommandResult<usize> {
        Ok(self.repo.delete_by_prefix(list, prefix)?)
    }
}
