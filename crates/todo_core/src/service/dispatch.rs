//! Flag-to-operation dispatcher.
//!
//! # Responsibility
//! - Run each flag of an [`Invocation`] in order, and each positional in
//!   order within a flag.
//! - Collect one [`Outcome`] per completed step for the presentation layer.
//!
//! # Invariants
//! - The first error stops the dispatch; later items and flags never run.
//! - Outcomes completed before an error are handed back with it.
//! - A declined delete is an outcome, not an error.

use crate::command::error::CommandError;
use crate::command::flag::Flag;
use crate::command::validate::blank_check;
use crate::command::{Invocation, HELP_TEXT};
use crate::model::list_name::ListName;
use crate::model::task::Task;
use crate::repo::list_repo::ListRepository;
use crate::service::todo_service::TodoService;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::time::Instant;

/// Interactive confirmation for destructive list deletion.
pub trait ConfirmDelete {
    /// Returns `true` only when the user agreed to drop `list`.
    fn confirm_delete(&mut self, list: &str) -> io::Result<bool>;
}

/// Answers accepted as consent by [`ConfirmDelete`] implementations.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim(), "y" | "Y" | "yes")
}

/// Result of one completed dispatch step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    ListCreated(ListName),
    Lists(Vec<ListName>),
    ListDeleted(ListName),
    /// User declined; the list was left untouched.
    DeleteDeclined(String),
    TaskAdded {
        list: ListName,
        task: Task,
    },
    ListViewed {
        list: ListName,
        tasks: Vec<Task>,
    },
    TasksMarked {
        list: ListName,
        prefix: String,
        matched: usize,
    },
    TasksRemoved {
        list: ListName,
        prefix: String,
        removed: usize,
    },
    Help(&'static str),
}

/// Dispatch failure carrying the steps that completed before it.
#[derive(Debug)]
pub struct DispatchError {
    pub completed: Vec<Outcome>,
    pub error: CommandError,
}

impl Display for DispatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl Error for DispatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

/// Runs every flag of `invocation` against the service.
pub fn dispatch<R: ListRepository>(
    service: &TodoService<R>,
    invocation: &Invocation,
    confirm: &mut dyn ConfirmDelete,
) -> Result<Vec<Outcome>, DispatchError> {
    let started_at = Instant::now();
    let mut outcomes = Vec::new();

    for flag in &invocation.flags {
        info!(
            "event=dispatch_flag module=service status=start flag={} positionals={}",
            flag.long(),
            invocation.positionals.len()
        );
        if let Err(error) = run_flag(
            service,
            *flag,
            &invocation.positionals,
            confirm,
            &mut outcomes,
        ) {
            warn!(
                "event=dispatch module=service status=error flag={} duration_ms={} error_code={}",
                flag.long(),
                started_at.elapsed().as_millis(),
                error.code()
            );
            return Err(DispatchError {
                completed: outcomes,
                error,
            });
        }
    }

    info!(
        "event=dispatch module=service status=ok flags={} outcomes={} duration_ms={}",
        invocation.flags.len(),
        outcomes.len(),
        started_at.elapsed().as_millis()
    );
    Ok(outcomes)
}

fn run_flag<R: ListRepository>(
    service: &TodoService<R>,
    flag: Flag,
    positionals: &[String],
    confirm: &mut dyn ConfirmDelete,
    outcomes: &mut Vec<Outcome>,
) -> Result<(), CommandError> {
    match flag {
        Flag::NewList => {
            blank_check(positionals)?;
            for raw in positionals {
                outcomes.push(Outcome::ListCreated(service.create_list(raw)?));
            }
        }
        Flag::List => outcomes.push(Outcome::Lists(service.all_lists()?)),
        Flag::Delete => {
            blank_check(positionals)?;
            for raw in positionals {
                let agreed = confirm
                    .confirm_delete(raw)
                    .map_err(|err| CommandError::Prompt(err.to_string()))?;
                if agreed {
                    outcomes.push(Outcome::ListDeleted(service.delete_list(raw)?));
                } else {
                    info!("event=list_delete module=service status=declined");
                    outcomes.push(Outcome::DeleteDeclined(raw.clone()));
                }
            }
        }
        Flag::NewTask => {
            let targets = service.task_targets(positionals)?;
            for name in &targets.tasks {
                let task = service.add_task(&targets.list, name)?;
                outcomes.push(Outcome::TaskAdded {
                    list: targets.list.clone(),
                    task,
                });
            }
        }
        Flag::View => {
            for raw in positionals {
                let (list, tasks) = service.view_list(raw)?;
                outcomes.push(Outcome::ListViewed { list, tasks });
            }
        }
        Flag::Mark => {
            let targets = service.task_targets(positionals)?;
            for prefix in &targets.tasks {
                let matched = service.mark_tasks(&targets.list, prefix)?;
                outcomes.push(Outcome::TasksMarked {
                    list: targets.list.clone(),
                    prefix: prefix.clone(),
                    matched,
                });
            }
        }
        Flag::Remove => {
            let targets = service.task_targets(positionals)?;
            for prefix in &targets.tasks {
                let removed = service.remove_tasks(&targets.list, prefix)?;
                outcomes.push(Outcome::TasksRemoved {
                    list: targets.list.clone(),
                    prefix: prefix.clone(),
                    removed,
                });
            }
        }
        Flag::Help => outcomes.push(Outcome::Help(HELP_TEXT)),
    }

    Ok(())
}
