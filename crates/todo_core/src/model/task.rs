//! Task domain model.
//!
//! # Invariants
//! - `name` is never blank.
//! - Status is persisted as the literal strings `undone` / `done`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Completion state of one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Created and not yet marked.
    Undone,
    /// Marked as completed.
    Done,
}

impl TaskStatus {
    /// Stable value stored in the `status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Undone => "undone",
            Self::Done => "done",
        }
    }

    /// Parses a stored `status` value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "undone" => Some(Self::Undone),
            "done" => Some(Self::Done),
            _ => None,
        }
    }
}

/// Rejected task input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    BlankName,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "task name cannot be blank"),
        }
    }
}

impl Error for TaskValidationError {}

/// One row of a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub status: TaskStatus,
}

impl Task {
    /// Creates a new `undone` task.
    pub fn new(name: impl Into<String>) -> Result<Self, TaskValidationError> {
        let task = Self {
            name: name.into(),
            status: TaskStatus::Undone,
        };
        task.validate()?;
        Ok(task)
    }

    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.name.trim().is_empty() {
            return Err(TaskValidationError::BlankName);
        }
        Ok(())
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}
