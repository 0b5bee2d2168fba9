//! List repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide collection-level CRUD (one table per list).
//! - Provide task-level CRUD and prefix matching inside one list.
//!
//! # Invariants
//! - Write paths call `Task::validate()` before SQL mutations.
//! - Operations on a missing list return `ListNotFound`, never a raw
//!   "no such table" SQLite error.
//! - Prefix matching is case-sensitive and wildcard-free.

use crate::db::DbError;
use crate::model::list_name::ListName;
use crate::model::task::{Task, TaskStatus, TaskValidationError};
use log::debug;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const LIST_TABLES_SQL: &str = "SELECT name
FROM sqlite_master
WHERE type = 'table'
  AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\'
ORDER BY rowid ASC;";

const TABLE_EXISTS_SQL: &str = "SELECT EXISTS(
    SELECT 1
    FROM sqlite_master
    WHERE type = 'table' AND name = ?1
);";

const PREFIX_MATCH: &str = "substr(task, 1, length(?1)) = ?1";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for list and task persistence.
#[derive(Debug)]
pub enum RepoError {
    Validation(TaskValidationError),
    Db(DbError),
    ListNotFound(ListName),
    ListAlreadyExists(ListName),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::ListNotFound(name) => write!(f, "list not found: {}", name.display()),
            Self::ListAlreadyExists(name) => {
                write!(f, "list already exists: {}", name.display())
            }
            Self::InvalidData(message) => write!(f, "invalid persisted list data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::ListNotFound(_) => None,
            Self::ListAlreadyExists(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage adapter contract for lists and their tasks.
pub trait ListRepository {
    /// Creates the list when absent. Returns whether a table was created.
    fn ensure_collection(&self, list: &ListName) -> RepoResult<bool>;
    /// Creates the list, failing with `ListAlreadyExists` when present.
    fn create_collection(&self, list: &ListName) -> RepoResult<()>;
    fn collection_exists(&self, list: &ListName) -> RepoResult<bool>;
    /// All list identifiers in creation order.
    fn list_collections(&self) -> RepoResult<Vec<ListName>>;
    fn drop_collection(&self, list: &ListName) -> RepoResult<()>;
    fn insert(&self, list: &ListName, task: &Task) -> RepoResult<()>;
    /// All tasks of the list in insertion order.
    fn select_all(&self, list: &ListName) -> RepoResult<Vec<Task>>;
    /// Marks every task starting with `prefix` as done. Returns the match count.
    fn update_status_by_prefix(&self, list: &ListName, prefix: &str) -> RepoResult<usize>;
    /// Deletes every task starting with `prefix`. Returns the removed count.
    fn delete_by_prefix(&self, list: &ListName, prefix: &str) -> RepoResult<usize>;
}

/// SQLite-backed list repository.
pub struct SqliteListRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteListRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn require_collection(&self, list: &ListName) -> RepoResult<()> {
        if self.collection_exists(list)? {
            Ok(())
        } else {
            Err(RepoError::ListNotFound(list.clone()))
        }
    }
}

impl ListRepository for SqliteListRepository<'_> {
    fn ensure_collection(&self, list: &ListName) -> RepoResult<bool> {
        if self.collection_exists(list)? {
            return Ok(false);
        }
        self.create_collection(list)?;
        Ok(true)
    }

    fn create_collection(&self, list: &ListName) -> RepoResult<()> {
        if self.collection_exists(list)? {
            return Err(RepoError::ListAlreadyExists(list.clone()));
        }

        self.conn.execute_batch(&format!(
            "CREATE TABLE {} (
                task TEXT NOT NULL,
                status TEXT NOT NULL
            );",
            list.quoted()
        ))?;
        debug!("event=list_create module=repo status=ok list={list}");
        Ok(())
    }

    fn collection_exists(&self, list: &ListName) -> RepoResult<bool> {
        let exists: i64 = self
            .conn
            .query_row(TABLE_EXISTS_SQL, [list.as_str()], |row| row.get(0))?;
        Ok(exists == 1)
    }

    fn list_collections(&self) -> RepoResult<Vec<ListName>> {
        let mut stmt = self.conn.prepare(LIST_TABLES_SQL)?;
        let mut rows = stmt.query([])?;
        let mut lists = Vec::new();

        while let Some(row) = rows.next()? {
            let raw: String = row.get(0)?;
            let name = ListName::parse(&raw).map_err(|err| {
                RepoError::InvalidData(format!("table `{raw}` is not a valid list: {err}"))
            })?;
            lists.push(name);
        }

        Ok(lists)
    }

    fn drop_collection(&self, list: &ListName) -> RepoResult<()> {
        self.require_collection(list)?;
        self.conn
            .execute_batch(&format!("DROP TABLE {};", list.quoted()))?;
        debug!("event=list_drop module=repo status=ok list={list}");
        Ok(())
    }

    fn insert(&self, list: &ListName, task: &Task) -> RepoResult<()> {
        task.validate()?;
        self.require_collection(list)?;

        self.conn.execute(
            &format!(
                "INSERT INTO {} (task, status) VALUES (?1, ?2);",
                list.quoted()
            ),
            params![task.name.as_str(), task.status.as_str()],
        )?;
        Ok(())
    }

    fn select_all(&self, list: &ListName) -> RepoResult<Vec<Task>> {
        self.require_collection(list)?;

        let mut stmt = self.conn.prepare(&format!(
            "SELECT task, status FROM {} ORDER BY rowid ASC;",
            list.quoted()
        ))?;
        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();

        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(list, row)?);
        }

        Ok(tasks)
    }

    fn update_status_by_prefix(&self, list: &ListName, prefix: &str) -> RepoResult<usize> {
        self.require_collection(list)?;

        let changed = self.conn.execute(
            &format!(
                "UPDATE {} SET status = ?2 WHERE {PREFIX_MATCH};",
                list.quoted()
            ),
            params![prefix, TaskStatus::Done.as_str()],
        )?;
        debug!("event=task_mark module=repo status=ok list={list} matched={changed}");
        Ok(changed)
    }

    fn delete_by_prefix(&self, list: &ListName, prefix: &str) -> RepoResult<usize> {
        self.require_collection(list)?;

        let removed = self.conn.execute(
            &format!("DELETE FROM {} WHERE {PREFIX_MATCH};", list.quoted()),
            [prefix],
        )?;
        debug!("event=task_remove module=repo status=ok list={list} removed={removed}");
        Ok(removed)
    }
}

fn parse_task_row(list: &ListName, row: &Row<'_>) -> RepoResult<Task> {
    let status_text: String = row.get("status")?;
    let status = TaskStatus::parse(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid task status `{status_text}` in {list}.status"))
    })?;

    let task = Task {
        name: row.get("task")?,
        status,
    };
    task.validate()?;
    Ok(task)
}
