//! SQLite storage bootstrap and invocation-level commit.
//!
//! # Responsibility
//! - Open and configure the SQLite connection backing all lists.
//! - Hold every mutation of one invocation inside a single transaction.
//!
//! # Invariants
//! - Returned connections always have an open deferred transaction.
//! - Nothing is durable until [`commit_and_close`] succeeds; dropping the
//!   connection instead rolls the invocation back.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;

pub use open::{commit_and_close, open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// Connection closed but SQLite reported a failure while releasing it.
    Close(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Close(err) => write!(f, "failed to close database: {err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Close(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
