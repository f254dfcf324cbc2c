//! SQLite-backed idea repository.

use std::sync::{Mutex, MutexGuard};

use ideabox_registry::RepositoryError;
use rusqlite::Connection;

use crate::migrations::run_migrations;

/// SQLite-backed idea repository.
///
/// One connection is shared behind a mutex. Each operation holds the guard
/// for exactly one statement (three for stats) and drops it on return, so
/// SQLite's own file locking is the only cross-process coordination.
pub struct SqliteIdeaRepository {
    conn: Mutex<Connection>,
}

impl SqliteIdeaRepository {
    /// Opens or creates a SQLite database at the given path and migrates it.
    pub fn open(path: &str) -> Result<Self, RepositoryError> {
        let conn = Connection::open(path).map_err(|e| RepositoryError::Storage {
            message: e.to_string(),
        })?;
        tracing::debug!(path, "opened idea database");
        Self::from_connection(conn)
    }

    /// Opens a private in-memory database. Used by tests.
    pub fn open_in_memory() -> Result<Self, RepositoryError> {
        let conn = Connection::open_in_memory().map_err(|e| RepositoryError::Storage {
            message: e.to_string(),
        })?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, RepositoryError> {
        run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquires the connection for the duration of one operation.
    pub(crate) fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>, RepositoryError> {
        self.conn.lock().map_err(|e| RepositoryError::Storage {
            message: e.to_string(),
        })
    }
}
