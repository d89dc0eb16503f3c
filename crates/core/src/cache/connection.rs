//! Database connection management with pragma configuration.
//!
//! This module handles opening the SQLite database, applying required pragmas
//! for concurrency (WAL mode), and running migrations.

use super::migrations;
use crate::Error;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// How long a statement waits on another connection's lock before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const PRAGMAS: &str = "PRAGMA journal_mode=WAL;
     PRAGMA synchronous=NORMAL;
     PRAGMA temp_store=MEMORY;";

/// Apply the busy timeout, then pragmas, then migrations.
///
/// The timeout goes first so the WAL switch and schema setup wait out
/// other handles opening the same file.
fn prepare(mut conn: Connection) -> Result<Connection, Error> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    conn.execute_batch(PRAGMAS)?;
    migrations::run(&mut conn)?;
    Ok(conn)
}

/// Cache database handle.
///
/// The connection is guarded by a mutex so the handle can be shared between
/// threads; other processes coordinate through SQLite's own file locking.
#[derive(Debug)]
pub struct CacheDb {
    conn: Mutex<Connection>,
}

impl CacheDb {
    /// Open a database at the specified path.
    ///
    /// Creates the file if it doesn't exist, applies pragmas,
    /// and runs any pending migrations.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let conn = prepare(Connection::open(path)?)?;

        tracing::debug!(path = %path.display(), "opened response cache");
        Ok(Self { conn: Mutex::new(conn) })
    }

    /// Open an in-memory database for testing.
    pub fn open_in_memory() -> Result<Self, Error> {
        let conn = prepare(Connection::open_in_memory()?)?;

        Ok(Self { conn: Mutex::new(conn) })
    }

    /// Lock the connection, recovering from a poisoned mutex.
    ///
    /// A panic mid-statement leaves SQLite itself consistent, so the
    /// connection stays usable.
    pub(crate) fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
