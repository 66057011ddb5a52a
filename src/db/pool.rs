//! SQLite connection wrapper (lightweight for CLI usage).
//! One DbPool per command; the connection is closed when it is dropped.

use crate::errors::AppResult;
use crate::utils::path::ensure_parent_dir;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> AppResult<Self> {
        let p = Path::new(path);
        ensure_parent_dir(p)?;
        let conn = Connection::open(p)?;
        Ok(Self { conn })
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> AppResult<T>,
    {
        func(&mut self.conn)
    }
}
