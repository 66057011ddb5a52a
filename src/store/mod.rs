//! Roster persistence.
//! The roster logic only sees the `RosterStorage` capability; the concrete
//! backend (flat CSV file or SQLite table) is picked from the configuration.

mod csv;
mod sqlite;

pub use self::csv::CsvRosterStorage;
pub use self::sqlite::SqliteRosterStorage;

use crate::config::{Config, RosterBackend};
use crate::errors::AppResult;
use crate::models::student::Student;

pub trait RosterStorage {
    /// Load the whole roster, in stored order.
    fn load(&self) -> AppResult<Vec<Student>>;

    /// Replace the stored roster with `students`.
    fn save(&self, students: &[Student]) -> AppResult<()>;

    /// Human readable location, used in messages.
    fn describe(&self) -> String;
}

/// Build the storage selected by `cfg.roster_backend`.
pub fn open(cfg: &Config) -> Box<dyn RosterStorage> {
    match cfg.roster_backend {
        RosterBackend::Csv => Box::new(CsvRosterStorage::new(&cfg.roster_file)),
        RosterBackend::Sqlite => Box::new(SqliteRosterStorage::new(&cfg.database)),
    }
}
