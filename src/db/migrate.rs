use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

type MigrationFn = fn(&Connection) -> rusqlite::Result<()>;

/// Ordered list of schema migrations. Each one is applied once and recorded
/// in the `log` table as a `migration_applied` row.
const MIGRATIONS: &[(&str, &str, MigrationFn)] = &[
    (
        "20260110_0001_create_students",
        "Created students table",
        create_students_table,
    ),
    (
        "20260110_0002_students_name_index",
        "Added index on students(name)",
        create_students_name_index,
    ),
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn create_students_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS students (
            index_number TEXT PRIMARY KEY,
            name         TEXT NOT NULL
        );
        "#,
    )
}

fn create_students_name_index(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_students_name ON students(name);")
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, version: &str, message: &str, func: MigrationFn) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    func(&tx).map_err(|e| AppError::Migration(format!("{}: {}", version, e)))?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    tx.commit()?;

    success(format!("Migration applied: {} → {}", version, message));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for (version, message, func) in MIGRATIONS {
        if !is_applied(conn, version)? {
            apply(conn, version, message, *func)?;
        }
    }

    Ok(())
}
