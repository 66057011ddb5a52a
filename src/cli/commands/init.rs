use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::AttendanceLog;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode or when it already exists)
///  - the SQLite database and its migrations
///  - the roster storage
///  - the attendance log, with its header row
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    info("Initializing rattendance…");

    let conf_path = crate::config_path(cli);
    if cli.test {
        info("Test mode: configuration file not written.");
    } else if conf_path.exists() {
        info(format!("Config file : {} (kept)", conf_path.display()));
    } else {
        cfg.save_to(&conf_path)?;
        success(format!("Config file : {}", conf_path.display()));
    }

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    success(format!("Database    : {}", cfg.database));

    let storage = store::open(cfg);
    let students = storage.load()?;
    storage.save(&students)?;
    success(format!(
        "Roster      : {} ({} students)",
        storage.describe(),
        students.len()
    ));

    let attendance = AttendanceLog::new(&cfg.attendance_log);
    attendance.ensure_created()?;
    success(format!("Attendance  : {}", attendance.path().display()));

    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", cfg.database),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success("rattendance initialization completed!");
    Ok(())
}
