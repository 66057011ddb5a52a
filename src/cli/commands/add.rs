use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::record;
use crate::errors::AppResult;
use crate::ui::messages::success;

use super::open_roster;

/// Register a single student.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { index, name } = cmd {
        let mut roster = open_roster(cfg)?;
        roster.add(index, name)?;

        success(format!(
            "Student {} - {} added ({} registered).",
            index.trim(),
            name.trim(),
            roster.len()
        ));

        record(
            &cfg.database,
            "add",
            index.trim(),
            &format!("Added student '{}'", name.trim()),
        );
    }

    Ok(())
}
