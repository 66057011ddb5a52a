use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::record;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{ask_confirmation, info, success};

use super::open_roster;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { index, yes } = cmd {
        let mut roster = open_roster(cfg)?;

        let student = roster
            .find(index)
            .cloned()
            .ok_or_else(|| AppError::NotFound(index.trim().to_string()))?;

        //
        // Confirmation prompt
        //
        if !*yes
            && !ask_confirmation(&format!(
                "Delete student {} - {}? Attendance history is kept.",
                student.index, student.name
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = roster.remove(&student.index)?;
        success(format!(
            "Student {} - {} has been removed.",
            removed.index, removed.name
        ));

        record(
            &cfg.database,
            "del",
            &removed.index,
            &format!("Removed student '{}'", removed.name),
        );
    }

    Ok(())
}
