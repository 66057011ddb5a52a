use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

use super::open_roster;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { search } = cmd {
        let roster = open_roster(cfg)?;
        let query = search.as_deref().unwrap_or("");

        let mut table = Table::new(vec![Column::new("INDEX", 8), Column::new("NAME", 20)]);
        for s in roster.list().iter().filter(|s| s.matches(query)) {
            table.add_row(vec![s.index.clone(), s.name.clone()]);
        }

        if table.is_empty() {
            if roster.is_empty() {
                info("No students registered yet.");
            } else {
                info(format!("No student matches '{}'.", query));
            }
            return Ok(());
        }

        header(format!("Students ({})", roster.storage_location()));
        print!("{}", table.render());
    }

    Ok(())
}
