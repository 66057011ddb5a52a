use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::record;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use super::open_roster;

/// Read `index,name` rows; missing fields become empty strings and are
/// rejected by the roster validation.
fn read_rows(path: &str, header: bool) -> AppResult<Vec<(String, String)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(header)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        rows.push((
            rec.get(0).unwrap_or_default().to_string(),
            rec.get(1).unwrap_or_default().to_string(),
        ));
    }
    Ok(rows)
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, header } = cmd {
        let rows = read_rows(file, *header)?;
        info(format!("Importing {} rows from {}", rows.len(), file));

        let mut roster = open_roster(cfg)?;
        let report = roster.import_bulk(rows)?;

        for (row, reason) in &report.rejected {
            warning(format!("Row {} skipped: {}", row, reason));
        }

        success(format!(
            "Imported {} students ({} added, {} updated, {} rejected).",
            report.applied,
            report.added,
            report.overwritten,
            report.rejected.len()
        ));

        if report.applied > 0 {
            record(
                &cfg.database,
                "import",
                file,
                &format!(
                    "Imported {} students ({} added, {} updated)",
                    report.applied, report.added, report.overwritten
                ),
            );
        }
    }

    Ok(())
}
