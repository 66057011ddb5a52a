// src/export/summary.rs

use super::fs_utils::ensure_writable;
use super::{ExportFormat, notify_export_success};
use crate::errors::{AppError, AppResult};
use crate::models::summary::Summary;
use crate::ui::messages::info;
use crate::utils::path::ensure_parent_dir;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Flat row used for CSV / JSON export of the summary.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SummaryRow {
    pub index: String,
    pub name: String,
    pub present: u32,
    pub total: u32,
    /// Percentage rounded to one decimal, empty when there are no sessions.
    pub percentage: Option<f64>,
}

pub fn summary_rows(summary: &Summary) -> Vec<SummaryRow> {
    summary
        .iter()
        .map(|s| SummaryRow {
            index: s.index.clone(),
            name: s.name.clone(),
            present: s.present,
            total: s.total,
            percentage: s.percentage.map(|p| (p * 10.0).round() / 10.0),
        })
        .collect()
}

/// Write the summary to `path` in the requested format.
pub fn export_summary(
    summary: &Summary,
    format: ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    ensure_writable(path, force)?;
    ensure_parent_dir(path)?;

    let rows = summary_rows(summary);
    match format {
        ExportFormat::Csv => export_csv(&rows, path),
        ExportFormat::Json => export_json(&rows, path),
    }
}

fn export_json(rows: &[SummaryRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// CSV export, header included through serde.
fn export_csv(rows: &[SummaryRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for item in rows {
        wtr.serialize(item)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
