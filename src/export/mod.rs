// src/export/mod.rs

mod fs_utils;
mod summary;

pub use summary::{SummaryRow, export_summary, summary_rows};

use crate::ui::messages::success;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}
