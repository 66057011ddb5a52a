use crate::cli::parser::{Commands, SummaryFormat};
use crate::config::Config;
use crate::core::AttendanceLog;
use crate::errors::{AppError, AppResult};
use crate::export::{export_summary, summary_rows};
use crate::models::summary::{StudentSummary, Summary};
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};
use ansi_term::{Colour, Style};
use std::io;
use std::path::Path;

fn percentage_style(p: Option<f64>) -> Option<Style> {
    match p {
        Some(v) if v >= 75.0 => Some(Colour::Green.into()),
        Some(v) if v >= 50.0 => Some(Colour::Yellow.into()),
        Some(_) => Some(Colour::Red.into()),
        None => None,
    }
}

fn format_percentage(s: &StudentSummary) -> String {
    s.percentage
        .map(|p| format!("{:.1}%", p))
        .unwrap_or_else(|| "--".to_string())
}

fn print_table(summary: &Summary) {
    let mut table = Table::new(vec![
        Column::new("INDEX", 8),
        Column::new("NAME", 20),
        Column::new("SESSIONS", 8),
        Column::new("ATTENDANCE", 10),
    ]);

    for s in summary.iter() {
        table.add_styled_row(vec![
            (s.index.clone(), None),
            (s.name.clone(), None),
            (format!("{}/{}", s.present, s.total), None),
            (format_percentage(s), percentage_style(s.percentage)),
        ]);
    }

    header("ATTENDANCE SUMMARY");
    print!("{}", table.render());
}

fn print_csv(summary: &Summary) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(io::stdout());
    for row in summary_rows(summary) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn print_json(summary: &Summary) -> AppResult<()> {
    let json = serde_json::to_string_pretty(&summary_rows(summary))
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
    println!("{}", json);
    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        format,
        file,
        force,
    } = cmd
    {
        let attendance = AttendanceLog::new(&cfg.attendance_log);
        let summary = attendance.summarize()?;

        if summary.is_empty() {
            info("No attendance records found.");
            return Ok(());
        }

        if let Some(f) = file {
            return export_summary(&summary, format.export_format(), Path::new(f), *force);
        }

        match format {
            SummaryFormat::Table => print_table(&summary),
            SummaryFormat::Csv => print_csv(&summary)?,
            SummaryFormat::Json => print_json(&summary)?,
        }
    }

    Ok(())
}
