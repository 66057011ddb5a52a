use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};
use ansi_term::{Colour, Style};

const MAX_TARGET: usize = 40;

/// Colour of an operation name in the printed log
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "import" => Colour::Green,
        "del" => Colour::Red,
        "mark" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn shorten(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

/// Local date without sub-second noise; raw value kept when it is not RFC 3339.
fn display_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%FT%T%:z").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub struct LogLogic;

impl LogLogic {
    pub fn render(entries: &[LogEntry]) -> String {
        let mut table = Table::new(vec![
            Column::new("ID", 2),
            Column::new("DATE", 10),
            Column::new("OPERATION", 9),
            Column::new("TARGET", 6),
            Column::new("MESSAGE", 7),
        ]);

        for e in entries {
            let style: Style = color_for_operation(&e.operation).into();
            table.add_styled_row(vec![
                (e.id.to_string(), None),
                (display_date(&e.date), None),
                (e.operation.clone(), Some(style)),
                (shorten(&e.target, MAX_TARGET), None),
                (e.message.clone(), None),
            ]);
        }

        table.render()
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");
        print!("{}", Self::render(&entries));
        Ok(())
    }
}
