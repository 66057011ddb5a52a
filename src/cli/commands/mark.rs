use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{AttendanceLog, SessionRecorder};
use crate::db::log::record;
use crate::errors::{AppError, AppResult};
use crate::models::session_meta::SessionMetadata;
use crate::models::status::{AttendanceEntry, AttendanceStatus, Mark};
use crate::ui::messages::{ask_confirmation, header, info, prompt_line, success, warning};
use crate::utils::date;

use super::open_roster;

/// Prompt P/A for every student in the (optionally filtered) view.
/// Enter skips a student, Q or end of input stops the pass.
fn mark_interactively(session: &mut SessionRecorder, search: Option<&str>) -> AppResult<()> {
    let view = session.filter(search.unwrap_or(""));
    if view.is_empty() {
        warning(format!("No student matches '{}'.", search.unwrap_or("")));
        return Ok(());
    }

    info("Type P for Present, A for Absent, Enter to skip, Q to stop.");

    'students: for (student, _) in view {
        loop {
            let answer = match prompt_line(&format!("{} - {}: ", student.index, student.name)) {
                Some(a) => a,
                None => break 'students,
            };

            if answer.is_empty() {
                continue 'students;
            }
            if answer.eq_ignore_ascii_case("q") {
                break 'students;
            }

            match Mark::from_code(&answer) {
                Some(m) => {
                    session.mark(&student.index, m)?;
                    continue 'students;
                }
                None => warning("Invalid input. Please enter P, A, Enter or Q."),
            }
        }
    }

    Ok(())
}

fn tally(entries: &[AttendanceEntry]) -> (usize, usize, usize) {
    entries
        .iter()
        .fold((0, 0, 0), |(p, a, u), e| match e.status {
            AttendanceStatus::Present => (p + 1, a, u),
            AttendanceStatus::Absent => (p, a + 1, u),
            AttendanceStatus::Unmarked => (p, a, u + 1),
        })
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mark {
        course_name,
        course_code,
        lecturer,
        duration,
        date: date_arg,
        time: time_arg,
        present,
        absent,
        search,
        force,
    } = cmd
    {
        //
        // 1. Session metadata (validated before any prompt)
        //
        let mut meta = SessionMetadata::now(course_name, course_code)
            .with_lecturer(lecturer.clone())
            .with_duration(duration.clone());

        if let Some(d) = date_arg {
            meta.date = date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
        }
        if let Some(t) = time_arg {
            meta.time = date::parse_time(t).ok_or_else(|| AppError::InvalidTime(t.clone()))?;
        }
        meta.validate()?;

        //
        // 2. Roster snapshot
        //
        let roster = open_roster(cfg)?;
        if roster.is_empty() {
            return Err(AppError::Validation(
                "no students registered, add students first".into(),
            ));
        }

        let mut session = SessionRecorder::new();
        session.initialize(roster.list());

        header(format!(
            "{} - {}",
            meta.course_name.to_uppercase(),
            meta.course_code.to_uppercase()
        ));

        //
        // 3. Marks
        //
        if present.is_empty() && absent.is_empty() {
            mark_interactively(&mut session, search.as_deref())?;
        } else {
            for idx in present {
                session.mark(idx, Mark::Present)?;
            }
            for idx in absent {
                session.mark(idx, Mark::Absent)?;
            }
        }

        //
        // 4. Unmarked students are a warning, not an error
        //
        let unmarked = session.unmarked_indices();
        if !unmarked.is_empty() {
            warning(format!(
                "{} student(s) not marked: {}",
                unmarked.len(),
                unmarked.iter().cloned().collect::<Vec<_>>().join(", ")
            ));

            if !*force && !ask_confirmation("Save anyway? They will be recorded as 'Unmarked'.") {
                info("Attendance not saved.");
                return Ok(());
            }
        }

        //
        // 5. Append to the log
        //
        let entries = session.finalize();
        let attendance = AttendanceLog::new(&cfg.attendance_log);
        let written = attendance.append(&meta, &entries, |idx| {
            roster.find(idx).map(|s| s.name.clone())
        })?;

        let (p, a, u) = tally(&entries);
        success(format!(
            "Attendance saved to {}: {} rows ({} present, {} absent, {} unmarked).",
            attendance.path().display(),
            written,
            p,
            a,
            u
        ));

        record(
            &cfg.database,
            "mark",
            &meta.course_code,
            &format!(
                "{} {} {}: {} present, {} absent, {} unmarked",
                meta.course_name,
                date::format_date(&meta.date),
                date::format_time(&meta.time),
                p,
                a,
                u
            ),
        );
    }

    Ok(())
}
