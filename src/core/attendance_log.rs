use crate::errors::AppResult;
use crate::models::log_record::{LOG_HEADERS, LogRecord};
use crate::models::session_meta::SessionMetadata;
use crate::models::status::AttendanceEntry;
use crate::models::summary::{StudentSummary, Summary};
use crate::utils::date::{format_date, format_time};
use crate::utils::path::ensure_parent_dir;
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Name written for entries whose index is no longer in the roster.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Append-only CSV log of finalized sessions.
pub struct AttendanceLog {
    path: PathBuf,
}

impl AttendanceLog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn needs_header(&self) -> bool {
        fs::metadata(&self.path)
            .map(|m| m.len() == 0)
            .unwrap_or(true)
    }

    /// False when the last row was left without its line terminator.
    fn ends_with_newline(&self) -> AppResult<bool> {
        let mut file = File::open(&self.path)?;
        file.seek(SeekFrom::End(-1))?;
        let mut last = [0u8; 1];
        file.read_exact(&mut last)?;
        Ok(last[0] == b'\n')
    }

    /// Create the log with only its header row when it is missing or empty.
    pub fn ensure_created(&self) -> AppResult<bool> {
        if !self.needs_header() {
            return Ok(false);
        }

        ensure_parent_dir(&self.path)?;
        let mut wtr = csv::Writer::from_path(&self.path)?;
        wtr.write_record(LOG_HEADERS)?;
        wtr.flush()?;
        Ok(true)
    }

    /// Append one row per entry and return how many rows were written.
    ///
    /// Rows (and the header, for a new file) are serialized in memory first and
    /// committed with a single write, so a failure never leaves half a row behind.
    pub fn append<F>(
        &self,
        meta: &SessionMetadata,
        entries: &[AttendanceEntry],
        lookup: F,
    ) -> AppResult<usize>
    where
        F: Fn(&str) -> Option<String>,
    {
        meta.validate()?;

        let date = format_date(&meta.date);
        let time = format_time(&meta.time);
        let lecturer = meta.lecturer.clone().unwrap_or_default();
        let duration = meta.duration.clone().unwrap_or_default();

        let new_file = self.needs_header();

        // never glue the first new row onto an unterminated last line
        let mut prefix = Vec::new();
        if !new_file && !self.ends_with_newline()? {
            prefix.push(b'\n');
        }

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(prefix);

        if new_file {
            wtr.write_record(LOG_HEADERS)?;
        }

        for e in entries {
            let rec = LogRecord {
                date: date.clone(),
                time: time.clone(),
                course_name: meta.course_name.trim().to_string(),
                course_code: meta.course_code.trim().to_string(),
                lecturer: lecturer.clone(),
                duration: duration.clone(),
                student_index: e.student_index.clone(),
                student_name: lookup(&e.student_index).unwrap_or_else(|| UNKNOWN_NAME.to_string()),
                status: e.status,
            };
            wtr.serialize(rec)?;
        }

        let buf = wtr.into_inner().map_err(|e| e.into_error())?;

        ensure_parent_dir(&self.path)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&buf)?;
        file.sync_all()?;

        Ok(entries.len())
    }

    /// All parseable rows, in file order. A missing log reads as empty.
    pub fn records(&self) -> AppResult<Vec<LogRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)?;

        // malformed rows are skipped, they must not hide the rest of the history
        Ok(rdr.deserialize::<LogRecord>().flatten().collect())
    }

    /// Presence per student over the whole log, in order of first appearance.
    pub fn summarize(&self) -> AppResult<Summary> {
        Ok(summarize_records(&self.records()?))
    }
}

/// Group records by index; every row counts toward the total, only
/// `Present` rows count as attended.
pub fn summarize_records(records: &[LogRecord]) -> Summary {
    let mut students: Vec<StudentSummary> = Vec::new();
    let mut pos: HashMap<&str, usize> = HashMap::new();

    for r in records {
        let i = *pos.entry(r.student_index.as_str()).or_insert_with(|| {
            students.push(StudentSummary::new(&r.student_index, &r.student_name));
            students.len() - 1
        });

        let s = &mut students[i];
        s.total += 1;
        if r.status.is_present() {
            s.present += 1;
        }
    }

    for s in &mut students {
        s.recompute();
    }

    Summary { students }
}
