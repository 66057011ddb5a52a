use crate::errors::{AppError, AppResult};
use crate::models::status::{AttendanceEntry, AttendanceStatus, Mark};
use crate::models::student::Student;
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Collecting,
    Finalized,
}

/// Marks collected for one session, keyed by student index.
///
/// The recorder keeps its own snapshot of the roster taken at `initialize`;
/// later roster changes only show up after the next `initialize`.
#[derive(Debug)]
pub struct SessionRecorder {
    state: SessionState,
    roster: Vec<Student>,
    marks: HashMap<String, AttendanceStatus>,
}

impl Default for SessionRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRecorder {
    pub fn new() -> Self {
        Self {
            state: SessionState::Collecting,
            roster: Vec::new(),
            marks: HashMap::new(),
        }
    }

    /// Start a new marking pass: one Unmarked entry per student, nothing carried over.
    pub fn initialize(&mut self, roster: &[Student]) {
        self.state = SessionState::Collecting;
        self.roster = roster.to_vec();
        self.marks = roster
            .iter()
            .map(|s| (s.index.clone(), AttendanceStatus::Unmarked))
            .collect();
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    pub fn status(&self, index: &str) -> Option<AttendanceStatus> {
        self.marks.get(index).copied()
    }

    pub fn mark(&mut self, index: &str, mark: Mark) -> AppResult<()> {
        if self.state == SessionState::Finalized {
            return Err(AppError::SessionFinalized);
        }

        let slot = self
            .marks
            .get_mut(index.trim())
            .ok_or_else(|| AppError::UnknownIndex(index.trim().to_string()))?;
        *slot = mark.into();
        Ok(())
    }

    pub fn unmarked_indices(&self) -> BTreeSet<String> {
        self.marks
            .iter()
            .filter(|(_, st)| st.is_unmarked())
            .map(|(idx, _)| idx.clone())
            .collect()
    }

    /// Current entries in roster order.
    pub fn entries(&self) -> Vec<AttendanceEntry> {
        self.roster
            .iter()
            .map(|s| AttendanceEntry {
                student_index: s.index.clone(),
                status: self
                    .marks
                    .get(&s.index)
                    .copied()
                    .unwrap_or(AttendanceStatus::Unmarked),
            })
            .collect()
    }

    /// Close the session. Entries never marked stay `Unmarked`.
    pub fn finalize(&mut self) -> Vec<AttendanceEntry> {
        self.state = SessionState::Finalized;
        self.entries()
    }

    /// Students matching `query` (index or name, case-insensitive) with their
    /// current status. Read-only: marks of hidden students are untouched.
    pub fn filter(&self, query: &str) -> Vec<(Student, AttendanceStatus)> {
        self.roster
            .iter()
            .filter(|s| s.matches(query))
            .map(|s| {
                let st = self
                    .marks
                    .get(&s.index)
                    .copied()
                    .unwrap_or(AttendanceStatus::Unmarked);
                (s.clone(), st)
            })
            .collect()
    }
}
