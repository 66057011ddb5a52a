use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a student within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Unmarked,
    Present,
    Absent,
}

impl AttendanceStatus {
    /// Convert enum → log string
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Unmarked => "Unmarked",
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, AttendanceStatus::Present)
    }

    pub fn is_unmarked(&self) -> bool {
        matches!(self, AttendanceStatus::Unmarked)
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The values a student can be marked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Present,
    Absent,
}

impl Mark {
    /// Helper: convert prompt input (P/A, case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "P" | "PRESENT" => Some(Mark::Present),
            "A" | "ABSENT" => Some(Mark::Absent),
            _ => None,
        }
    }
}

impl From<Mark> for AttendanceStatus {
    fn from(m: Mark) -> Self {
        match m {
            Mark::Present => AttendanceStatus::Present,
            Mark::Absent => AttendanceStatus::Absent,
        }
    }
}

/// One student's status at the time a session is finalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceEntry {
    pub student_index: String,
    pub status: AttendanceStatus,
}
