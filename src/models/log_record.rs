use super::status::AttendanceStatus;
use serde::{Deserialize, Serialize};

/// One persisted row of the attendance log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "CourseName")]
    pub course_name: String,
    #[serde(rename = "CourseCode")]
    pub course_code: String,
    #[serde(rename = "Lecturer")]
    pub lecturer: String,
    #[serde(rename = "Duration")]
    pub duration: String,
    #[serde(rename = "Index")]
    pub student_index: String,
    #[serde(rename = "Name")]
    pub student_name: String,
    #[serde(rename = "Status")]
    pub status: AttendanceStatus,
}

/// Header row of the attendance log file
pub const LOG_HEADERS: [&str; 9] = [
    "Date",
    "Time",
    "CourseName",
    "CourseCode",
    "Lecturer",
    "Duration",
    "Index",
    "Name",
    "Status",
];
