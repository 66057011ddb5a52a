use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate, NaiveTime, Timelike};

/// Course details captured once per saved session.
#[derive(Debug, Clone)]
pub struct SessionMetadata {
    pub course_name: String,
    pub course_code: String,
    pub lecturer: Option<String>,
    /// Duration in hours, digits only.
    pub duration: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl SessionMetadata {
    /// Build metadata stamped with the current local date and time (minute precision).
    pub fn now(course_name: &str, course_code: &str) -> Self {
        let now = Local::now();
        let time = now
            .time()
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or_else(|| now.time());

        Self {
            course_name: course_name.trim().to_string(),
            course_code: course_code.trim().to_string(),
            lecturer: None,
            duration: None,
            date: now.date_naive(),
            time,
        }
    }

    pub fn with_lecturer(mut self, lecturer: Option<String>) -> Self {
        self.lecturer = lecturer
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());
        self
    }

    pub fn with_duration(mut self, duration: Option<String>) -> Self {
        self.duration = duration
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        self
    }

    pub fn at(mut self, date: NaiveDate, time: NaiveTime) -> Self {
        self.date = date;
        self.time = time;
        self
    }

    /// Course name and code are mandatory; duration, when given, is a whole number of hours.
    pub fn validate(&self) -> AppResult<()> {
        if self.course_name.trim().is_empty() {
            return Err(AppError::Validation("course name is required".into()));
        }
        if self.course_code.trim().is_empty() {
            return Err(AppError::Validation("course code is required".into()));
        }
        if let Some(d) = &self.duration
            && !d.chars().all(|c| c.is_ascii_digit())
        {
            return Err(AppError::Validation(format!(
                "duration must be a number of hours, got '{}'",
                d
            )));
        }
        Ok(())
    }
}
