pub mod attendance_log;
pub mod backup;
pub mod log;
pub mod roster;
pub mod session;

pub use attendance_log::AttendanceLog;
pub use roster::{ImportReport, RosterStore};
pub use session::{SessionRecorder, SessionState};
