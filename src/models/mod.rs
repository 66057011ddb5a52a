pub mod log_record;
pub mod session_meta;
pub mod status;
pub mod student;
pub mod summary;
