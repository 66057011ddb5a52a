use rattendance::core::{SessionRecorder, SessionState};
use rattendance::errors::AppError;
use rattendance::models::status::{AttendanceEntry, AttendanceStatus, Mark};
use rattendance::models::student::Student;

fn roster() -> Vec<Student> {
    vec![
        Student::new("S1", "Ama Mensah"),
        Student::new("S2", "Kwame Boateng"),
        Student::new("S3", "Esi Owusu"),
    ]
}

#[test]
fn test_initialize_creates_one_unmarked_entry_per_student() {
    let mut session = SessionRecorder::new();
    session.initialize(&roster());

    assert_eq!(session.len(), 3);
    assert_eq!(session.state(), SessionState::Collecting);
    assert!(
        session
            .entries()
            .iter()
            .all(|e| e.status == AttendanceStatus::Unmarked)
    );
    assert_eq!(session.unmarked_indices().len(), 3);
}

#[test]
fn test_mark_unknown_index_fails_without_side_effects() {
    let mut session = SessionRecorder::new();
    session.initialize(&roster());
    session.mark("S1", Mark::Present).unwrap();
    let before = session.entries();

    let err = session.mark("S9", Mark::Absent).unwrap_err();
    assert!(matches!(err, AppError::UnknownIndex(ref i) if i == "S9"));
    assert_eq!(session.entries(), before);
}

#[test]
fn test_mark_overwrites_previous_mark() {
    let mut session = SessionRecorder::new();
    session.initialize(&roster());

    session.mark("S2", Mark::Present).unwrap();
    session.mark("S2", Mark::Absent).unwrap();
    assert_eq!(session.status("S2"), Some(AttendanceStatus::Absent));
}

#[test]
fn test_unmarked_indices_shrink_as_students_are_marked() {
    let mut session = SessionRecorder::new();
    session.initialize(&roster());
    session.mark("S1", Mark::Present).unwrap();
    session.mark("S3", Mark::Absent).unwrap();

    let unmarked: Vec<String> = session.unmarked_indices().into_iter().collect();
    assert_eq!(unmarked, vec!["S2".to_string()]);
}

#[test]
fn test_filter_without_matches_keeps_marks() {
    let mut session = SessionRecorder::new();
    session.initialize(&roster());
    session.mark("S1", Mark::Present).unwrap();
    session.mark("S2", Mark::Absent).unwrap();

    assert!(session.filter("zzz").is_empty());

    // clearing the filter shows every student with the marks intact
    let all = session.filter("");
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].1, AttendanceStatus::Present);
    assert_eq!(all[1].1, AttendanceStatus::Absent);
    assert_eq!(all[2].1, AttendanceStatus::Unmarked);
}

#[test]
fn test_filter_matches_index_or_name_case_insensitively() {
    let mut session = SessionRecorder::new();
    session.initialize(&roster());

    let by_name: Vec<String> = session
        .filter("KWAME")
        .into_iter()
        .map(|(s, _)| s.index)
        .collect();
    assert_eq!(by_name, vec!["S2".to_string()]);

    let by_index: Vec<String> = session
        .filter("s3")
        .into_iter()
        .map(|(s, _)| s.index)
        .collect();
    assert_eq!(by_index, vec!["S3".to_string()]);

    assert_eq!(session.filter("s").len(), 3);
}

#[test]
fn test_finalize_keeps_unmarked_entries() {
    let mut session = SessionRecorder::new();
    session.initialize(&roster());
    session.mark("S1", Mark::Present).unwrap();

    let entries = session.finalize();
    assert_eq!(session.state(), SessionState::Finalized);
    assert_eq!(
        entries,
        vec![
            AttendanceEntry {
                student_index: "S1".into(),
                status: AttendanceStatus::Present
            },
            AttendanceEntry {
                student_index: "S2".into(),
                status: AttendanceStatus::Unmarked
            },
            AttendanceEntry {
                student_index: "S3".into(),
                status: AttendanceStatus::Unmarked
            },
        ]
    );
}

#[test]
fn test_mark_after_finalize_is_rejected() {
    let mut session = SessionRecorder::new();
    session.initialize(&roster());
    session.finalize();

    assert!(matches!(
        session.mark("S1", Mark::Present),
        Err(AppError::SessionFinalized)
    ));
}

#[test]
fn test_initialize_discards_previous_session() {
    let mut session = SessionRecorder::new();
    session.initialize(&roster());
    session.mark("S1", Mark::Present).unwrap();
    session.finalize();

    let smaller = vec![Student::new("S1", "Ama Mensah"), Student::new("S4", "Yaw")];
    session.initialize(&smaller);

    assert_eq!(session.state(), SessionState::Collecting);
    assert_eq!(session.len(), 2);
    assert_eq!(session.status("S1"), Some(AttendanceStatus::Unmarked));
    assert_eq!(session.status("S2"), None);
    assert!(matches!(
        session.mark("S2", Mark::Present),
        Err(AppError::UnknownIndex(_))
    ));
}

#[test]
fn test_mark_codes_from_prompt_input() {
    assert_eq!(Mark::from_code("p"), Some(Mark::Present));
    assert_eq!(Mark::from_code(" A "), Some(Mark::Absent));
    assert_eq!(Mark::from_code("x"), None);
}
