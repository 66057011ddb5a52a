mod common;
use common::{csv_roster, csv_roster_with, path_str, setup_test_dir};
use rattendance::config::{DuplicatePolicy, NamePolicy};
use rattendance::core::{RosterStore, SessionRecorder};
use rattendance::errors::{AppError, AppResult};
use rattendance::models::student::Student;
use rattendance::store::{RosterStorage, SqliteRosterStorage};
use std::fs;
use std::io;

#[test]
fn test_add_then_find_returns_same_pair() {
    let dir = setup_test_dir("add_find");
    let mut roster = csv_roster(&dir);

    roster.add("001", "Ama Mensah").unwrap();
    roster.add("002", "Kwame Boateng").unwrap();

    assert_eq!(roster.find("001"), Some(&Student::new("001", "Ama Mensah")));
    assert_eq!(
        roster.find("002"),
        Some(&Student::new("002", "Kwame Boateng"))
    );
    assert_eq!(roster.find("003"), None);
}

#[test]
fn test_add_trims_fields() {
    let dir = setup_test_dir("add_trim");
    let mut roster = csv_roster(&dir);

    roster.add("  001 ", "  Ama  ").unwrap();
    assert_eq!(roster.find("001").unwrap().name, "Ama");
}

#[test]
fn test_duplicate_add_leaves_roster_unchanged() {
    let dir = setup_test_dir("dup_add");
    let mut roster = csv_roster(&dir);
    roster.add("001", "Ama").unwrap();
    roster.add("002", "Kwame").unwrap();
    let before = roster.list().to_vec();

    let err = roster.add("001", "Someone Else").unwrap_err();
    assert!(matches!(err, AppError::DuplicateIndex(ref i) if i == "001"));
    assert_eq!(roster.list(), before.as_slice());

    // nothing reached the file either
    let reloaded = csv_roster(&dir);
    assert_eq!(reloaded.list(), before.as_slice());
}

#[test]
fn test_add_rejects_empty_fields() {
    let dir = setup_test_dir("empty_fields");
    let mut roster = csv_roster(&dir);

    assert!(matches!(
        roster.add("", "Ama"),
        Err(AppError::EmptyField("index"))
    ));
    assert!(matches!(
        roster.add("001", "   "),
        Err(AppError::EmptyField("name"))
    ));
    assert!(roster.is_empty());
}

#[test]
fn test_letters_policy_rejects_digits_and_symbols() {
    let dir = setup_test_dir("letters_policy");
    let mut roster = csv_roster_with(&dir, NamePolicy::Letters, DuplicatePolicy::Overwrite);

    roster.add("001", "Ama Mensah").unwrap();
    roster.add("002", "Kofi Ánánsé").unwrap();
    assert!(matches!(
        roster.add("003", "R2D2"),
        Err(AppError::InvalidName(_))
    ));
    assert!(matches!(
        roster.add("004", "Ama-Mensah"),
        Err(AppError::InvalidName(_))
    ));
    assert_eq!(roster.len(), 2);
}

#[test]
fn test_any_policy_accepts_free_text() {
    let dir = setup_test_dir("any_policy");
    let mut roster = csv_roster(&dir);

    roster.add("001", "O'Neil, Jr. 3rd").unwrap();
    assert_eq!(roster.find("001").unwrap().name, "O'Neil, Jr. 3rd");

    // names containing commas survive the csv round trip
    let reloaded = csv_roster(&dir);
    assert_eq!(reloaded.find("001").unwrap().name, "O'Neil, Jr. 3rd");
}

#[test]
fn test_remove_persists_and_missing_index_fails() {
    let dir = setup_test_dir("remove");
    let mut roster = csv_roster(&dir);
    roster.add("001", "Ama").unwrap();
    roster.add("002", "Kwame").unwrap();

    let removed = roster.remove("001").unwrap();
    assert_eq!(removed, Student::new("001", "Ama"));
    assert!(matches!(roster.remove("001"), Err(AppError::NotFound(_))));

    let reloaded = csv_roster(&dir);
    assert_eq!(reloaded.list(), &[Student::new("002", "Kwame")]);
}

#[test]
fn test_list_keeps_insertion_order_across_reload() {
    let dir = setup_test_dir("order");
    let mut roster = csv_roster(&dir);
    for (i, n) in [("B7", "Yaw"), ("A1", "Esi"), ("C3", "Kojo")] {
        roster.add(i, n).unwrap();
    }

    let reloaded = csv_roster(&dir);
    let indexes: Vec<&str> = reloaded.list().iter().map(|s| s.index.as_str()).collect();
    assert_eq!(indexes, vec!["B7", "A1", "C3"]);
}

#[test]
fn test_csv_load_skips_malformed_rows() {
    let dir = setup_test_dir("csv_malformed");
    fs::write(
        dir.join("students.csv"),
        "001,Ama\nbroken line\n002,Kwame,extra\n003,Kojo\n",
    )
    .unwrap();

    let roster = csv_roster(&dir);
    let indexes: Vec<&str> = roster.list().iter().map(|s| s.index.as_str()).collect();
    assert_eq!(indexes, vec!["001", "003"]);
}

#[test]
fn test_csv_load_keeps_one_row_per_index() {
    let dir = setup_test_dir("csv_repeated_index");
    fs::write(dir.join("students.csv"), "S1,Ama\nS2,Kwame\nS1,Ama B\n").unwrap();

    let roster = csv_roster(&dir);
    assert_eq!(
        roster.list(),
        &[Student::new("S1", "Ama B"), Student::new("S2", "Kwame")]
    );

    let mut session = SessionRecorder::new();
    session.initialize(roster.list());
    assert_eq!(session.len(), 2);
}

#[test]
fn test_import_bulk_overwrites_duplicates_and_adds_new() {
    let dir = setup_test_dir("import_overwrite");
    let mut roster = csv_roster(&dir);
    roster.add("001", "Ama").unwrap();
    roster.add("002", "Kwame").unwrap();

    let report = roster
        .import_bulk(vec![
            ("001", "Ama Mensah"),
            ("003", "Kojo"),
            ("", "No Index"),
            ("004", "Esi"),
        ])
        .unwrap();

    // rejected rows are not counted
    assert_eq!(report.applied, 3);
    assert_eq!(report.added, 2);
    assert_eq!(report.overwritten, 1);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].0, 3);

    assert_eq!(roster.len(), 4);
    assert_eq!(roster.find("001").unwrap().name, "Ama Mensah");

    let reloaded = csv_roster(&dir);
    assert_eq!(reloaded.len(), 4);
    assert_eq!(reloaded.find("004").unwrap().name, "Esi");
}

#[test]
fn test_import_bulk_reject_policy_keeps_existing_names() {
    let dir = setup_test_dir("import_reject");
    let mut roster = csv_roster_with(&dir, NamePolicy::Any, DuplicatePolicy::Reject);
    roster.add("001", "Ama").unwrap();

    let report = roster
        .import_bulk(vec![("001", "Other"), ("002", "Kwame")])
        .unwrap();

    assert_eq!(report.applied, 1);
    assert_eq!(report.added, 1);
    assert_eq!(report.overwritten, 0);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(roster.find("001").unwrap().name, "Ama");
}

#[test]
fn test_import_bulk_later_row_wins_within_batch() {
    let dir = setup_test_dir("import_batch_dup");
    let mut roster = csv_roster(&dir);

    let report = roster
        .import_bulk(vec![("001", "First"), ("001", "Second")])
        .unwrap();

    assert_eq!(report.added, 1);
    assert_eq!(report.overwritten, 1);
    assert_eq!(roster.len(), 1);
    assert_eq!(roster.find("001").unwrap().name, "Second");
}

#[test]
fn test_sqlite_backend_is_interchangeable() {
    let dir = setup_test_dir("sqlite_backend");
    let db = path_str(&dir, "roster.sqlite");

    {
        let storage = SqliteRosterStorage::new(&db);
        let mut roster =
            RosterStore::open(Box::new(storage), NamePolicy::Any, DuplicatePolicy::Overwrite)
                .unwrap();
        roster.add("S2", "Kwame").unwrap();
        roster.add("S1", "Ama").unwrap();
        assert!(matches!(
            roster.add("S1", "Again"),
            Err(AppError::DuplicateIndex(_))
        ));
        roster.remove("S2").unwrap();
        roster.add("S3", "Kojo").unwrap();
    }

    let storage = SqliteRosterStorage::new(&db);
    let loaded = storage.load().unwrap();
    assert_eq!(
        loaded,
        vec![Student::new("S1", "Ama"), Student::new("S3", "Kojo")]
    );
}

/// Loads a fixed roster and refuses every save.
struct ReadOnlyStorage {
    students: Vec<Student>,
}

impl RosterStorage for ReadOnlyStorage {
    fn load(&self) -> AppResult<Vec<Student>> {
        Ok(self.students.clone())
    }

    fn save(&self, _students: &[Student]) -> AppResult<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only roster").into())
    }

    fn describe(&self) -> String {
        "read-only".to_string()
    }
}

#[test]
fn test_failed_save_leaves_roster_unchanged() {
    let storage = ReadOnlyStorage {
        students: vec![Student::new("S1", "Ama"), Student::new("S2", "Kwame")],
    };
    let mut roster =
        RosterStore::open(Box::new(storage), NamePolicy::Any, DuplicatePolicy::Overwrite)
            .unwrap();
    let before = roster.list().to_vec();

    let err = roster.add("S3", "Kojo").unwrap_err();
    assert!(err.is_storage());
    assert_eq!(roster.list(), before.as_slice());

    let err = roster.remove("S1").unwrap_err();
    assert!(err.is_storage());
    assert_eq!(roster.list(), before.as_slice());

    let err = roster
        .import_bulk(vec![("S1", "Ama Mensah"), ("S4", "Esi")])
        .unwrap_err();
    assert!(err.is_storage());
    assert_eq!(roster.list(), before.as_slice());
    assert_eq!(roster.find("S1").unwrap().name, "Ama");
}
