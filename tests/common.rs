#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rattendance::config::{DuplicatePolicy, NamePolicy};
use rattendance::core::RosterStore;
use rattendance::store::CsvRosterStorage;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Create an empty, unique working directory inside the system temp dir
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rattendance_{}_{}", name, std::process::id()));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

pub fn path_str(dir: &PathBuf, file: &str) -> String {
    dir.join(file).to_string_lossy().to_string()
}

/// Global options pointing every file of the tool inside `dir`
pub fn env_args(dir: &PathBuf) -> Vec<String> {
    vec![
        "--config".into(),
        path_str(dir, "rattendance.conf"),
        "--db".into(),
        path_str(dir, "rattendance.sqlite"),
        "--roster".into(),
        path_str(dir, "students.csv"),
        "--log".into(),
        path_str(dir, "attendance.csv"),
    ]
}

/// Run the binary inside `dir` with extra arguments
pub fn rat_in(dir: &PathBuf, args: &[&str]) -> Command {
    let mut cmd = rat();
    cmd.args(env_args(dir)).args(args);
    cmd
}

/// CSV-backed roster with the permissive policies
pub fn csv_roster(dir: &PathBuf) -> RosterStore {
    csv_roster_with(dir, NamePolicy::Any, DuplicatePolicy::Overwrite)
}

pub fn csv_roster_with(
    dir: &PathBuf,
    name_policy: NamePolicy,
    duplicates: DuplicatePolicy,
) -> RosterStore {
    let storage = CsvRosterStorage::new(&path_str(dir, "students.csv"));
    RosterStore::open(Box::new(storage), name_policy, duplicates).expect("open roster")
}

/// Initialize the tool and register S1 Ama and S2 Kwame
pub fn init_with_students(dir: &PathBuf) {
    rat_in(dir, &["--test", "init"]).assert().success();
    rat_in(dir, &["add", "S1", "Ama"]).assert().success();
    rat_in(dir, &["add", "S2", "Kwame"]).assert().success();
}
