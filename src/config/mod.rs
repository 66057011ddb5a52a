use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where the roster lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RosterBackend {
    Csv,
    Sqlite,
}

/// Validation applied to student names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamePolicy {
    /// Any non-empty name
    Any,
    /// Letters and whitespace only
    Letters,
}

/// What bulk import does with an index that is already registered.
/// Single `add` always rejects duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    Overwrite,
    Reject,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_backend")]
    pub roster_backend: RosterBackend,
    #[serde(default = "default_roster_file")]
    pub roster_file: String,
    #[serde(default = "default_attendance_log")]
    pub attendance_log: String,
    #[serde(default = "default_name_policy")]
    pub name_policy: NamePolicy,
    #[serde(default = "default_import_duplicates")]
    pub import_duplicates: DuplicatePolicy,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_backend() -> RosterBackend {
    RosterBackend::Csv
}
fn default_roster_file() -> String {
    Config::config_dir()
        .join("students.csv")
        .to_string_lossy()
        .to_string()
}
fn default_attendance_log() -> String {
    Config::config_dir()
        .join("attendance.csv")
        .to_string_lossy()
        .to_string()
}
fn default_name_policy() -> NamePolicy {
    NamePolicy::Any
}
fn default_import_duplicates() -> DuplicatePolicy {
    DuplicatePolicy::Overwrite
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            roster_backend: default_backend(),
            roster_file: default_roster_file(),
            attendance_log: default_attendance_log(),
            name_policy: default_name_policy(),
            import_duplicates: default_import_duplicates(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rattendance`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rattendance")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rattendance.sqlite")
    }

    /// Load configuration from `path`, or return defaults if the file does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.expand_paths();
        Ok(cfg)
    }

    fn expand_paths(&mut self) {
        self.database = expand_tilde(&self.database).to_string_lossy().to_string();
        self.roster_file = expand_tilde(&self.roster_file)
            .to_string_lossy()
            .to_string();
        self.attendance_log = expand_tilde(&self.attendance_log)
            .to_string_lossy()
            .to_string();
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the configuration file (creating its directory).
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = self.to_yaml()?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }
}
