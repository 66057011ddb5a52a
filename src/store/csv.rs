use super::RosterStorage;
use crate::errors::AppResult;
use crate::models::student::Student;
use crate::utils::path::ensure_parent_dir;
use std::fs;
use std::path::PathBuf;

/// Headerless `index,name` file, one student per row.
pub struct CsvRosterStorage {
    path: PathBuf,
}

impl CsvRosterStorage {
    pub fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "students.csv".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl RosterStorage for CsvRosterStorage {
    fn load(&self) -> AppResult<Vec<Student>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = ::csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        let mut out: Vec<Student> = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            // rows that are not exactly `index,name` are ignored
            if rec.len() != 2 {
                continue;
            }
            let index = rec[0].trim();
            let name = rec[1].trim();
            if index.is_empty() {
                continue;
            }
            // a repeated index keeps its first position and takes the later name
            match out.iter_mut().find(|s| s.index == index) {
                Some(existing) => existing.name = name.to_string(),
                None => out.push(Student::new(index, name)),
            }
        }
        Ok(out)
    }

    fn save(&self, students: &[Student]) -> AppResult<()> {
        ensure_parent_dir(&self.path)?;

        let tmp = self.tmp_path();
        {
            let mut wtr = ::csv::WriterBuilder::new()
                .has_headers(false)
                .from_path(&tmp)?;
            for s in students {
                wtr.write_record([s.index.as_str(), s.name.as_str()])?;
            }
            wtr.flush()?;
        }

        // the previous roster stays intact until the new one is complete
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }
}
