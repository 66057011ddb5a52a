use crate::config::{DuplicatePolicy, NamePolicy};
use crate::errors::{AppError, AppResult};
use crate::models::student::Student;
use crate::store::RosterStorage;
use regex::Regex;
use std::sync::LazyLock;

static LETTERS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\s]+$").expect("valid name pattern"));

/// Outcome of a bulk import.
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Rows written to the roster (`added + overwritten`)
    pub applied: usize,
    pub added: usize,
    pub overwritten: usize,
    /// Rejected rows, as (1-based row number, reason)
    pub rejected: Vec<(usize, String)>,
}

/// The registered students, persisted through a `RosterStorage` on every change.
pub struct RosterStore {
    storage: Box<dyn RosterStorage>,
    students: Vec<Student>,
    name_policy: NamePolicy,
    import_duplicates: DuplicatePolicy,
}

impl RosterStore {
    /// Load the roster from `storage`.
    pub fn open(
        storage: Box<dyn RosterStorage>,
        name_policy: NamePolicy,
        import_duplicates: DuplicatePolicy,
    ) -> AppResult<Self> {
        let students = storage.load()?;
        Ok(Self {
            storage,
            students,
            name_policy,
            import_duplicates,
        })
    }

    pub fn list(&self) -> &[Student] {
        &self.students
    }

    pub fn find(&self, index: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.index == index.trim())
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn storage_location(&self) -> String {
        self.storage.describe()
    }

    /// Register a new student. Duplicated indexes are always rejected.
    pub fn add(&mut self, index: &str, name: &str) -> AppResult<()> {
        let student = self.validate(index, name)?;

        if self.find(&student.index).is_some() {
            return Err(AppError::DuplicateIndex(student.index));
        }

        let mut next = self.students.clone();
        next.push(student);
        self.commit(next)
    }

    /// Delete a student and return it.
    pub fn remove(&mut self, index: &str) -> AppResult<Student> {
        let index = index.trim();
        let pos = self
            .students
            .iter()
            .position(|s| s.index == index)
            .ok_or_else(|| AppError::NotFound(index.to_string()))?;

        let mut next = self.students.clone();
        let removed = next.remove(pos);
        self.commit(next)?;
        Ok(removed)
    }

    /// Import many `(index, name)` rows at once.
    ///
    /// Every row is validated like `add`; invalid rows are skipped and reported.
    /// Indexes already present are overwritten or rejected according to the
    /// configured `DuplicatePolicy`. The roster is written once at the end,
    /// and only if at least one row was applied.
    pub fn import_bulk<I, S1, S2>(&mut self, rows: I) -> AppResult<ImportReport>
    where
        I: IntoIterator<Item = (S1, S2)>,
        S1: AsRef<str>,
        S2: AsRef<str>,
    {
        let mut report = ImportReport::default();
        let mut next = self.students.clone();

        for (n, (index, name)) in rows.into_iter().enumerate() {
            let row_no = n + 1;

            let student = match self.validate(index.as_ref(), name.as_ref()) {
                Ok(s) => s,
                Err(e) => {
                    report.rejected.push((row_no, e.to_string()));
                    continue;
                }
            };

            match next.iter_mut().find(|s| s.index == student.index) {
                Some(existing) => match self.import_duplicates {
                    DuplicatePolicy::Overwrite => {
                        existing.name = student.name;
                        report.overwritten += 1;
                    }
                    DuplicatePolicy::Reject => {
                        report.rejected.push((
                            row_no,
                            AppError::DuplicateIndex(student.index).to_string(),
                        ));
                        continue;
                    }
                },
                None => {
                    next.push(student);
                    report.added += 1;
                }
            }
            report.applied += 1;
        }

        if report.applied > 0 {
            self.commit(next)?;
        }
        Ok(report)
    }

    fn validate(&self, index: &str, name: &str) -> AppResult<Student> {
        let index = index.trim();
        let name = name.trim();

        if index.is_empty() {
            return Err(AppError::EmptyField("index"));
        }
        if name.is_empty() {
            return Err(AppError::EmptyField("name"));
        }
        if self.name_policy == NamePolicy::Letters && !LETTERS_ONLY.is_match(name) {
            return Err(AppError::InvalidName(name.to_string()));
        }

        Ok(Student::new(index, name))
    }

    /// Persist `next` and only then make it the current roster.
    fn commit(&mut self, next: Vec<Student>) -> AppResult<()> {
        self.storage.save(&next)?;
        self.students = next;
        Ok(())
    }
}
