use super::RosterStorage;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::student::Student;
use rusqlite::params;

/// Single-table roster: `students(index_number TEXT PRIMARY KEY, name TEXT)`.
pub struct SqliteRosterStorage {
    db_path: String,
}

impl SqliteRosterStorage {
    pub fn new(db_path: &str) -> Self {
        Self {
            db_path: db_path.to_string(),
        }
    }

    fn open(&self) -> AppResult<DbPool> {
        let pool = DbPool::new(&self.db_path)?;
        init_db(&pool.conn)?;
        Ok(pool)
    }
}

impl RosterStorage for SqliteRosterStorage {
    fn load(&self) -> AppResult<Vec<Student>> {
        let pool = self.open()?;
        let mut stmt = pool
            .conn
            .prepare("SELECT index_number, name FROM students ORDER BY rowid ASC")?;

        let rows = stmt.query_map([], |row| {
            Ok(Student::new(
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
            ))
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn save(&self, students: &[Student]) -> AppResult<()> {
        let mut pool = self.open()?;

        pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            tx.execute("DELETE FROM students", [])?;
            {
                let mut stmt =
                    tx.prepare("INSERT INTO students (index_number, name) VALUES (?1, ?2)")?;
                for s in students {
                    stmt.execute(params![s.index, s.name])?;
                }
            }
            tx.commit()?;
            Ok(())
        })
    }

    fn describe(&self) -> String {
        format!("sqlite:{}", self.db_path)
    }
}
