use crate::student::StudentRecord;
use rusqlite::{Connection, Result, params};

/// Write-side access to the `Students` table, used to seed stores
pub struct StudentsRepository<'a> {
    conn: &'a Connection,
}

impl<'a> StudentsRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        StudentsRepository { conn }
    }

    pub fn insert(&self, record: &StudentRecord) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO Students (semester_gpa, total_score, course, specialty_code, discipline_code, language_of_study)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                record.semester_gpa,
                record.total_score,
                record.course,
                record.specialty_code,
                record.discipline_code,
                record.language_of_study
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn insert_all(&self, records: &[StudentRecord]) -> Result<()> {
        for record in records {
            self.insert(record)?;
        }
        Ok(())
    }

    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM Students", [], |row| row.get(0))?;
        Ok(count)
    }
}
