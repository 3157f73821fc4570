pub mod analytics;
pub mod connection;
pub mod schema;
pub mod students;

use crate::error::StatsError;
use crate::filter::GradeFilter;
use crate::statistics::{GpaStatistics, GradeStatistics};
use crate::student::StudentRecord;
use parking_lot::Mutex;
use rusqlite::{Connection, Result};
use std::time::Duration;

pub use analytics::Analytics;
pub use students::StudentsRepository;

/// Owned handle to the student-records store.
///
/// Statements run one at a time through the inner mutex, so a single
/// `Arc<Database>` can be shared by any number of threads.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    pub fn new(db_path: &str) -> Result<Self> {
        Self::with_busy_timeout(db_path, connection::DEFAULT_BUSY_TIMEOUT)
    }

    pub fn with_busy_timeout(db_path: &str, busy_timeout: Duration) -> Result<Self> {
        let conn = connection::open_connection(db_path, busy_timeout)?;
        Ok(Self::from_connection(conn))
    }

    /// Wraps a connection that was opened elsewhere
    pub fn from_connection(conn: Connection) -> Self {
        Database {
            conn: Mutex::new(conn),
        }
    }

    /// Runs `f` with exclusive access to the connection
    pub fn with_conn<T>(&self, f: impl FnOnce(&mut Connection) -> T) -> T {
        let mut conn = self.conn.lock();
        f(&mut *conn)
    }

    // ===== Schema =====

    pub fn apply_migrations(&self) -> std::result::Result<(), StatsError> {
        self.with_conn(schema::apply_migrations)
    }

    // ===== Students Repository Access =====

    pub fn insert_student(&self, record: &StudentRecord) -> Result<i64> {
        self.with_conn(|conn| StudentsRepository::new(conn).insert(record))
    }

    /// Inserts every record in a single transaction
    pub fn insert_students(&self, records: &[StudentRecord]) -> Result<()> {
        self.with_conn(|conn| {
            let tx = conn.transaction()?;
            StudentsRepository::new(&tx).insert_all(records)?;
            tx.commit()
        })
    }

    pub fn count_students(&self) -> Result<i64> {
        self.with_conn(|conn| StudentsRepository::new(conn).count())
    }

    // ===== Analytics Access =====

    pub fn compute_gpa_statistics(&self) -> Result<GpaStatistics> {
        self.with_conn(|conn| Analytics::new(conn).gpa_statistics().overall())
    }

    pub fn compute_grade_statistics(&self, filter: &GradeFilter) -> Result<GradeStatistics> {
        self.with_conn(|conn| Analytics::new(conn).grade_statistics().for_filter(filter))
    }
}
