pub mod aggregate;
pub mod gpa_statistics;
pub mod grade_statistics;

use rusqlite::Connection;

pub use aggregate::{AggregateQuery, AggregateRow, Column};
pub use gpa_statistics::GpaStatisticsRepository;
pub use grade_statistics::GradeStatisticsRepository;

/// Analytics facade providing the read-only statistics queries
pub struct Analytics<'a> {
    pub conn: &'a Connection,
}

impl<'a> Analytics<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Analytics { conn }
    }

    pub fn gpa_statistics(&self) -> GpaStatisticsRepository<'a> {
        GpaStatisticsRepository::new(self.conn)
    }

    pub fn grade_statistics(&self) -> GradeStatisticsRepository<'a> {
        GradeStatisticsRepository::new(self.conn)
    }
}
