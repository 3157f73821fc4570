use super::aggregate::{AggregateQuery, Column};
use crate::statistics::GpaStatistics;
use rusqlite::Connection;
use rusqlite::Result;

pub struct GpaStatisticsRepository<'a> {
    conn: &'a Connection,
}

impl<'a> GpaStatisticsRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        GpaStatisticsRepository { conn }
    }

    /// Count, average, maximum and minimum of `semester_gpa` over all students.
    ///
    /// Students without a GPA are not counted.
    pub fn overall(&self) -> Result<GpaStatistics> {
        let row = AggregateQuery::over(Column::SemesterGpa).execute(self.conn)?;
        Ok(GpaStatistics {
            count: row.count,
            average: row.average,
            max_gpa: row.max,
            min_gpa: row.min,
        })
    }
}
