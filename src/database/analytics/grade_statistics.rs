use super::aggregate::{AggregateQuery, Column};
use crate::filter::GradeFilter;
use crate::statistics::GradeStatistics;
use rusqlite::Connection;
use rusqlite::Result;

pub struct GradeStatisticsRepository<'a> {
    conn: &'a Connection,
}

impl<'a> GradeStatisticsRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        GradeStatisticsRepository { conn }
    }

    /// Average, maximum and minimum of `total_score` over students matching every
    /// constraint in `filter`.
    ///
    /// The filter is expected to be validated already.
    pub fn for_filter(&self, filter: &GradeFilter) -> Result<GradeStatistics> {
        let row = Self::query_for(filter).execute(self.conn)?;
        Ok(GradeStatistics {
            count: row.count,
            average_score: row.average,
            max_score: row.max,
            min_score: row.min,
        })
    }

    fn query_for(filter: &GradeFilter) -> AggregateQuery {
        AggregateQuery::over(Column::TotalScore)
            .where_eq_opt(Column::Course, filter.course)
            .where_eq_opt(Column::SpecialtyCode, filter.specialty.clone())
            .where_eq_opt(Column::DisciplineCode, filter.discipline.clone())
            .where_eq_opt(Column::LanguageOfStudy, filter.language.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::schema::apply_migrations;
    use crate::database::students::StudentsRepository;
    use crate::student::StudentRecord;

    fn create_test_db() -> Connection {
        let mut conn = Connection::open_in_memory().expect("Failed to create test database");
        apply_migrations(&mut conn).expect("Failed to apply migrations");
        conn
    }

    fn seed(conn: &Connection) {
        let students = StudentsRepository::new(conn);
        students
            .insert_all(&[
                StudentRecord::new(1, "101", "MATH", "english").with_score(55.0),
                StudentRecord::new(1, "101", "PHYS", "kazakh").with_score(70.0),
                StudentRecord::new(2, "101", "MATH", "english").with_score(90.0),
                StudentRecord::new(2, "205", "MATH", "russian").with_score(65.0),
                StudentRecord::new(3, "205", "HIST", "english"),
            ])
            .unwrap();
    }

    #[test]
    fn test_for_filter_empty_database() {
        let conn = create_test_db();
        let repo = GradeStatisticsRepository::new(&conn);
        let stats = repo.for_filter(&GradeFilter::new().course(2)).unwrap();
        assert_eq!(stats, GradeStatistics::empty());
    }

    #[test]
    fn test_for_filter_unconstrained() {
        let conn = create_test_db();
        seed(&conn);
        let stats = GradeStatisticsRepository::new(&conn)
            .for_filter(&GradeFilter::new())
            .unwrap();
        assert_eq!(stats.count, 4);
        assert!((stats.average_score.unwrap() - 70.0).abs() < 0.001);
        assert_eq!(stats.max_score, Some(90.0));
        assert_eq!(stats.min_score, Some(55.0));
    }

    #[test]
    fn test_for_filter_by_course() {
        let conn = create_test_db();
        seed(&conn);
        let stats = GradeStatisticsRepository::new(&conn)
            .for_filter(&GradeFilter::new().course(2))
            .unwrap();
        assert_eq!(stats.count, 2);
        assert!((stats.average_score.unwrap() - 77.5).abs() < 0.001);
    }

    #[test]
    fn test_for_filter_all_fields_anded() {
        let conn = create_test_db();
        seed(&conn);
        let filter = GradeFilter::new()
            .course(1)
            .specialty("101")
            .discipline("MATH")
            .language("english");
        let stats = GradeStatisticsRepository::new(&conn)
            .for_filter(&filter)
            .unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.average_score, Some(55.0));
        assert_eq!(stats.max_score, Some(55.0));
        assert_eq!(stats.min_score, Some(55.0));
    }

    #[test]
    fn test_for_filter_no_match() {
        let conn = create_test_db();
        seed(&conn);
        let stats = GradeStatisticsRepository::new(&conn)
            .for_filter(&GradeFilter::new().discipline("CHEM"))
            .unwrap();
        assert_eq!(stats, GradeStatistics::empty());
    }

    #[test]
    fn test_for_filter_matched_rows_without_scores() {
        let conn = create_test_db();
        seed(&conn);
        let stats = GradeStatisticsRepository::new(&conn)
            .for_filter(&GradeFilter::new().course(3))
            .unwrap();
        assert_eq!(stats, GradeStatistics::empty());
    }
}
