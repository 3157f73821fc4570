use crate::database::Database;
use crate::error::StatsError;
use crate::filter::{GradeFilter, RawGradeFilter};
use crate::statistics::{GpaStatistics, GradeStatistics};
use log::{debug, error, warn};
use std::sync::Arc;

/// Read-only statistics over the student-records store, decoupled from any UI.
///
/// Cheap to share: hold it in an `Arc` and call it from as many threads as needed.
pub struct StatisticsQueryService {
    db: Arc<Database>,
}

impl StatisticsQueryService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// GPA count, average, maximum and minimum over every student
    pub fn get_overall_gpa_statistics(&self) -> Result<GpaStatistics, StatsError> {
        let stats = self.db.compute_gpa_statistics().map_err(|e| {
            error!("Failed to compute GPA statistics: {}", e);
            StatsError::from(e)
        })?;
        debug!("GPA statistics: {:?}", stats);
        Ok(stats)
    }

    /// Score average, maximum and minimum over the students matching `filter`.
    ///
    /// No match is not an error and yields [`GradeStatistics::empty`].
    pub fn get_grade_statistics(&self, filter: &GradeFilter) -> Result<GradeStatistics, StatsError> {
        let stats = self.db.compute_grade_statistics(filter).map_err(|e| {
            error!("Failed to compute grade statistics for {:?}: {}", filter, e);
            StatsError::from(e)
        })?;
        debug!("Grade statistics for {:?}: {:?}", filter, stats);
        Ok(stats)
    }

    /// Same as [`Self::get_grade_statistics`], for free-text filter values.
    ///
    /// A `course` that is not an integer fails with `InvalidFilter` before the
    /// store is queried.
    pub fn get_grade_statistics_raw(
        &self,
        raw: &RawGradeFilter,
    ) -> Result<GradeStatistics, StatsError> {
        let filter = GradeFilter::try_from(raw).map_err(|e| {
            warn!("Rejected raw grade filter {:?}: {}", raw, e);
            e
        })?;
        self.get_grade_statistics(&filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::StudentRecord;

    fn create_service() -> (Arc<Database>, StatisticsQueryService) {
        let db = Arc::new(Database::new(":memory:").unwrap());
        db.apply_migrations().unwrap();
        let service = StatisticsQueryService::new(db.clone());
        (db, service)
    }

    #[test]
    fn test_gpa_statistics_empty_store() {
        let (_db, service) = create_service();
        let stats = service.get_overall_gpa_statistics().unwrap();
        assert_eq!(stats, GpaStatistics::empty());
    }

    #[test]
    fn test_gpa_statistics_with_data() {
        let (db, service) = create_service();
        for gpa in [3.0, 3.5, 4.0] {
            db.insert_student(&StudentRecord::new(1, "101", "MATH", "english").with_gpa(gpa))
                .unwrap();
        }

        let stats = service.get_overall_gpa_statistics().unwrap();
        assert_eq!(stats.count, 3);
        assert!((stats.average.unwrap() - 3.5).abs() < 0.001);
        assert_eq!(stats.max_gpa, Some(4.0));
        assert_eq!(stats.min_gpa, Some(3.0));
    }

    #[test]
    fn test_grade_statistics_empty_store_with_course() {
        let (_db, service) = create_service();
        let stats = service
            .get_grade_statistics(&GradeFilter::new().course(2))
            .unwrap();
        assert_eq!(stats, GradeStatistics::empty());
    }

    #[test]
    fn test_grade_statistics_raw_rejects_bad_course() {
        let (_db, service) = create_service();
        let raw = RawGradeFilter {
            course: Some("second".to_string()),
            ..RawGradeFilter::default()
        };
        let err = service.get_grade_statistics_raw(&raw).unwrap_err();
        assert!(err.is_invalid_filter());
    }

    #[test]
    fn test_grade_statistics_unknown_course_matches_nothing() {
        let (db, service) = create_service();
        db.insert_student(&StudentRecord::new(1, "101", "MATH", "english").with_score(70.0))
            .unwrap();

        for course in [-1, 0, 99] {
            let stats = service
                .get_grade_statistics(&GradeFilter::new().course(course))
                .unwrap();
            assert_eq!(stats, GradeStatistics::empty());
        }
    }

    #[test]
    fn test_grade_statistics_long_code_matches_nothing() {
        let (_db, service) = create_service();
        let long = "x".repeat(65);
        let stats = service
            .get_grade_statistics(&GradeFilter::new().specialty(&long))
            .unwrap();
        assert_eq!(stats, GradeStatistics::empty());
    }

    #[test]
    fn test_invalid_filter_is_detected_before_the_store() {
        // No schema: any query would fail with QueryExecution
        let db = Arc::new(Database::new(":memory:").unwrap());
        let service = StatisticsQueryService::new(db);
        let raw = RawGradeFilter {
            course: Some("1.5".to_string()),
            ..RawGradeFilter::default()
        };
        let err = service.get_grade_statistics_raw(&raw).unwrap_err();
        assert!(err.is_invalid_filter());
    }

    #[test]
    fn test_missing_table_is_query_execution_error() {
        let db = Arc::new(Database::new(":memory:").unwrap());
        let service = StatisticsQueryService::new(db);

        assert!(service.get_overall_gpa_statistics().unwrap_err().is_query_execution());
        assert!(
            service
                .get_grade_statistics(&GradeFilter::new())
                .unwrap_err()
                .is_query_execution()
        );
    }

    #[test]
    fn test_service_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StatisticsQueryService>();
    }
}
