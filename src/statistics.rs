/// Aggregate of `semester_gpa` over every student.
///
/// `average`, `max_gpa` and `min_gpa` are `None` whenever `count` is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpaStatistics {
    pub count: i64,
    pub average: Option<f64>,
    pub max_gpa: Option<f64>,
    pub min_gpa: Option<f64>,
}

impl GpaStatistics {
    pub fn empty() -> Self {
        GpaStatistics {
            count: 0,
            average: None,
            max_gpa: None,
            min_gpa: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Aggregate of `total_score` over the students matching a filter.
///
/// `count` is the number of matched rows with a non-null score; the other
/// fields are `None` when it is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeStatistics {
    pub count: i64,
    pub average_score: Option<f64>,
    pub max_score: Option<f64>,
    pub min_score: Option<f64>,
}

impl GradeStatistics {
    pub fn empty() -> Self {
        GradeStatistics {
            count: 0,
            average_score: None,
            max_score: None,
            min_score: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
