use crate::error::StatsError;

/// Equality constraints for grade statistics.
///
/// A `None` field places no constraint on its column; present fields are ANDed
/// and matched literally, so a value that no student has simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeFilter {
    pub course: Option<i64>,
    pub specialty: Option<String>,
    pub discipline: Option<String>,
    pub language: Option<String>,
}

impl GradeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn course(mut self, course: i64) -> Self {
        self.course = Some(course);
        self
    }

    pub fn specialty(mut self, specialty: &str) -> Self {
        self.specialty = Some(specialty.to_string());
        self
    }

    pub fn discipline(mut self, discipline: &str) -> Self {
        self.discipline = Some(discipline.to_string());
        self
    }

    pub fn language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.course.is_none()
            && self.specialty.is_none()
            && self.discipline.is_none()
            && self.language.is_none()
    }
}

/// Filter values exactly as a presentation layer collects them (free text).
///
/// Blank values count as "not supplied"; anything else is kept byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawGradeFilter {
    pub course: Option<String>,
    pub specialty: Option<String>,
    pub discipline: Option<String>,
    pub language: Option<String>,
}

impl TryFrom<&RawGradeFilter> for GradeFilter {
    type Error = StatsError;

    /// Fails only when `course` is not an integer
    fn try_from(raw: &RawGradeFilter) -> Result<Self, Self::Error> {
        let course = match supplied(&raw.course) {
            Some(text) => Some(parse_course(text)?),
            None => None,
        };

        Ok(GradeFilter {
            course,
            specialty: supplied(&raw.specialty).map(str::to_string),
            discipline: supplied(&raw.discipline).map(str::to_string),
            language: supplied(&raw.language).map(str::to_string),
        })
    }
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn parse_course(text: &str) -> Result<i64, StatsError> {
    let trimmed = text.trim();
    trimmed.parse::<i64>().map_err(|_| {
        StatsError::invalid_filter("course", format!("expected an integer, got '{}'", trimmed))
    })
}
