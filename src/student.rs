use rand::Rng;

const SPECIALTIES: [&str; 3] = ["101", "102", "205"];
const DISCIPLINES: [&str; 4] = ["MATH", "PHYS", "HIST", "CS"];
const LANGUAGES: [&str; 3] = ["kazakh", "russian", "english"];

/// A single row of the `Students` table
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub semester_gpa: Option<f64>,
    pub total_score: Option<f64>,
    pub course: i64,
    pub specialty_code: String,
    pub discipline_code: String,
    pub language_of_study: String,
}

impl StudentRecord {
    /// Creates a record with no GPA and no score yet
    pub fn new(course: i64, specialty_code: &str, discipline_code: &str, language_of_study: &str) -> Self {
        StudentRecord {
            semester_gpa: None,
            total_score: None,
            course,
            specialty_code: specialty_code.to_string(),
            discipline_code: discipline_code.to_string(),
            language_of_study: language_of_study.to_string(),
        }
    }

    pub fn with_gpa(mut self, semester_gpa: f64) -> Self {
        self.semester_gpa = Some(semester_gpa);
        self
    }

    pub fn with_score(mut self, total_score: f64) -> Self {
        self.total_score = Some(total_score);
        self
    }

    /// A plausible student; roughly one in ten has no GPA or no score yet
    pub fn generate_random() -> Self {
        let mut rng = rand::thread_rng();

        let course = rng.gen_range(1..=4);
        let specialty = SPECIALTIES[rng.gen_range(0..SPECIALTIES.len())];
        let discipline = DISCIPLINES[rng.gen_range(0..DISCIPLINES.len())];
        let language = LANGUAGES[rng.gen_range(0..LANGUAGES.len())];
        let mut record = StudentRecord::new(course, specialty, discipline, language);

        if !rng.gen_bool(0.1) {
            // Two decimals, as printed on transcripts
            let gpa: f64 = rng.gen_range(100..=400) as f64 / 100.0;
            record = record.with_gpa(gpa);
        }
        if !rng.gen_bool(0.1) {
            record = record.with_score(rng.gen_range(0..=100) as f64);
        }
        record
    }
}

pub fn generate_students(count: usize) -> Vec<StudentRecord> {
    (0..count).map(|_| StudentRecord::generate_random()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_has_no_measurements() {
        let record = StudentRecord::new(2, "101", "MATH", "english");
        assert_eq!(record.course, 2);
        assert_eq!(record.specialty_code, "101");
        assert!(record.semester_gpa.is_none());
        assert!(record.total_score.is_none());
    }

    #[test]
    fn test_builder_sets_measurements() {
        let record = StudentRecord::new(1, "205", "PHYS", "kazakh")
            .with_gpa(3.25)
            .with_score(87.0);
        assert_eq!(record.semester_gpa, Some(3.25));
        assert_eq!(record.total_score, Some(87.0));
    }

    #[test]
    fn test_generate_students_in_range() {
        let students = generate_students(200);
        assert_eq!(students.len(), 200);
        for student in &students {
            assert!((1..=4).contains(&student.course));
            assert!(SPECIALTIES.contains(&student.specialty_code.as_str()));
            assert!(DISCIPLINES.contains(&student.discipline_code.as_str()));
            assert!(LANGUAGES.contains(&student.language_of_study.as_str()));
            if let Some(gpa) = student.semester_gpa {
                assert!((1.0..=4.0).contains(&gpa));
            }
            if let Some(score) = student.total_score {
                assert!((0.0..=100.0).contains(&score));
            }
        }
    }
}
