use crate::filter::GradeFilter;
use crate::statistics::{GpaStatistics, GradeStatistics};
use colored::Colorize;

const NO_DATA: &str = "n/a";

/// Plain-text rendering of statistics for terminals
pub struct ReportFormatter {
    use_color: bool,
}

impl ReportFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn gpa_statistics(&self, stats: &GpaStatistics) -> String {
        let mut lines = self.heading("GPA Statistics");
        lines.push(format!("  Count:   {}", self.count(stats.count)));
        lines.push(format!("  Average: {}", self.value(stats.average)));
        lines.push(format!("  Maximum: {}", self.value(stats.max_gpa)));
        lines.push(format!("  Minimum: {}", self.value(stats.min_gpa)));
        lines.join("\n")
    }

    pub fn grade_statistics(&self, filter: &GradeFilter, stats: &GradeStatistics) -> String {
        let title = format!("Grade Statistics ({})", describe_filter(filter));
        let mut lines = self.heading(&title);
        lines.push(format!("  Matched: {}", self.count(stats.count)));
        lines.push(format!("  Average: {}", self.value(stats.average_score)));
        lines.push(format!("  Maximum: {}", self.value(stats.max_score)));
        lines.push(format!("  Minimum: {}", self.value(stats.min_score)));
        lines.join("\n")
    }

    fn heading(&self, title: &str) -> Vec<String> {
        let underline = "=".repeat(title.chars().count());
        if self.use_color {
            vec![title.cyan().bold().to_string(), underline]
        } else {
            vec![title.to_string(), underline]
        }
    }

    fn count(&self, count: i64) -> String {
        if self.use_color {
            count.to_string().bold().to_string()
        } else {
            count.to_string()
        }
    }

    fn value(&self, value: Option<f64>) -> String {
        match (value, self.use_color) {
            (Some(v), true) => format!("{:.2}", v).green().to_string(),
            (Some(v), false) => format!("{:.2}", v),
            (None, true) => NO_DATA.dimmed().to_string(),
            (None, false) => NO_DATA.to_string(),
        }
    }
}

/// Human-readable summary of the constraints in `filter`
pub fn describe_filter(filter: &GradeFilter) -> String {
    let mut parts = Vec::new();
    if let Some(course) = filter.course {
        parts.push(format!("course={}", course));
    }
    if let Some(specialty) = &filter.specialty {
        parts.push(format!("specialty={}", specialty));
    }
    if let Some(discipline) = &filter.discipline {
        parts.push(format!("discipline={}", discipline));
    }
    if let Some(language) = &filter.language {
        parts.push(format!("language={}", language));
    }

    if parts.is_empty() {
        "all students".to_string()
    } else {
        parts.join(", ")
    }
}
