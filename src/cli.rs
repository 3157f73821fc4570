use crate::database_factory::DatabaseConfig;
use crate::filter::RawGradeFilter;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Aggregate GPA and score statistics over a local student-records store
#[derive(Parser, Debug, Clone)]
#[command(name = "student_stats")]
#[command(about = "Print GPA and grade statistics from a student store", long_about = None)]
#[command(version)]
pub struct Args {
    /// Use in-memory database for testing
    #[arg(long, help = "Use in-memory database for testing")]
    pub test: bool,

    /// Custom database file path
    #[arg(long, value_name = "PATH", help = "Use custom database file path")]
    pub db_path: Option<PathBuf>,

    /// Create the Students table before querying
    #[arg(long, help = "Create the Students table if it does not exist")]
    pub init_schema: bool,

    /// Course number; must be an integer
    #[arg(long, value_name = "N", help = "Only students in this course")]
    pub course: Option<String>,

    /// Specialty code, matched exactly
    #[arg(long, value_name = "CODE", help = "Only students with this specialty code")]
    pub specialty: Option<String>,

    /// Discipline code, matched exactly
    #[arg(long, value_name = "CODE", help = "Only students with this discipline code")]
    pub discipline: Option<String>,

    /// Language of study, matched exactly
    #[arg(long, value_name = "LANG", help = "Only students studying in this language")]
    pub language: Option<String>,

    /// How long to wait on a locked store, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 5000, help = "Busy timeout in milliseconds")]
    pub busy_timeout_ms: u64,

    /// Disable colored output
    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }

    pub fn database_config(&self) -> DatabaseConfig {
        let mut builder = DatabaseConfig::builder()
            .busy_timeout(Duration::from_millis(self.busy_timeout_ms));
        if let Some(path) = &self.db_path {
            builder = builder.path(&path.to_string_lossy());
        }
        if self.test {
            builder = builder.test_mode();
        }
        builder.build()
    }

    /// Filter values exactly as typed on the command line
    pub fn raw_filter(&self) -> RawGradeFilter {
        RawGradeFilter {
            course: self.course.clone(),
            specialty: self.specialty.clone(),
            discipline: self.discipline.clone(),
            language: self.language.clone(),
        }
    }

    /// An in-memory store starts empty, so it always needs the schema
    pub fn needs_schema(&self) -> bool {
        self.init_schema || self.test
    }
}
