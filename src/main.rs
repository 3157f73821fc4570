use log::info;
use std::process;
use std::sync::Arc;
use student_stats::cli::Args;
use student_stats::database_factory::DatabaseFactory;
use student_stats::error::StatsError;
use student_stats::filter::GradeFilter;
use student_stats::report::ReportFormatter;
use student_stats::statistics_service::StatisticsQueryService;

const EXIT_QUERY_FAILED: i32 = 1;
const EXIT_INVALID_FILTER: i32 = 2;

fn main() {
    env_logger::init();
    let args = Args::parse_args();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        let code = if e.is_invalid_filter() {
            EXIT_INVALID_FILTER
        } else {
            EXIT_QUERY_FAILED
        };
        process::exit(code);
    }
}

fn run(args: &Args) -> Result<(), StatsError> {
    // Reject bad filters before the store is even opened
    let filter = GradeFilter::try_from(&args.raw_filter())?;

    let db = Arc::new(DatabaseFactory::create(args.database_config())?);
    if args.needs_schema() {
        db.apply_migrations()?;
    }

    let service = StatisticsQueryService::new(db);
    let gpa = service.get_overall_gpa_statistics()?;
    let grades = service.get_grade_statistics(&filter)?;
    info!("Computed statistics over {} GPA value(s)", gpa.count);

    let formatter = ReportFormatter::new(!args.no_color);
    println!("{}", formatter.gpa_statistics(&gpa));
    println!();
    println!("{}", formatter.grade_statistics(&filter, &grades));

    Ok(())
}
