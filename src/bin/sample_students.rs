use log::info;
use std::env;
use student_stats::database::Database;
use student_stats::student::generate_students;

const DEFAULT_COUNT: usize = 50;

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    let (db_path, count) = validate_input(&args);

    let db = match Database::new(&db_path) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Error opening database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = db.apply_migrations() {
        eprintln!("Error creating schema: {}", e);
        std::process::exit(1);
    }

    let students = generate_students(count);
    if let Err(e) = db.insert_students(&students) {
        eprintln!("Error inserting students: {}", e);
        std::process::exit(1);
    }

    let total = match db.count_students() {
        Ok(total) => total,
        Err(e) => {
            eprintln!("Error counting students: {}", e);
            std::process::exit(1);
        }
    };
    info!("Inserted {} student(s), store now holds {}", count, total);
    println!(
        "Inserted {} students into {} ({} total)",
        count, db_path, total
    );
}

fn validate_input(args: &[String]) -> (String, usize) {
    let program = program_name(args);

    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <database_file> [count]", program);
        eprintln!();
        eprintln!("Creates the Students table if needed and fills it with random records.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  <database_file>  Path to the SQLite database file");
        eprintln!("  [count]          Number of students to insert (default {})", DEFAULT_COUNT);
        eprintln!();
        eprintln!("Example: {} students.db 200", program);
        std::process::exit(1);
    }

    let count = match args.get(2) {
        Some(text) => match text.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Error: count must be a non-negative integer");
                std::process::exit(1);
            }
        },
        None => DEFAULT_COUNT,
    };

    (args[1].clone(), count)
}

/// argv[0], which the OS may leave out
fn program_name(args: &[String]) -> &str {
    args.first().map_or("sample_students", String::as_str)
}
