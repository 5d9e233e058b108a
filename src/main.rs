use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use maestro::audit::AuditLogger;
use maestro::cli::{Outcome, Session};
use maestro::config::{MaestroPaths, Settings};
use maestro::services::Schedule;
use maestro::storage::Storage;

#[derive(Parser)]
#[command(
    name = "maestro",
    version,
    about = "Terminal-based scheduling assistant for musicians",
    long_about = "Maestro keeps a musician's schedule: lessons, practices, exams, \
                  recitals, concerts, and to-dos, with clash detection, recurring \
                  entries, and a monthly concert budget. Commands are read line by \
                  line from stdin; type 'help' to see them."
)]
struct Cli {
    /// Directory for the schedule file and settings
    #[arg(long, env = "MAESTRO_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => MaestroPaths::with_base_dir(dir),
        None => MaestroPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    let audit = AuditLogger::new(paths.audit_log());
    let storage = Storage::new(paths)?;

    let (entries, warnings) = storage.load_schedule()?;
    for warning in &warnings {
        eprintln!("{}", warning);
    }
    let schedule = Schedule::from_entries(entries, settings.monthly_budget);

    println!("Welcome to Maestro, your personal schedule assistant.");
    println!(
        "Loaded {} entries. Type 'help' to see what I can do.",
        schedule.len()
    );

    let today = chrono::Local::now().date_naive();
    let mut session = Session::new(schedule, storage, settings, audit, today);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if session.dispatch(&line) == Outcome::Exit {
            break;
        }
    }

    println!("Goodbye, and keep practicing!");
    Ok(())
}
