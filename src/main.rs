//! CLI entry point for the student marks viewer.
//!
//! Loads the roster once, answers a single query and prints the report.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use student_marks::config::source_from_env;
use student_marks::output::Report;
use student_marks::{EmptyRoster, LoadError, Roster, load_or_sample};
use tracing::{debug, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "student_marks")]
#[command(about = "View student coursework and exam marks", long_about = None)]
struct Cli {
    /// Student marks file (defaults to resources/studentMarks.txt, then ./studentMarks.txt)
    #[arg(short, long, global = true, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print reports as JSON instead of text
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every student record and the average percentage
    All,
    /// Show one student's record
    Show {
        /// Student number, matched exactly
        #[arg(value_name = "ID")]
        id: String,
    },
    /// List students whose "id - name" contains QUERY (case-insensitive)
    Search {
        #[arg(value_name = "QUERY", default_value = "")]
        query: String,
    },
    /// Show the student with the highest overall mark
    Highest,
    /// Show the student with the lowest overall mark
    Lowest,
    /// Print the number of students loaded
    Count,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/student_marks.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("student_marks.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let source = source_from_env(cli.file);
    let loaded = load_or_sample(&source);
    if let Some(LoadError::SourceMissing { path }) = &loaded.fallback {
        println!("{} not found. Using sample data.", path.display());
    }
    info!(
        source = %source.display(),
        students = loaded.roster.len(),
        sample = loaded.is_sample(),
        "Roster ready"
    );

    let roster = loaded.roster;
    match cli.command {
        Commands::Count => println!("Total Students: {}", roster.len()),
        command => match answer(&roster, &command) {
            Ok(Some(report)) => emit(&report, cli.json)?,
            Ok(None) => {}
            Err(EmptyRoster) => println!("No student records available."),
        },
    }

    Ok(())
}

/// Runs one query. `Ok(None)` means the command has no report.
#[tracing::instrument(skip_all, fields(command = command.name()))]
fn answer<'a>(roster: &'a Roster, command: &'a Commands) -> Result<Option<Report<'a>>, EmptyRoster> {
    if roster.is_empty() {
        return Err(EmptyRoster);
    }

    let report = match command {
        Commands::All => Report::All(roster.all()?),
        Commands::Show { id } => match roster.by_id(id) {
            Some(record) => Report::Individual(record),
            None => Report::NotFound { id },
        },
        Commands::Search { query } => Report::Search {
            query,
            matches: roster.search(query),
        },
        Commands::Highest => Report::Highest(roster.highest()?),
        Commands::Lowest => Report::Lowest(roster.lowest()?),
        Commands::Count => return Ok(None),
    };

    debug!(kind = report.kind(), "Query answered");
    Ok(Some(report))
}

fn emit(report: &Report<'_>, json: bool) -> Result<()> {
    if json {
        println!("{}", report.render_json()?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::All => "all",
            Commands::Show { .. } => "show",
            Commands::Search { .. } => "search",
            Commands::Highest => "highest",
            Commands::Lowest => "lowest",
            Commands::Count => "count",
        }
    }
}
