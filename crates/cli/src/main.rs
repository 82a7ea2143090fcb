//! MeetLedger command-line interface
//!
//! Classifies a week of calendar meetings against the configured taxonomy
//! and prints the time allocation report.
//!
//! This is a CLI tool, so `println!` and `eprintln!` are intentionally used
//! for user-facing output rather than structured logging.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod report;

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use meetledger_core::{
    AllocationCalculator, ClassificationService, MeetingSource as _,
};
use meetledger_domain::ClassifiedMeeting;
use meetledger_infra::config::{load_taxonomy, TAXONOMY_ENV_VAR};
use meetledger_infra::fixtures::FixtureMeetingSource;
use tracing::debug;

/// Work-week budget used for the unallocated-hours insight.
const DEFAULT_WORK_WEEK_HOURS: f64 = 40.0;
/// The fixture source covers one five-day work week.
const DEFAULT_PERIOD_DAYS: u32 = 5;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Logging to stderr keeps stdout clean for the report itself
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(_) => debug!("no .env file found"),
    }

    let command = env::args().nth(1);
    let taxonomy_path = env::args().nth(2).map(PathBuf::from);

    match command.as_deref() {
        Some("report") | None => run_report(taxonomy_path),
        Some("rationale") => run_rationale(taxonomy_path),
        Some("help") => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            eprintln!("Unknown command: {unknown}");
            eprintln!();
            print_help();
            anyhow::bail!("unknown command")
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Classify the fixture week and print the full allocation report.
fn run_report(taxonomy_path: Option<PathBuf>) -> anyhow::Result<()> {
    let meetings = classify_week(taxonomy_path)?;
    let calculator = AllocationCalculator::new(&meetings);

    print!("{}", report::full_report(&calculator));
    println!();
    print!("{}", report::insights(&calculator, DEFAULT_WORK_WEEK_HOURS, DEFAULT_PERIOD_DAYS));

    Ok(())
}

/// Print per-meeting classification evidence for the fixture week.
fn run_rationale(taxonomy_path: Option<PathBuf>) -> anyhow::Result<()> {
    let meetings = classify_week(taxonomy_path)?;

    for meeting in &meetings {
        let classification = &meeting.classification;
        println!("{}  {}", meeting.record.id, meeting.record.subject);
        println!(
            "    customer: {}  project: {}  category: {}  confidence: {:.0}%",
            classification.customer.as_deref().unwrap_or("-"),
            classification.project.as_deref().unwrap_or("-"),
            classification.category,
            f64::from(classification.confidence) * 100.0,
        );
        println!("    {}", classification.rationale_trail());
        println!();
    }

    Ok(())
}

/// Shared pipeline front half: taxonomy load, fixture fetch, classify-all.
fn classify_week(taxonomy_path: Option<PathBuf>) -> anyhow::Result<Vec<ClassifiedMeeting>> {
    let taxonomy = load_taxonomy(taxonomy_path).context("failed to load taxonomy")?;

    let source = FixtureMeetingSource::new();
    let (first, last) = source.coverage();
    let records =
        source.fetch_meetings(first, last).context("failed to fetch calendar meetings")?;

    ClassificationService::with_default_scorer()
        .classify_all(records, &taxonomy)
        .context("classification failed")
}

fn print_help() {
    println!("MeetLedger - calendar time allocation reporting");
    println!();
    println!("USAGE:");
    println!("    meetledger [COMMAND] [TAXONOMY_FILE]");
    println!();
    println!("COMMANDS:");
    println!("    report     Classify the sample week and print the allocation report (default)");
    println!("    rationale  Print per-meeting classification evidence");
    println!("    help       Show this help message");
    println!();
    println!("The taxonomy is read from TAXONOMY_FILE when given, otherwise from the");
    println!("{TAXONOMY_ENV_VAR} environment variable or ./taxonomy.toml, falling back");
    println!("to the built-in sample taxonomy. Set RUST_LOG to control log output.");
}
