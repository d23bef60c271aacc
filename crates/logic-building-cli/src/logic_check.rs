//! Self-check and demonstration CLI
//!
//! Usage:
//!   logic_check list
//!   logic_check verify [--family <NAME>] [--unit <NAME>] [--parallel]
//!   logic_check demo table <n> [--upto <ROWS>] [--recursive]
//!   logic_check demo swap <a> <b>
//!   logic_check weekday <day> <month> <year>
//!
//! Self-checks only run from here (or from the test suite), never when the
//! library is used.

use clap::{Parser, Subcommand};
use logic_building::constants::DEFAULT_TABLE_ROWS;
use logic_building::domain::calendar::{day_of_week, weekday_name};
use logic_building::domain::swap::swap_demo_lines;
use logic_building::domain::table::{
    multiplication_table_iterative, multiplication_table_recursive,
};
use logic_building::infra::transcript::write_transcript;
use logic_building::{Unit, VerificationReport, families, find, verify, verify_parallel};
use log::info;
use std::io;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(author, version, about = "Run logic-building self-checks and demonstrations")]
struct App {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every family and its units
    List,
    /// Run the literal example checks
    Verify {
        /// Only units of this family
        #[arg(long)]
        family: Option<String>,
        /// Only the unit with this name
        #[arg(long)]
        unit: Option<String>,
        /// Run checks on the rayon thread pool
        #[arg(long)]
        parallel: bool,
    },
    /// Print a demonstration transcript
    #[command(subcommand)]
    Demo(Demo),
    /// Day of the week for a date (Sakamoto's algorithm)
    Weekday {
        day: u32,
        #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },
}

#[derive(Debug, Subcommand)]
enum Demo {
    /// Multiplication table of n
    Table {
        #[arg(allow_negative_numbers = true)]
        n: i64,
        /// Number of rows
        #[arg(long, default_value_t = DEFAULT_TABLE_ROWS)]
        upto: u32,
        /// Build the rows recursively
        #[arg(long)]
        recursive: bool,
    },
    /// Swap two values and show the before/after state
    Swap {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
}

fn list() {
    for family in families() {
        println!("{}", family);
        for unit in find(Some(family), None) {
            println!("  {}", unit.name);
        }
    }
}

/// Units matching the filters; an empty selection is an error
fn select_units(family: Option<&str>, unit: Option<&str>) -> Result<Vec<Unit>, String> {
    let units = find(family, unit);
    if units.is_empty() {
        return Err("no unit matches the given filters".to_string());
    }
    Ok(units)
}

fn exit_code(report: &VerificationReport) -> i32 {
    if report.is_success() { 0 } else { 1 }
}

/// Runs the selected checks and returns the process exit code
fn run_verify(family: Option<&str>, unit: Option<&str>, parallel: bool) -> i32 {
    let units = match select_units(family, unit) {
        Ok(units) => units,
        Err(e) => {
            eprintln!("Error: {}.", e);
            return 1;
        }
    };

    println!("Checking {} units...", units.len());
    let start = Instant::now();
    let report = if parallel {
        verify_parallel(&units)
    } else {
        verify(&units)
    };
    let elapsed = start.elapsed();

    for (name, failure) in &report.failed {
        println!("FAIL {}: {}", name, failure);
    }
    println!(
        "{} passed, {} failed ({:.2?})",
        report.passed.len(),
        report.failed.len(),
        elapsed
    );
    info!(
        "verified {} units in {:.2?} (parallel: {})",
        report.total(),
        elapsed,
        parallel
    );

    exit_code(&report)
}

fn run_demo(demo: Demo) -> io::Result<()> {
    let lines = match demo {
        Demo::Table { n, upto, recursive } => {
            if recursive {
                multiplication_table_recursive(n, upto)
            } else {
                multiplication_table_iterative(n, upto)
            }
        }
        Demo::Swap { a, b } => swap_demo_lines(a, b),
    };
    write_transcript(&mut io::stdout().lock(), &lines)
}

fn main() {
    env_logger::init();
    let app = App::parse();

    match app.command {
        Command::List => list(),
        Command::Verify {
            family,
            unit,
            parallel,
        } => {
            let code = run_verify(family.as_deref(), unit.as_deref(), parallel);
            if code != 0 {
                std::process::exit(code);
            }
        }
        Command::Demo(demo) => {
            if let Err(e) = run_demo(demo) {
                eprintln!("Error: failed to write transcript: {}", e);
                std::process::exit(1);
            }
        }
        Command::Weekday { day, month, year } => {
            let index = day_of_week(day, month, year);
            let name = weekday_name(index).unwrap_or("?");
            println!("{}/{}/{} is a {} ({})", day, month, year, name, index);
        }
    }
}
