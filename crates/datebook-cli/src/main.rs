//! `datebook` CLI - keep a transient personal calendar from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Interactive menu (the default)
//! datebook
//!
//! # Render this month
//! datebook render
//!
//! # Render March 2024 with two events on the 15th
//! datebook render --month 3 --year 2024 \
//!     --event "15/03/2024=Team meeting" --event "15/03/2024=Dentist"
//!
//! # Look up one date, as JSON
//! datebook view --date 15/03/2024 --event "15/03/2024=Dentist" --json
//! ```
//!
//! Nothing is stored between runs. Log verbosity is read from `DATEBOOK_LOG`
//! (e.g. `DATEBOOK_LOG=debug`); logs go to stderr.

mod input;
mod session;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use datebook::{CalendarDate, EventStore};
use tracing_subscriber::EnvFilter;

use crate::session::Session;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "DATEBOOK_LOG";

#[derive(Parser)]
#[command(name = "datebook", version, about = "Personal calendar manager")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (default when no subcommand is given)
    Interactive,
    /// Print the month grid with the month's events
    Render {
        /// Month to render, 1-12 (defaults to the current month)
        #[arg(short, long)]
        month: Option<u32>,
        /// Year to render (defaults to the current year)
        #[arg(short, long, allow_negative_numbers = true)]
        year: Option<i32>,
        /// Event to add before rendering, as DD/MM/YYYY=TEXT (repeatable)
        #[arg(short, long = "event", value_parser = parse_event)]
        events: Vec<(CalendarDate, String)>,
    },
    /// Print the events of a single date
    View {
        /// Date to look up, as DD/MM/YYYY
        #[arg(short, long)]
        date: CalendarDate,
        /// Event to add before the lookup, as DD/MM/YYYY=TEXT (repeatable)
        #[arg(short, long = "event", value_parser = parse_event)]
        events: Vec<(CalendarDate, String)>,
        /// Print the result as JSON ({"found": bool, "events": [string]})
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let stdin = io::stdin();
            Session::new().run(stdin.lock(), io::stdout().lock())?;
        }
        Commands::Render {
            month,
            year,
            events,
        } => {
            let today = CalendarDate::today();
            let month = month.unwrap_or(today.month());
            let year = year.unwrap_or(today.year());

            let store = build_store(events);
            let text = store
                .display_calendar(month, year)
                .with_context(|| format!("Failed to render month {} of {}", month, year))?;
            write_stdout(&text)?;
        }
        Commands::View { date, events, json } => {
            let store = build_store(events);
            if json {
                let value = serde_json::to_string_pretty(&store.lookup(&date))?;
                write_stdout(&format!("{}\n", value))?;
            } else {
                write_stdout(&store.render_day(&date))?;
            }
        }
    }

    Ok(())
}

/// Install a stderr `fmt` subscriber filtered by `DATEBOOK_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Parse a `DD/MM/YYYY=TEXT` event argument.
///
/// - `15/03/2024=Team meeting` produces `(15/03/2024, "Team meeting")`
/// - The text may itself contain `=`; only the first one separates the date
/// - The date is validated like any other `CalendarDate`
fn parse_event(raw: &str) -> std::result::Result<(CalendarDate, String), String> {
    let (date, text) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected DD/MM/YYYY=TEXT, got '{}'", raw))?;
    let date: CalendarDate = date.parse().map_err(|e| format!("{}", e))?;
    Ok((date, text.to_string()))
}

fn build_store(events: Vec<(CalendarDate, String)>) -> EventStore {
    let mut store = EventStore::new();
    for (date, text) in events {
        store.add_event(date, text);
    }
    store
}

fn write_stdout(content: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .context("Failed to write to stdout")?;
    stdout.flush().context("Failed to flush stdout")
}
