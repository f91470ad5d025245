//! `booking` CLI — check booking requests against a venue schedule.
//!
//! Existing bookings are a JSON array of `{id, start_time, duration_minutes?}`
//! objects, read from `-i` or stdin. Results are printed as JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Is 09:30 free? Prints the conflict result with alternatives on conflict
//! booking check --start 2026-03-16T09:30 -i bookings.json
//!
//! # Re-check an update to booking b1 (b1 is ignored)
//! booking check --start 2026-03-16T10:00 --exclude b1 -i bookings.json
//!
//! # Next three start times after a preferred one
//! cat bookings.json | booking suggest --start 2026-03-16T09:00 --count 3
//!
//! # Every open two-hour slot of a day
//! booking slots --day 2026-03-16 -i bookings.json
//!
//! # Buffered footprint of a booking
//! booking window --start 2026-03-16T10:00 --duration 90
//!
//! # Custom policy from a TOML file, with a flag override
//! booking --config venue.toml --buffer 30 slots --day 2026-03-16 -i bookings.json
//! ```
//!
//! Set `RUST_LOG=booking_engine=debug` (or pass `-v`) to trace decisions on stderr.

use anyhow::{Context, Result};
use booking_engine::{
    minutes_in_range, parse_date, parse_timestamp, BusinessHours, CandidateRequest, EngineConfig,
    ExistingBooking, Scheduler,
};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "booking",
    version,
    about = "Booking conflict checks and open slots for a venue schedule"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML file with engine configuration
    #[arg(long, global = true)]
    config: Option<String>,

    /// Minimum minutes between booking start times (overrides config)
    #[arg(long, global = true, value_parser = buffer_arg)]
    buffer: Option<i64>,

    /// Opening hour, 0-23 (overrides config)
    #[arg(long, global = true)]
    open: Option<u32>,

    /// Closing hour, 0-23 (overrides config)
    #[arg(long, global = true)]
    close: Option<u32>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a requested start time; suggests alternatives on conflict
    Check {
        /// Requested start time (e.g. 2026-03-16T09:30)
        #[arg(long, value_parser = timestamp_arg)]
        start: NaiveDateTime,
        /// Requested length in minutes
        #[arg(long, default_value_t = 120, value_parser = duration_arg)]
        duration: i64,
        /// Id of the booking being updated, ignored during the check
        #[arg(long)]
        exclude: Option<String>,
        /// Use buffered interval overlap instead of start distance
        #[arg(long)]
        strict: bool,
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// List the next available start times after a preferred one
    Suggest {
        /// Preferred start time
        #[arg(long, value_parser = timestamp_arg)]
        start: NaiveDateTime,
        /// Requested length in minutes
        #[arg(long, default_value_t = 120, value_parser = duration_arg)]
        duration: i64,
        /// Number of suggestions (overrides config)
        #[arg(long)]
        count: Option<usize>,
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// List every open slot of a day within business hours
    Slots {
        /// Day to scan (e.g. 2026-03-16)
        #[arg(long, value_parser = date_arg)]
        day: NaiveDate,
        /// Slot length in minutes (overrides config)
        #[arg(long, value_parser = duration_arg)]
        slot_duration: Option<i64>,
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Show a booking's footprint including its buffer
    Window {
        /// Booking start time
        #[arg(long, value_parser = timestamp_arg)]
        start: NaiveDateTime,
        /// Booking length in minutes
        #[arg(long, default_value_t = 120, value_parser = duration_arg)]
        duration: i64,
    },
    /// Print whether a time falls inside business hours
    Hours {
        /// Time to test
        #[arg(long, value_parser = timestamp_arg)]
        at: NaiveDateTime,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    debug!(?config, "resolved engine configuration");
    let scheduler = Scheduler::new(config);

    match cli.command {
        Commands::Check {
            start,
            duration,
            exclude,
            strict,
            input,
        } => {
            let existing = read_bookings(input.as_deref())?;
            let mut candidate = CandidateRequest::new(start, duration);
            if let Some(id) = exclude {
                candidate = candidate.excluding(id);
            }

            let result = if strict {
                scheduler.evaluate_strict(&candidate, &existing)
            } else {
                scheduler.evaluate(&candidate, &existing)
            };
            print_json(&result)?;
        }
        Commands::Suggest {
            start,
            duration,
            count,
            input,
        } => {
            let existing = read_bookings(input.as_deref())?;
            let scheduler = match count {
                Some(count) => Scheduler::new(EngineConfig {
                    suggestion_count: count,
                    ..config
                }),
                None => scheduler,
            };
            let suggestions = scheduler.suggest_alternatives(start, duration, &existing);
            print_json(&suggestions)?;
        }
        Commands::Slots {
            day,
            slot_duration,
            input,
        } => {
            let existing = read_bookings(input.as_deref())?;
            let slots = match slot_duration {
                Some(minutes) => scheduler.available_slots_for(day, &existing, minutes),
                None => scheduler.available_slots(day, &existing),
            };
            print_json(&slots)?;
        }
        Commands::Window { start, duration } => {
            print_json(&scheduler.booking_window(start, duration))?;
        }
        Commands::Hours { at } => {
            print_json(&json!(scheduler.is_within_business_hours(at)))?;
        }
    }

    Ok(())
}

/// Log to stderr so JSON on stdout stays clean. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Start from the config file (or defaults), then apply flag overrides.
fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            EngineConfig::from_toml_str(&raw)
                .with_context(|| format!("Failed to load config file: {}", path))?
        }
        None => EngineConfig::default(),
    };

    if let Some(buffer) = cli.buffer {
        config.buffer_minutes = buffer;
    }
    if cli.open.is_some() || cli.close.is_some() {
        let start = cli.open.unwrap_or(config.business_hours.start_hour());
        let end = cli.close.unwrap_or(config.business_hours.end_hour());
        config.business_hours =
            BusinessHours::new(start, end).context("Invalid --open/--close hours")?;
    }

    Ok(config)
}

fn read_bookings(path: Option<&str>) -> Result<Vec<ExistingBooking>> {
    let raw = read_input(path)?;
    let bookings: Vec<ExistingBooking> =
        serde_json::from_str(&raw).context("Failed to parse bookings JSON")?;
    debug!(count = bookings.len(), "loaded existing bookings");
    Ok(bookings)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", pretty);
    Ok(())
}

fn timestamp_arg(s: &str) -> std::result::Result<NaiveDateTime, String> {
    parse_timestamp(s).map_err(|e| e.to_string())
}

fn duration_arg(s: &str) -> std::result::Result<i64, String> {
    minutes_arg("duration", s)
}

fn buffer_arg(s: &str) -> std::result::Result<i64, String> {
    minutes_arg("buffer", s)
}

fn minutes_arg(name: &'static str, s: &str) -> std::result::Result<i64, String> {
    let minutes: i64 = s
        .parse()
        .map_err(|e| format!("'{}' is not a whole number of minutes: {}", s, e))?;
    minutes_in_range(name, minutes).map_err(|e| e.to_string())
}

fn date_arg(s: &str) -> std::result::Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}
