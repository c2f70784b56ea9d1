//! `dispo` CLI — browse and export weekly availability from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Show the week containing today (dataset on stdin)
//! cat disponibilities.json | dispo week
//!
//! # Show the week after the one containing a given date
//! dispo week -i disponibilities.json --today 2025-09-01 --page 1
//!
//! # Save the visible week as an export document
//! dispo export -i disponibilities.json -o semaine.json
//!
//! # Use a simpler buffer policy
//! dispo --policy symmetric week -i disponibilities.json
//!
//! # Find a date's position in the dataset
//! dispo locate -i disponibilities.json --date 2025-09-04
//! ```
//!
//! Set `RUST_LOG=debug` to see skipped slots and per-day results on stderr.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use dispo_engine::{BufferPolicy, Dataset, DayAvailability, EngineConfig, Schedule};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dispo",
    version,
    about = "Weekly hourly availability from a schedule dataset"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Buffer policy, named as in the config file's `buffer_policy`
    #[arg(long, global = true)]
    policy: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the visible week
    Week {
        /// Dataset file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Date used to pick the initial week (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Weeks to move from the initial week (negative pages back)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        page: i32,
    },
    /// Write the visible week as a JSON export document
    Export {
        /// Dataset file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Date used to pick the initial week (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Weeks to move from the initial week (negative pages back)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        page: i32,
    },
    /// Print the index of a date in the dataset
    Locate {
        /// Dataset file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Date to look up (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(cli.config.as_deref(), cli.policy.as_deref())?;
    tracing::debug!(?config, "configuration resolved");

    match cli.command {
        Commands::Week { input, today, page } => {
            let schedule = load_schedule(input.as_deref(), today, page, &config)?;
            let window = schedule.window();
            if schedule.visible().is_empty() {
                println!("No days in dataset");
                return Ok(());
            }
            println!(
                "Days {}-{} of {}",
                window.offset() + 1,
                window.offset() + schedule.visible().len(),
                window.total_days()
            );
            for day in schedule.visible() {
                println!("{}", render_day(day));
            }
        }
        Commands::Export {
            input,
            output,
            today,
            page,
        } => {
            let schedule = load_schedule(input.as_deref(), today, page, &config)?;
            let json = dispo_engine::export::to_json(&schedule.export_visible())
                .context("Failed to serialize export")?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Locate { input, date } => {
            let json = read_input(input.as_deref())?;
            let dataset = Dataset::from_json(&json).context("Failed to parse dataset")?;
            match dispo_engine::locate(dataset.days(), date) {
                Some(idx) => println!("{}", idx),
                None => println!("not found"),
            }
        }
    }

    Ok(())
}

/// Build the engine configuration from `--config` and `--policy`.
///
/// - The config file, when given, supplies the base values
/// - `--policy` overrides the file's `buffer_policy`
fn build_config(path: Option<&str>, policy: Option<&str>) -> Result<EngineConfig> {
    let mut config = match path {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    if let Some(name) = policy {
        config.buffer_policy = parse_policy(name)?;
    }

    Ok(config)
}

/// Parse a policy by its configuration name, e.g. `pre-course`.
fn parse_policy(name: &str) -> Result<BufferPolicy> {
    serde_json::from_value(serde_json::Value::String(name.to_string())).map_err(|_| {
        let available: Vec<String> = BufferPolicy::ALL
            .iter()
            .filter_map(|p| serde_json::to_value(p).ok())
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect();
        anyhow::anyhow!(
            "Unknown buffer policy: '{}'. Available policies: {}",
            name,
            available.join(", ")
        )
    })
}

/// Load and process the dataset, then page `page` weeks from today's week.
fn load_schedule(
    input: Option<&str>,
    today: Option<NaiveDate>,
    page: i32,
    config: &EngineConfig,
) -> Result<Schedule> {
    let json = read_input(input)?;
    // Read the clock once; paging below is relative to this date.
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let mut schedule =
        Schedule::from_json(&json, today, config).context("Failed to load schedule")?;

    for _ in 0..page.unsigned_abs() {
        if page > 0 {
            schedule.next();
        } else {
            schedule.prev();
        }
    }

    Ok(schedule)
}

/// One line per day: date, label, count and the free ranges.
fn render_day(day: &DayAvailability) -> String {
    let ranges = if day.has_availability() {
        day.free_ranges()
            .iter()
            .map(|r| format!("{:02}:00-{:02}:00", r.start, r.end))
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        "no availability".to_string()
    };
    format!(
        "{}  {:<10} {:>2}h  {}",
        day.date(),
        day.weekday_label(),
        day.available_count(),
        ranges
    )
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

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
