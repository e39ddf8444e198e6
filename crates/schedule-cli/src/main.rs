//! `schedule` CLI — day, week and slot views of a doctor's appointments.
//!
//! ## Usage
//!
//! ```sh
//! # List doctors in the built-in demo data
//! schedule doctors
//!
//! # One doctor's day, as a table
//! schedule day --doctor doc-1 --date 2026-03-02
//!
//! # The Monday-to-Sunday week containing a date, as JSON
//! schedule week --doctor doc-1 --date 2026-03-04 --json
//!
//! # Half-hour slots with the appointments active in each, 12-hour labels
//! schedule slots --doctor doc-1 --date 2026-03-02 --clock 12h
//!
//! # Overlapping appointments across a week, in another zone and dataset
//! schedule --data clinic.json --tz Europe/London overlaps --doctor doc-a --date 2026-04-06 --week
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};
use schedule_engine::{
    has_overlapping_appointments, parse_date, parse_timezone, AppointmentSource, ClockFormat,
    Dataset, JsonFileSource, MockSource, ScheduleView,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::render::OverlapReport;

#[derive(Parser)]
#[command(
    name = "schedule",
    version,
    about = "Doctor appointment schedule viewer"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dataset JSON file (uses the built-in demo data if omitted)
    #[arg(long, global = true, env = "SCHEDULE_DATA")]
    data: Option<PathBuf>,

    /// IANA timezone for calendar days and clock labels
    #[arg(long, global = true, env = "SCHEDULE_TZ", default_value = "UTC")]
    tz: String,

    /// Clock label style: 24h or 12h
    #[arg(long, global = true, default_value = "24h")]
    clock: ClockFormat,

    /// Emit JSON instead of a text table
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List all doctors
    Doctors,
    /// Appointments for one doctor on one day
    Day(Target),
    /// Appointments for one doctor over the Monday-to-Sunday week of a date
    Week(Target),
    /// Half-hour slots from 08:00 to 18:00 with the appointments active in each
    Slots(Target),
    /// Overlapping appointments on a day, or across its week
    Overlaps {
        #[command(flatten)]
        target: Target,
        /// Check the whole Monday-to-Sunday week instead of one day
        #[arg(long)]
        week: bool,
    },
}

#[derive(Args)]
struct Target {
    /// Doctor id
    #[arg(short, long)]
    doctor: String,
    /// Date as YYYY-MM-DD (defaults to today in --tz)
    #[arg(long)]
    date: Option<String>,
}

impl Target {
    fn date(&self, tz: Tz) -> Result<NaiveDate> {
        match self.date.as_deref() {
            Some(raw) => parse_date(raw).context("Failed to parse --date"),
            None => Ok(Utc::now().with_timezone(&tz).date_naive()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let tz = parse_timezone(&cli.tz).context("Failed to parse --tz")?;
    let dataset = load_dataset(cli.data.as_deref())?;
    let view = ScheduleView::new(&dataset, tz).with_clock(cli.clock);

    let output = match &cli.command {
        Commands::Doctors => emit(cli.json, dataset.all_doctors(), render::doctors)?,
        Commands::Day(target) => {
            let day = view.day(&target.doctor, target.date(tz)?);
            emit(cli.json, &day, render::day)?
        }
        Commands::Week(target) => {
            let week = view.week(&target.doctor, target.date(tz)?);
            emit(cli.json, &week, render::week)?
        }
        Commands::Slots(target) => {
            let timeline = view.timeline(&target.doctor, target.date(tz)?);
            emit(cli.json, timeline.as_slice(), render::timeline)?
        }
        Commands::Overlaps { target, week } => {
            let date = target.date(tz)?;
            let (start_date, end_date) = if *week {
                let days = schedule_engine::week_days(date);
                (days[0], days[6])
            } else {
                (date, date)
            };
            let candidates = dataset
                .query(tz)
                .by_doctor_and_date_range(&target.doctor, start_date, end_date);
            let report = OverlapReport {
                doctor_id: target.doctor.clone(),
                start_date,
                end_date,
                overlapping: has_overlapping_appointments(&candidates),
                pairs: view.overlaps(&target.doctor, start_date, end_date),
            };
            emit(cli.json, &report, |r| render::overlaps(r, tz, cli.clock))?
        }
    };

    println!("{}", output);
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_dataset(path: Option<&Path>) -> Result<Dataset> {
    let source: Box<dyn AppointmentSource> = match path {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(MockSource::default()),
    };

    let dataset = source
        .load()
        .with_context(|| format!("Failed to load dataset from {}", source.name()))?;
    tracing::debug!(
        source = %source.name(),
        doctors = dataset.doctors.len(),
        appointments = dataset.appointments.len(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Pretty JSON when `json` is set, otherwise the text rendering.
fn emit<T: Serialize + ?Sized>(
    json: bool,
    value: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<String> {
    if json {
        serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")
    } else {
        Ok(text(value))
    }
}
