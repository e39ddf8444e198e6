//! Plain-text tables for the `schedule` subcommands.

use chrono::NaiveDate;
use chrono_tz::Tz;
use schedule_engine::model::{Appointment, Doctor};
use schedule_engine::{
    display, AppointmentRow, ClockFormat, DaySchedule, Overlap, TimelineEntry, WeekSchedule,
};
use serde::Serialize;

pub const NO_DAY_APPOINTMENTS: &str = "No appointments scheduled for this day";
pub const NO_WEEK_APPOINTMENTS: &str = "No appointments scheduled for this week";
pub const NO_OVERLAPS: &str = "No overlapping appointments";

/// Result of the `overlaps` subcommand.
#[derive(Debug, Serialize)]
pub struct OverlapReport<'a> {
    pub doctor_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub overlapping: bool,
    pub pairs: Vec<Overlap<&'a Appointment>>,
}

pub fn doctors(doctors: &[Doctor]) -> String {
    let rows: Vec<Vec<String>> = doctors
        .iter()
        .map(|d| vec![d.id.clone(), d.name.clone(), d.specialty.clone()])
        .collect();
    table(&["Id", "Name", "Specialty"], &rows)
}

pub fn day(day: &DaySchedule) -> String {
    let body = if day.rows.is_empty() {
        NO_DAY_APPOINTMENTS.to_string()
    } else {
        let rows: Vec<Vec<String>> = day.rows.iter().map(columns).collect();
        table(&["Time", "Patient", "Type", "Duration", "Status"], &rows)
    };
    format!("{}\n{}\n\n{}", day.heading, day.doctor, body)
}

pub fn week(week: &WeekSchedule) -> String {
    let heading = format!(
        "{} to {}",
        display::date_heading(week.week_start),
        display::date_heading(week.week_end)
    );
    let body = if week.rows.is_empty() {
        NO_WEEK_APPOINTMENTS.to_string()
    } else {
        let rows: Vec<Vec<String>> = week
            .rows
            .iter()
            .map(|row| {
                let mut cells = vec![row.day_label.clone().unwrap_or_default()];
                cells.extend(columns(row));
                cells
            })
            .collect();
        table(
            &["Day", "Time", "Patient", "Type", "Duration", "Status"],
            &rows,
        )
    };
    format!("{}\n{}\n\n{}", heading, week.doctor, body)
}

/// One line per slot; `-` marks a free slot.
pub fn timeline(entries: &[TimelineEntry]) -> String {
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| {
            let booked = if entry.rows.is_empty() {
                "-".to_string()
            } else {
                entry
                    .rows
                    .iter()
                    .map(|r| format!("{} ({})", r.patient, r.type_label))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            vec![entry.slot.label.clone(), booked]
        })
        .collect();
    table(&["Slot", "Appointments"], &rows)
}

pub fn overlaps(report: &OverlapReport<'_>, tz: Tz, clock: ClockFormat) -> String {
    if !report.overlapping {
        return NO_OVERLAPS.to_string();
    }

    let span = |a: &Appointment| display::time_range_label(a.start_time, a.end_time, tz, clock);
    report
        .pairs
        .iter()
        .map(|o| {
            format!(
                "{} ({}) overlaps {} ({}) by {} min",
                o.first.id,
                span(o.first),
                o.second.id,
                span(o.second),
                o.overlap_minutes
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn columns(row: &AppointmentRow) -> Vec<String> {
    vec![
        row.time_label.clone(),
        row.patient.clone(),
        row.type_label.clone(),
        format!("{} min", row.duration_minutes),
        row.status_label.clone(),
    ]
}

/// Left-aligned columns separated by two spaces, with a dashed rule under the header.
fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let rule = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("  ");
    let mut out = vec![line(headers.to_vec()), rule];
    out.extend(rows.iter().map(|r| line(r.iter().map(String::as_str).collect())));
    out.join("\n")
}
