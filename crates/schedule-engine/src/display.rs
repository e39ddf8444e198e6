//! Presentation helpers: badge colors, clock labels, durations.
//!
//! Nothing here touches the filtering logic. Colors are named after the
//! utility-class palette the calendar badges use, and [`BadgeColor::css_class`]
//! yields the full class string for web renderers.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::model::{AppointmentStatus, AppointmentType, Doctor};

/// Placeholder shown when an appointment's patient id does not resolve.
pub const UNKNOWN_PATIENT: &str = "Unknown Patient";

/// Heading shown when no doctor is selected or the id does not resolve.
pub const NO_DOCTOR: &str = "Select a doctor";

/// Modulus applied while summing patient id code units.
const HASH_MODULUS: u64 = 2_147_483_647;

/// Short clock-time style used for slot and appointment labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClockFormat {
    /// `"09:00"`, `"17:30"`
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
    /// `"09:00 AM"`, `"05:30 PM"`
    #[serde(rename = "12h")]
    TwelveHour,
}

impl ClockFormat {
    fn pattern(&self) -> &'static str {
        match self {
            ClockFormat::TwentyFourHour => "%H:%M",
            ClockFormat::TwelveHour => "%I:%M %p",
        }
    }

    /// Format an instant as a local clock time in `tz`.
    pub fn format(&self, instant: DateTime<Utc>, tz: Tz) -> String {
        instant.with_timezone(&tz).format(self.pattern()).to_string()
    }
}

impl FromStr for ClockFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "24h" | "24" => Ok(ClockFormat::TwentyFourHour),
            "12h" | "12" => Ok(ClockFormat::TwelveHour),
            _ => Err(format!(
                "Unknown clock format: '{}'. Available formats: 24h, 12h",
                s
            )),
        }
    }
}

impl fmt::Display for ClockFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockFormat::TwentyFourHour => f.write_str("24h"),
            ClockFormat::TwelveHour => f.write_str("12h"),
        }
    }
}

/// Badge color families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Blue,
    Emerald,
    Amber,
    Violet,
    Slate,
    Green,
    Rose,
    Orange,
    Cyan,
    Sky,
    Teal,
    Pink,
    Indigo,
    Lime,
}

impl BadgeColor {
    pub fn name(&self) -> &'static str {
        match self {
            BadgeColor::Blue => "blue",
            BadgeColor::Emerald => "emerald",
            BadgeColor::Amber => "amber",
            BadgeColor::Violet => "violet",
            BadgeColor::Slate => "slate",
            BadgeColor::Green => "green",
            BadgeColor::Rose => "rose",
            BadgeColor::Orange => "orange",
            BadgeColor::Cyan => "cyan",
            BadgeColor::Sky => "sky",
            BadgeColor::Teal => "teal",
            BadgeColor::Pink => "pink",
            BadgeColor::Indigo => "indigo",
            BadgeColor::Lime => "lime",
        }
    }

    /// e.g. `"bg-blue-100 text-blue-800 ring-blue-200"`
    pub fn css_class(&self) -> String {
        let n = self.name();
        format!("bg-{n}-100 text-{n}-800 ring-{n}-200")
    }
}

/// Palette patient badges are hashed into.
pub const PATIENT_PALETTE: [BadgeColor; 6] = [
    BadgeColor::Cyan,
    BadgeColor::Sky,
    BadgeColor::Teal,
    BadgeColor::Pink,
    BadgeColor::Indigo,
    BadgeColor::Lime,
];

pub fn type_badge(kind: AppointmentType) -> BadgeColor {
    match kind {
        AppointmentType::Checkup => BadgeColor::Blue,
        AppointmentType::Consultation => BadgeColor::Emerald,
        AppointmentType::FollowUp => BadgeColor::Amber,
        AppointmentType::Procedure => BadgeColor::Violet,
    }
}

pub fn status_badge(status: AppointmentStatus) -> BadgeColor {
    match status {
        AppointmentStatus::Scheduled => BadgeColor::Slate,
        AppointmentStatus::Completed => BadgeColor::Green,
        AppointmentStatus::Cancelled => BadgeColor::Rose,
        AppointmentStatus::NoShow => BadgeColor::Orange,
    }
}

/// Sum of the id's UTF-16 code units, reduced modulo 2147483647 at each step.
pub fn patient_hash(patient_id: &str) -> u64 {
    patient_id
        .encode_utf16()
        .fold(0u64, |acc, unit| (acc + u64::from(unit)) % HASH_MODULUS)
}

/// Deterministic badge color for a patient id; stable across runs.
pub fn patient_badge(patient_id: &str) -> BadgeColor {
    let idx = (patient_hash(patient_id) % PATIENT_PALETTE.len() as u64) as usize;
    PATIENT_PALETTE[idx]
}

/// Whole minutes between two instants, rounded half-up, never negative.
pub fn duration_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let millis = (end - start).num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    (millis + 30_000) / 60_000
}

/// `"follow-up"` → `"follow up"`. Only the first hyphen is replaced.
pub fn humanize(value: &str) -> String {
    value.replacen('-', " ", 1)
}

/// `"09:00 - 09:30"` in `tz`.
pub fn time_range_label(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    tz: Tz,
    clock: ClockFormat,
) -> String {
    format!("{} - {}", clock.format(start, tz), clock.format(end, tz))
}

/// `"Mon Mar 2"`
pub fn day_label(date: NaiveDate) -> String {
    date.format("%a %b %-d").to_string()
}

/// `"Mon Mar 02 2026"`
pub fn date_heading(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// `"Dr. Sarah Chen - Cardiology"`, or [`NO_DOCTOR`] when absent.
pub fn doctor_heading(doctor: Option<&Doctor>) -> String {
    match doctor {
        Some(d) => format!("Dr. {} - {}", d.name, d.specialty),
        None => NO_DOCTOR.to_string(),
    }
}
