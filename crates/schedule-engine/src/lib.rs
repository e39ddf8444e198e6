//! # schedule-engine
//!
//! Deterministic time slots, overlap checks and appointment queries for a
//! doctor's day and week calendar.
//!
//! Everything here is a pure function over read-only records. Collections are
//! borrowed, never owned by a service object, and "local time" is always an
//! explicit IANA zone from `chrono-tz` rather than the process zone.
//!
//! ## Modules
//!
//! - [`model`] — Appointment, Doctor, Patient records
//! - [`dst`] — Wall-clock resolution across DST gaps and folds
//! - [`timeslot`] — Half-hour slot generation for one calendar day
//! - [`overlap`] — Slot membership predicate and pairwise overlap detection
//! - [`query`] — Filtering by doctor, date and date range; sorting
//! - [`dataset`] — In-memory collections with id lookups
//! - [`source`] — Mock and JSON-file data sources
//! - [`display`] — Badge colors, clock labels, durations
//! - [`schedule`] — Day, week and timeline rows for presentation
//! - [`error`] — Error types

pub mod dataset;
pub mod display;
pub mod dst;
pub mod error;
pub mod model;
pub mod overlap;
pub mod query;
pub mod schedule;
pub mod source;
pub mod timeslot;

pub use dataset::Dataset;
pub use display::ClockFormat;
pub use dst::parse_timezone;
pub use error::ScheduleError;
pub use model::{Appointment, AppointmentStatus, AppointmentType, Doctor, Patient};
pub use overlap::{appointments_for_slot, find_overlaps, overlaps, Overlap, Span};
pub use query::{
    has_overlapping_appointments, parse_date, sort_by_start_time, week_days, AppointmentQuery,
};
pub use schedule::{AppointmentRow, DaySchedule, ScheduleView, TimelineEntry, WeekSchedule};
pub use source::{AppointmentSource, JsonFileSource, MockSource};
pub use timeslot::{generate_time_slots, generate_time_slots_with, SlotWindow, TimeSlot};
