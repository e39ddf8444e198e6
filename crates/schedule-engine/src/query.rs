//! Appointment filtering and ordering.
//!
//! Date filters compare calendar days in the query's zone. The single-date and
//! date-range queries share that rule, so `by_doctor_and_date_range(x, d, d)`
//! returns exactly what `by_doctor_and_date(x, d)` returns.

use chrono::{Datelike, Duration, NaiveDate};
use chrono_tz::Tz;

use crate::dst;
use crate::error::{Result, ScheduleError};
use crate::model::Appointment;
use crate::overlap::Span;

/// Read-only query view over an appointment collection.
#[derive(Debug, Clone, Copy)]
pub struct AppointmentQuery<'a> {
    appointments: &'a [Appointment],
    tz: Tz,
}

impl<'a> AppointmentQuery<'a> {
    pub fn new(appointments: &'a [Appointment], tz: Tz) -> Self {
        Self { appointments, tz }
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Local calendar day an appointment starts on.
    pub fn start_date(&self, appointment: &Appointment) -> NaiveDate {
        dst::local_date(appointment.start_time, self.tz)
    }

    /// All appointments for `doctor_id`, in source order.
    pub fn by_doctor(&self, doctor_id: &str) -> Vec<&'a Appointment> {
        let found: Vec<&'a Appointment> = self
            .appointments
            .iter()
            .filter(|a| a.doctor_id == doctor_id)
            .collect();
        tracing::debug!(doctor_id, count = found.len(), "appointments by doctor");
        found
    }

    /// Appointments for `doctor_id` starting on local day `date`.
    pub fn by_doctor_and_date(&self, doctor_id: &str, date: NaiveDate) -> Vec<&'a Appointment> {
        let found: Vec<&'a Appointment> = self
            .appointments
            .iter()
            .filter(|a| a.doctor_id == doctor_id && self.start_date(a) == date)
            .collect();
        tracing::debug!(doctor_id, %date, count = found.len(), "appointments by doctor and date");
        found
    }

    /// Appointments for `doctor_id` starting on a local day within
    /// `[start_date, end_date]`, both ends inclusive. An inverted range is empty.
    pub fn by_doctor_and_date_range(
        &self,
        doctor_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Vec<&'a Appointment> {
        let found: Vec<&'a Appointment> = self
            .appointments
            .iter()
            .filter(|a| {
                let day = self.start_date(a);
                a.doctor_id == doctor_id && start_date <= day && day <= end_date
            })
            .collect();
        tracing::debug!(
            doctor_id,
            %start_date,
            %end_date,
            count = found.len(),
            "appointments by doctor and date range"
        );
        found
    }

    /// Monday-to-Sunday week containing `date`.
    pub fn by_doctor_and_week(&self, doctor_id: &str, date: NaiveDate) -> Vec<&'a Appointment> {
        let days = week_days(date);
        self.by_doctor_and_date_range(doctor_id, days[0], days[6])
    }
}

/// A new sequence ordered by start time. Equal starts keep input order.
pub fn sort_by_start_time<A: Span + Clone>(items: &[A]) -> Vec<A> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|a| a.start());
    sorted
}

/// True if, after sorting by start, any item starts before its predecessor
/// ends.
///
/// Only adjacent pairs are compared. For a yes/no answer that is complete: if
/// `i` overlaps some later `j`, then `i + 1` starts between `i.start` and
/// `j.start`, so it overlaps `i` too. Use [`crate::find_overlaps`] to list
/// every pair.
pub fn has_overlapping_appointments<A: Span + Clone>(items: &[A]) -> bool {
    sort_by_start_time(items)
        .windows(2)
        .any(|pair| pair[1].start() < pair[0].end())
}

/// The seven dates, Monday first, of the week containing `date`.
pub fn week_days(date: NaiveDate) -> [NaiveDate; 7] {
    let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    std::array::from_fn(|i| monday + Duration::days(i as i64))
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| ScheduleError::InvalidDate(format!("'{}': {}", value, e)))
}
