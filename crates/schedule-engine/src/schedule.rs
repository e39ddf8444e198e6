//! Day, week and timeline rows for a doctor's calendar.
//!
//! This is the layer a renderer consumes: appointments selected through
//! [`AppointmentQuery`], sorted, and labelled with patient names, clock times,
//! durations and badge colors.

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::Serialize;

use crate::dataset::Dataset;
use crate::display::{self, BadgeColor, ClockFormat, UNKNOWN_PATIENT};
use crate::model::{Appointment, AppointmentStatus, AppointmentType};
use crate::overlap::{self, Overlap};
use crate::query::{self, AppointmentQuery};
use crate::timeslot::{self, SlotWindow, TimeSlot};

/// One table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentRow {
    pub id: String,
    /// `"Mon Mar 2"`; only set on week rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_label: Option<String>,
    pub time_label: String,
    pub patient_id: String,
    pub patient: String,
    #[serde(rename = "type")]
    pub kind: AppointmentType,
    pub type_label: String,
    pub duration_minutes: i64,
    pub status: AppointmentStatus,
    pub status_label: String,
    pub patient_badge: BadgeColor,
    pub type_badge: BadgeColor,
    pub status_badge: BadgeColor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    /// `"Mon Mar 02 2026"`
    pub heading: String,
    /// `"Dr. Name - Specialty"`, or the no-doctor placeholder.
    pub doctor: String,
    pub rows: Vec<AppointmentRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekSchedule {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub doctor: String,
    pub rows: Vec<AppointmentRow>,
}

/// A slot and the appointments active during it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub slot: TimeSlot,
    pub rows: Vec<AppointmentRow>,
}

/// Builds schedule rows from a dataset in one zone and clock style.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleView<'a> {
    dataset: &'a Dataset,
    tz: Tz,
    clock: ClockFormat,
    window: SlotWindow,
}

impl<'a> ScheduleView<'a> {
    pub fn new(dataset: &'a Dataset, tz: Tz) -> Self {
        Self {
            dataset,
            tz,
            clock: ClockFormat::default(),
            window: SlotWindow::default(),
        }
    }

    pub fn with_clock(mut self, clock: ClockFormat) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_window(mut self, window: SlotWindow) -> Self {
        self.window = window;
        self
    }

    fn query(&self) -> AppointmentQuery<'a> {
        self.dataset.query(self.tz)
    }

    fn doctor_heading(&self, doctor_id: &str) -> String {
        display::doctor_heading(self.dataset.doctor_by_id(doctor_id))
    }

    fn row(&self, appointment: &Appointment, day_label: Option<String>) -> AppointmentRow {
        let patient = self
            .dataset
            .patient_by_id(&appointment.patient_id)
            .map_or(UNKNOWN_PATIENT, |p| p.name.as_str());

        AppointmentRow {
            id: appointment.id.clone(),
            day_label,
            time_label: display::time_range_label(
                appointment.start_time,
                appointment.end_time,
                self.tz,
                self.clock,
            ),
            patient_id: appointment.patient_id.clone(),
            patient: patient.to_string(),
            kind: appointment.kind,
            type_label: display::humanize(appointment.kind.as_str()),
            duration_minutes: display::duration_minutes(
                appointment.start_time,
                appointment.end_time,
            ),
            status: appointment.status,
            status_label: display::humanize(appointment.status.as_str()),
            patient_badge: display::patient_badge(&appointment.patient_id),
            type_badge: display::type_badge(appointment.kind),
            status_badge: display::status_badge(appointment.status),
        }
    }

    /// Rows for one doctor on one local day, earliest first.
    pub fn day(&self, doctor_id: &str, date: NaiveDate) -> DaySchedule {
        let appointments =
            query::sort_by_start_time(&self.query().by_doctor_and_date(doctor_id, date));

        DaySchedule {
            date,
            heading: display::date_heading(date),
            doctor: self.doctor_heading(doctor_id),
            rows: appointments.iter().map(|a| self.row(a, None)).collect(),
        }
    }

    /// Rows for one doctor over the Monday-to-Sunday week containing `date`,
    /// grouped by day and earliest first within each day.
    pub fn week(&self, doctor_id: &str, date: NaiveDate) -> WeekSchedule {
        let days = query::week_days(date);
        let lookup = self.query();

        let rows = days
            .iter()
            .flat_map(|day| {
                let label = display::day_label(*day);
                query::sort_by_start_time(&lookup.by_doctor_and_date(doctor_id, *day))
                    .into_iter()
                    .map(move |a| self.row(a, Some(label.clone())))
            })
            .collect();

        WeekSchedule {
            week_start: days[0],
            week_end: days[6],
            doctor: self.doctor_heading(doctor_id),
            rows,
        }
    }

    /// Every slot of the day with the doctor's appointments active in it. An
    /// appointment spanning several slots shows up in each.
    pub fn timeline(&self, doctor_id: &str, date: NaiveDate) -> Vec<TimelineEntry> {
        let appointments =
            query::sort_by_start_time(&self.query().by_doctor_and_date(doctor_id, date));

        timeslot::generate_time_slots_with(date, self.tz, &self.window, self.clock)
            .into_iter()
            .map(|slot| {
                let rows = appointments
                    .iter()
                    .filter(|a| overlap::overlaps(&slot, *a))
                    .map(|a| self.row(a, None))
                    .collect();
                TimelineEntry { slot, rows }
            })
            .collect()
    }

    /// Overlapping pairs among the doctor's appointments on the given days.
    pub fn overlaps(
        &self,
        doctor_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Vec<Overlap<&'a Appointment>> {
        let appointments = self
            .query()
            .by_doctor_and_date_range(doctor_id, start_date, end_date);
        overlap::find_overlaps(&appointments)
    }
}
