//! Where a [`Dataset`] comes from.
//!
//! A source that cannot produce data at all fails with
//! [`ScheduleError::DataUnavailable`]. That is separate from a dataset that
//! loads fine but holds no matching appointments.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::dataset::Dataset;
use crate::error::{Result, ScheduleError};
use crate::model::{Appointment, AppointmentStatus, AppointmentType, Doctor, Patient};

/// Something that can hand out a dataset snapshot.
pub trait AppointmentSource {
    /// Human-readable name used in error messages.
    fn name(&self) -> String;

    fn load(&self) -> Result<Dataset>;
}

/// Reads a dataset from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AppointmentSource for JsonFileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Dataset> {
        let json = std::fs::read_to_string(&self.path).map_err(|e| {
            ScheduleError::DataUnavailable {
                source_name: self.name(),
                reason: e.to_string(),
            }
        })?;
        tracing::debug!(path = %self.path.display(), bytes = json.len(), "read dataset file");
        Dataset::from_json(&json)
    }
}

/// Built-in demo data: three doctors, six patients and a week of
/// appointments starting on `week_start`.
#[derive(Debug, Clone, Copy)]
pub struct MockSource {
    week_start: NaiveDate,
}

impl MockSource {
    pub fn new(week_start: NaiveDate) -> Self {
        Self { week_start }
    }

    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }
}

impl Default for MockSource {
    /// Anchored on Monday 2026-03-02 so the demo output is reproducible.
    fn default() -> Self {
        Self::new(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap_or_default())
    }
}

impl AppointmentSource for MockSource {
    fn name(&self) -> String {
        "mock".to_string()
    }

    fn load(&self) -> Result<Dataset> {
        Ok(mock_dataset(self.week_start))
    }
}

fn doctor(id: &str, name: &str, specialty: &str) -> Doctor {
    Doctor {
        id: id.to_string(),
        name: name.to_string(),
        specialty: specialty.to_string(),
    }
}

fn patient(id: &str, name: &str, contact: Option<&str>) -> Patient {
    Patient {
        id: id.to_string(),
        name: name.to_string(),
        contact: contact.map(str::to_string),
    }
}

/// The demo dataset. Times are UTC wall-clock times on `week_start + day`.
///
/// Doctor `doc-1` has an overlapping pair on Monday morning; `doc-3` has no
/// appointments at all.
pub fn mock_dataset(week_start: NaiveDate) -> Dataset {
    let at = |day: i64, hour: i64, minute: i64| -> DateTime<Utc> {
        (week_start + Duration::days(day))
            .and_time(NaiveTime::MIN)
            .and_utc()
            + Duration::hours(hour)
            + Duration::minutes(minute)
    };

    let appt = |id: &str,
                doctor_id: &str,
                patient_id: &str,
                day: i64,
                (sh, sm): (i64, i64),
                (eh, em): (i64, i64),
                kind: AppointmentType,
                status: AppointmentStatus| Appointment {
        id: id.to_string(),
        doctor_id: doctor_id.to_string(),
        patient_id: patient_id.to_string(),
        start_time: at(day, sh, sm),
        end_time: at(day, eh, em),
        kind,
        status,
    };

    use AppointmentStatus::*;
    use AppointmentType::*;

    Dataset {
        doctors: vec![
            doctor("doc-1", "Sarah Chen", "Cardiology"),
            doctor("doc-2", "Michael Rodriguez", "Pediatrics"),
            doctor("doc-3", "Emily Johnson", "General Practice"),
        ],
        patients: vec![
            patient("pat-1", "John Smith", Some("555-0101")),
            patient("pat-2", "Maria Garcia", Some("555-0102")),
            patient("pat-3", "David Lee", None),
            patient("pat-4", "Aisha Khan", Some("555-0104")),
            patient("pat-5", "Tom Becker", None),
            patient("pat-6", "Lucia Rossi", Some("555-0106")),
        ],
        appointments: vec![
            // doc-1, Monday
            appt("apt-1", "doc-1", "pat-1", 0, (9, 0), (9, 30), Checkup, Scheduled),
            appt("apt-2", "doc-1", "pat-2", 0, (9, 15), (9, 45), Consultation, Scheduled),
            appt("apt-3", "doc-1", "pat-3", 0, (10, 0), (10, 30), FollowUp, Scheduled),
            appt("apt-4", "doc-1", "pat-4", 0, (14, 0), (15, 0), Procedure, Completed),
            // doc-1, rest of the week
            appt("apt-5", "doc-1", "pat-5", 1, (11, 0), (11, 30), Checkup, Cancelled),
            appt("apt-6", "doc-1", "pat-6", 2, (8, 30), (9, 0), FollowUp, Scheduled),
            appt("apt-7", "doc-1", "pat-1", 4, (16, 0), (17, 0), Consultation, NoShow),
            // doc-2
            appt("apt-8", "doc-2", "pat-3", 0, (9, 0), (9, 45), Checkup, Scheduled),
            appt("apt-9", "doc-2", "pat-2", 3, (13, 0), (13, 30), FollowUp, Completed),
            appt("apt-10", "doc-2", "pat-6", 5, (10, 0), (11, 30), Procedure, Scheduled),
        ],
    }
}
