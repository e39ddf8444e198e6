//! Appointment, doctor and patient records.
//!
//! Field names serialize in camelCase and enum values in kebab-case, so a
//! dataset file reads like `{"doctorId": "doc-1", "type": "follow-up"}`.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// What kind of visit an appointment is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentType {
    Checkup,
    Consultation,
    FollowUp,
    Procedure,
}

impl AppointmentType {
    pub const ALL: [AppointmentType; 4] = [
        AppointmentType::Checkup,
        AppointmentType::Consultation,
        AppointmentType::FollowUp,
        AppointmentType::Procedure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentType::Checkup => "checkup",
            AppointmentType::Consultation => "consultation",
            AppointmentType::FollowUp => "follow-up",
            AppointmentType::Procedure => "procedure",
        }
    }
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::NoShow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::NoShow => "no-show",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A booking between a doctor and a patient.
///
/// `start_time` always precedes `end_time`. Records built through
/// [`Appointment::new`] or loaded through a [`crate::Dataset`] are checked;
/// struct literals are trusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub doctor_id: String,
    pub patient_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: AppointmentType,
    #[serde(default)]
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Build a scheduled appointment, rejecting an empty or inverted span.
    pub fn new(
        id: impl Into<String>,
        doctor_id: impl Into<String>,
        patient_id: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        kind: AppointmentType,
    ) -> Result<Self> {
        let appointment = Self {
            id: id.into(),
            doctor_id: doctor_id.into(),
            patient_id: patient_id.into(),
            start_time,
            end_time,
            kind,
            status: AppointmentStatus::Scheduled,
        };
        appointment.validate()?;
        Ok(appointment)
    }

    pub fn with_status(mut self, status: AppointmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Check the `start < end` invariant.
    pub fn validate(&self) -> Result<()> {
        if self.start_time >= self.end_time {
            return Err(ScheduleError::InvalidAppointment {
                id: self.id.clone(),
                reason: format!(
                    "start {} is not before end {}",
                    self.start_time.to_rfc3339(),
                    self.end_time.to_rfc3339()
                ),
            });
        }
        Ok(())
    }

    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

/// An appointment with its doctor and patient resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopulatedAppointment {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub doctor: Doctor,
    pub patient: Patient,
}
