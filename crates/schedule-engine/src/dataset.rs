//! In-memory doctor, patient and appointment collections.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Appointment, Doctor, Patient, PopulatedAppointment};
use crate::query::AppointmentQuery;

/// A read-only snapshot of everything a schedule view needs.
///
/// Appointments may reference doctors or patients that are not present;
/// lookups return `None` and renderers fall back to a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub doctors: Vec<Doctor>,
    #[serde(default)]
    pub patients: Vec<Patient>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

impl Dataset {
    /// Build a dataset, checking every appointment's `start < end`.
    pub fn new(
        doctors: Vec<Doctor>,
        patients: Vec<Patient>,
        appointments: Vec<Appointment>,
    ) -> Result<Self> {
        let dataset = Self {
            doctors,
            patients,
            appointments,
        };
        dataset.validate()?;
        Ok(dataset)
    }

    /// Parse a `{"doctors": [...], "patients": [...], "appointments": [...]}`
    /// document.
    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        dataset.validate()?;
        tracing::debug!(
            doctors = dataset.doctors.len(),
            patients = dataset.patients.len(),
            appointments = dataset.appointments.len(),
            "parsed dataset"
        );
        Ok(dataset)
    }

    pub fn validate(&self) -> Result<()> {
        self.appointments.iter().try_for_each(Appointment::validate)
    }

    pub fn all_doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn doctor_by_id(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    pub fn patient_by_id(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    /// The appointment with its doctor and patient, or `None` if either is
    /// unknown.
    pub fn populate(&self, appointment: &Appointment) -> Option<PopulatedAppointment> {
        let doctor = self.doctor_by_id(&appointment.doctor_id)?;
        let patient = self.patient_by_id(&appointment.patient_id)?;
        Some(PopulatedAppointment {
            appointment: appointment.clone(),
            doctor: doctor.clone(),
            patient: patient.clone(),
        })
    }

    /// Query view over this dataset's appointments in zone `tz`.
    pub fn query(&self, tz: Tz) -> AppointmentQuery<'_> {
        AppointmentQuery::new(&self.appointments, tz)
    }
}
