//! Record providers, the read-only seam between the reporting engine
//! and whatever persists clinical data.
//!
//! Every method returns *all* records of one kind for a client, unfiltered.
//! A failing call is an error, never an empty list: conflating the two
//! would skew counts and the health score.

use rusqlite::Connection;
use uuid::Uuid;

use crate::db::{self, DatabaseError};
use crate::models::*;
use crate::window::WindowFilter;

pub trait RecordSource {
    fn client(&self, client_id: &Uuid) -> Result<Option<Client>, DatabaseError>;
    fn doctor(&self, doctor_id: &Uuid) -> Result<Option<Doctor>, DatabaseError>;
    fn clients_for_doctor(&self, doctor_id: &Uuid) -> Result<Vec<Client>, DatabaseError>;

    fn observations(&self, client_id: &Uuid) -> Result<Vec<ClinicalObservation>, DatabaseError>;
    fn symptoms(&self, client_id: &Uuid) -> Result<Vec<Symptom>, DatabaseError>;
    fn diagnoses(&self, client_id: &Uuid) -> Result<Vec<Diagnosis>, DatabaseError>;
    fn appointments(&self, client_id: &Uuid) -> Result<Vec<Appointment>, DatabaseError>;
    fn prescriptions(&self, client_id: &Uuid) -> Result<Vec<Prescription>, DatabaseError>;
    fn treatments(&self, client_id: &Uuid) -> Result<Vec<Treatment>, DatabaseError>;
    fn progress_notes(&self, client_id: &Uuid) -> Result<Vec<Progress>, DatabaseError>;
    fn recommendations(&self, client_id: &Uuid) -> Result<Vec<Recommendation>, DatabaseError>;
}

impl RecordSource for Connection {
    fn client(&self, client_id: &Uuid) -> Result<Option<Client>, DatabaseError> {
        db::get_client(self, client_id)
    }

    fn doctor(&self, doctor_id: &Uuid) -> Result<Option<Doctor>, DatabaseError> {
        db::get_doctor(self, doctor_id)
    }

    fn clients_for_doctor(&self, doctor_id: &Uuid) -> Result<Vec<Client>, DatabaseError> {
        db::get_clients_by_doctor(self, doctor_id)
    }

    fn observations(&self, client_id: &Uuid) -> Result<Vec<ClinicalObservation>, DatabaseError> {
        db::get_observations_by_client(self, client_id)
    }

    fn symptoms(&self, client_id: &Uuid) -> Result<Vec<Symptom>, DatabaseError> {
        db::get_symptoms_by_client(self, client_id)
    }

    fn diagnoses(&self, client_id: &Uuid) -> Result<Vec<Diagnosis>, DatabaseError> {
        db::get_diagnoses_by_client(self, client_id)
    }

    fn appointments(&self, client_id: &Uuid) -> Result<Vec<Appointment>, DatabaseError> {
        db::get_appointments_by_client(self, client_id)
    }

    fn prescriptions(&self, client_id: &Uuid) -> Result<Vec<Prescription>, DatabaseError> {
        db::get_prescriptions_by_client(self, client_id)
    }

    fn treatments(&self, client_id: &Uuid) -> Result<Vec<Treatment>, DatabaseError> {
        db::get_treatments_by_client(self, client_id)
    }

    fn progress_notes(&self, client_id: &Uuid) -> Result<Vec<Progress>, DatabaseError> {
        db::get_progress_by_client(self, client_id)
    }

    fn recommendations(&self, client_id: &Uuid) -> Result<Vec<Recommendation>, DatabaseError> {
        db::get_recommendations_by_client(self, client_id)
    }
}

/// Every record kind for one client, already narrowed by a [`WindowFilter`].
#[derive(Debug, Clone, Default)]
pub struct ClientRecords {
    pub observations: Vec<ClinicalObservation>,
    pub symptoms: Vec<Symptom>,
    pub diagnoses: Vec<Diagnosis>,
    pub appointments: Vec<Appointment>,
    pub prescriptions: Vec<Prescription>,
    pub treatments: Vec<Treatment>,
    pub progress_notes: Vec<Progress>,
    pub recommendations: Vec<Recommendation>,
}

impl ClientRecords {
    /// Fetches all eight kinds and applies `filter` to each.
    /// The first failing fetch aborts the whole load.
    pub fn load<S: RecordSource + ?Sized>(
        source: &S,
        client_id: &Uuid,
        filter: &WindowFilter,
    ) -> Result<Self, DatabaseError> {
        let records = Self {
            observations: filter.apply(source.observations(client_id)?),
            symptoms: filter.apply(source.symptoms(client_id)?),
            diagnoses: filter.apply(source.diagnoses(client_id)?),
            appointments: filter.apply(source.appointments(client_id)?),
            prescriptions: filter.apply(source.prescriptions(client_id)?),
            treatments: filter.apply(source.treatments(client_id)?),
            progress_notes: filter.apply(source.progress_notes(client_id)?),
            recommendations: filter.apply(source.recommendations(client_id)?),
        };
        tracing::debug!(
            client_id = %client_id,
            observations = records.observations.len(),
            symptoms = records.symptoms.len(),
            diagnoses = records.diagnoses.len(),
            appointments = records.appointments.len(),
            prescriptions = records.prescriptions.len(),
            treatments = records.treatments.len(),
            progress_notes = records.progress_notes.len(),
            recommendations = records.recommendations.len(),
            "Loaded windowed client records"
        );
        Ok(records)
    }

    pub fn total(&self) -> usize {
        self.observations.len()
            + self.symptoms.len()
            + self.diagnoses.len()
            + self.appointments.len()
            + self.prescriptions.len()
            + self.treatments.len()
            + self.progress_notes.len()
            + self.recommendations.len()
    }
}
