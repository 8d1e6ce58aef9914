//! Client timeline: every windowed record of every kind, projected into one
//! event shape and ordered newest first.

mod project;
mod types;

pub use types::*;

use std::collections::{BTreeSet, HashMap};

use uuid::Uuid;

use crate::models::Doctor;
use crate::records::ClientRecords;

/// Display name for a doctor id with no matching record.
pub const UNKNOWN_DOCTOR: &str = "Unknown";

/// Doctors referenced by a set of records, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct DoctorDirectory {
    doctors: HashMap<Uuid, Doctor>,
}

impl DoctorDirectory {
    pub fn new(doctors: impl IntoIterator<Item = Doctor>) -> Self {
        Self {
            doctors: doctors.into_iter().map(|d| (d.id, d)).collect(),
        }
    }

    pub fn get(&self, id: &Uuid) -> Option<&Doctor> {
        self.doctors.get(id)
    }

    pub fn name_of(&self, id: &Uuid) -> String {
        self.get(id)
            .map(Doctor::display_name)
            .unwrap_or_else(|| UNKNOWN_DOCTOR.to_string())
    }
}

/// All records as projection sources, in merge order: diagnoses,
/// treatments, appointments, prescriptions, symptoms, observations,
/// recommendations, progress notes.
pub fn timeline_sources(records: &ClientRecords) -> Vec<TimelineSource<'_>> {
    let mut sources = Vec::with_capacity(records.total());
    sources.extend(records.diagnoses.iter().map(TimelineSource::Diagnosis));
    sources.extend(records.treatments.iter().map(TimelineSource::Treatment));
    sources.extend(records.appointments.iter().map(TimelineSource::Appointment));
    sources.extend(records.prescriptions.iter().map(TimelineSource::Prescription));
    sources.extend(records.symptoms.iter().map(TimelineSource::Symptom));
    sources.extend(records.observations.iter().map(TimelineSource::Observation));
    sources.extend(records.recommendations.iter().map(TimelineSource::Recommendation));
    sources.extend(records.progress_notes.iter().map(TimelineSource::Progress));
    sources
}

/// Distinct doctor ids the timeline needs names for.
pub fn referenced_doctor_ids(records: &ClientRecords) -> BTreeSet<Uuid> {
    timeline_sources(records)
        .iter()
        .map(TimelineSource::responsible_doctor_id)
        .collect()
}

/// Projects and merges all records, newest first.
///
/// The sort is stable: events sharing a date keep merge order.
/// No deduplication across kinds.
pub fn merge_timeline(records: &ClientRecords, doctors: &DoctorDirectory) -> Vec<TimelineEvent> {
    let mut events: Vec<TimelineEvent> = timeline_sources(records)
        .iter()
        .map(|source| source.project(doctors))
        .collect();
    events.sort_by(|a, b| b.event_date.cmp(&a.event_date));
    events
}

// ── Tests ──────────────────────────────────────────────────────────────────
