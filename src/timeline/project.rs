use crate::window::ClinicalRecord;

use super::types::*;
use super::DoctorDirectory;

fn active_label(is_active: bool, inactive: &str) -> String {
    if is_active { "Active" } else { inactive }.to_string()
}

impl TimelineSource<'_> {
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Diagnosis(_) => EventType::Diagnosis,
            Self::Treatment(_) => EventType::Treatment,
            Self::Appointment(_) => EventType::Appointment,
            Self::Prescription(_) => EventType::Prescription,
            Self::Symptom(_) => EventType::Symptom,
            Self::Observation(_) => EventType::ClinicalObservation,
            Self::Recommendation(_) => EventType::Recommendation,
            Self::Progress(_) => EventType::ProgressNote,
        }
    }

    fn record(&self) -> &dyn ClinicalRecord {
        match self {
            Self::Diagnosis(r) => *r,
            Self::Treatment(r) => *r,
            Self::Appointment(r) => *r,
            Self::Prescription(r) => *r,
            Self::Symptom(r) => *r,
            Self::Observation(r) => *r,
            Self::Recommendation(r) => *r,
            Self::Progress(r) => *r,
        }
    }

    pub fn responsible_doctor_id(&self) -> uuid::Uuid {
        self.record().responsible_doctor_id()
    }

    /// Projects the record into the common event shape.
    pub fn project(&self, doctors: &DoctorDirectory) -> TimelineEvent {
        let (title, description, status, related_id) = match self {
            Self::Diagnosis(d) => (
                d.title.clone(),
                d.description.clone(),
                Some(d.status.clone()),
                d.id,
            ),
            Self::Treatment(t) => (
                t.title.clone(),
                t.description.clone(),
                Some(t.status.clone()),
                t.id,
            ),
            Self::Appointment(a) => (
                a.title.clone(),
                a.description.clone().unwrap_or_default(),
                Some(a.status.clone()),
                a.id,
            ),
            Self::Prescription(p) => (
                p.medication_name.clone(),
                format!("{}, {}", p.dosage, p.frequency),
                Some(p.status.clone()),
                p.id,
            ),
            Self::Symptom(s) => (
                s.name.clone(),
                s.description.clone().unwrap_or_default(),
                Some(active_label(s.is_active, "Resolved")),
                s.id,
            ),
            Self::Observation(o) => (o.observation_type.clone(), o.value.clone(), None, o.id),
            Self::Recommendation(r) => (
                r.title.clone(),
                r.description.clone(),
                Some(active_label(r.is_active, "Inactive")),
                r.id,
            ),
            Self::Progress(p) => (
                p.title.clone(),
                p.notes.clone(),
                Some(p.progress_status.clone()),
                p.id,
            ),
        };

        TimelineEvent {
            event_date: self.record().record_date(),
            event_type: self.event_type(),
            title,
            description,
            status,
            doctor_name: doctors.name_of(&self.responsible_doctor_id()),
            related_id: Some(related_id),
        }
    }
}
