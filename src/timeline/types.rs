use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::*;

/// A single event on the timeline, unified across all record kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub event_date: NaiveDateTime,
    pub event_type: EventType,
    pub title: String,
    pub description: String,
    pub status: Option<String>,
    pub doctor_name: String,
    pub related_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EventType {
    Diagnosis,
    Treatment,
    Appointment,
    Prescription,
    Symptom,
    #[serde(rename = "Clinical Observation")]
    ClinicalObservation,
    Recommendation,
    #[serde(rename = "Progress Note")]
    ProgressNote,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Diagnosis => "Diagnosis",
            Self::Treatment => "Treatment",
            Self::Appointment => "Appointment",
            Self::Prescription => "Prescription",
            Self::Symptom => "Symptom",
            Self::ClinicalObservation => "Clinical Observation",
            Self::Recommendation => "Recommendation",
            Self::ProgressNote => "Progress Note",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record of any kind, borrowed for projection.
#[derive(Debug, Clone, Copy)]
pub enum TimelineSource<'a> {
    Diagnosis(&'a Diagnosis),
    Treatment(&'a Treatment),
    Appointment(&'a Appointment),
    Prescription(&'a Prescription),
    Symptom(&'a Symptom),
    Observation(&'a ClinicalObservation),
    Recommendation(&'a Recommendation),
    Progress(&'a Progress),
}
