//! Client history: the windowed record lists for one client plus a
//! count-and-dates summary.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::*;
use crate::records::ClientRecords;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub total_diagnoses: u32,
    pub active_diagnoses: u32,
    pub total_treatments: u32,
    pub active_treatments: u32,
    pub total_appointments: u32,
    /// Completed, or already in the past whatever the status.
    pub completed_appointments: u32,
    /// From now on and not cancelled.
    pub upcoming_appointments: u32,
    pub total_prescriptions: u32,
    pub active_prescriptions: u32,
    pub total_symptoms: u32,
    pub active_symptoms: u32,
    pub total_observations: u32,
    pub total_recommendations: u32,
    pub total_progress_notes: u32,
    pub last_appointment_date: Option<NaiveDateTime>,
    pub next_appointment_date: Option<NaiveDateTime>,
    pub last_observation_date: Option<NaiveDateTime>,
    pub current_doctors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientHistory {
    pub client: Client,
    pub diagnoses: Vec<Diagnosis>,
    pub treatments: Vec<Treatment>,
    pub appointments: Vec<Appointment>,
    pub prescriptions: Vec<Prescription>,
    pub symptoms: Vec<Symptom>,
    pub observations: Vec<ClinicalObservation>,
    pub recommendations: Vec<Recommendation>,
    pub progress_notes: Vec<Progress>,
    pub summary: HistorySummary,
}

fn count<T>(items: &[T], pred: impl Fn(&T) -> bool) -> u32 {
    items.iter().filter(|&item| pred(item)).count() as u32
}

pub fn summarize_history(
    records: &ClientRecords,
    assigned_doctor: Option<&Doctor>,
    now: NaiveDateTime,
) -> HistorySummary {
    let appointments = &records.appointments;
    let is_upcoming = |a: &Appointment| {
        a.appointment_date >= now && !a.has_status(AppointmentStatus::Cancelled)
    };

    HistorySummary {
        total_diagnoses: records.diagnoses.len() as u32,
        active_diagnoses: count(&records.diagnoses, |d| d.is_active),
        total_treatments: records.treatments.len() as u32,
        active_treatments: count(&records.treatments, |t| t.has_status(TreatmentStatus::Active)),
        total_appointments: appointments.len() as u32,
        completed_appointments: count(appointments, |a| {
            a.has_status(AppointmentStatus::Completed) || a.appointment_date < now
        }),
        upcoming_appointments: count(appointments, &is_upcoming),
        total_prescriptions: records.prescriptions.len() as u32,
        active_prescriptions: count(&records.prescriptions, |p| p.is_active),
        total_symptoms: records.symptoms.len() as u32,
        active_symptoms: count(&records.symptoms, |s| s.is_active),
        total_observations: records.observations.len() as u32,
        total_recommendations: records.recommendations.len() as u32,
        total_progress_notes: records.progress_notes.len() as u32,
        last_appointment_date: appointments
            .iter()
            .map(|a| a.appointment_date)
            .filter(|date| *date < now)
            .max(),
        next_appointment_date: appointments
            .iter()
            .filter(|&a| is_upcoming(a))
            .map(|a| a.appointment_date)
            .min(),
        last_observation_date: records.observations.iter().map(|o| o.observation_date).max(),
        current_doctors: assigned_doctor
            .map(|d| vec![d.display_name_with_specialization()])
            .unwrap_or_default(),
    }
}

pub fn build_client_history(
    client: Client,
    records: ClientRecords,
    assigned_doctor: Option<&Doctor>,
    now: NaiveDateTime,
) -> ClientHistory {
    let summary = summarize_history(&records, assigned_doctor, now);
    ClientHistory {
        client,
        diagnoses: records.diagnoses,
        treatments: records.treatments,
        appointments: records.appointments,
        prescriptions: records.prescriptions,
        symptoms: records.symptoms,
        observations: records.observations,
        recommendations: records.recommendations,
        progress_notes: records.progress_notes,
        summary,
    }
}
