//! Composite 0..100 health score from four 0..25 sub-scores.
//!
//! A heuristic for at-a-glance triage, not a clinical instrument.

use crate::models::*;

use super::types::*;
use super::vitals::{bmi, mean};

const MAX_FACTOR: i32 = 25;
const NO_DATA_SCORE: u8 = 15;
/// Observations considered by the vital signs factor, most recent first.
const RECENT_OBSERVATIONS: usize = 3;

pub const VITAL_SIGNS: &str = "Vital Signs";
pub const SYMPTOM_MANAGEMENT: &str = "Symptom Management";
pub const APPOINTMENT_ADHERENCE: &str = "Appointment Adherence";
pub const TREATMENT_PROGRESS: &str = "Treatment Progress";

fn clamp_factor(score: i32) -> u8 {
    score.clamp(0, MAX_FACTOR) as u8
}

pub fn vital_signs_score(observations: &[ClinicalObservation]) -> u8 {
    if observations.is_empty() {
        return NO_DATA_SCORE;
    }

    let mut recent: Vec<&ClinicalObservation> = observations.iter().collect();
    recent.sort_by(|a, b| b.observation_date.cmp(&a.observation_date));
    recent.truncate(RECENT_OBSERVATIONS);

    let mut score = MAX_FACTOR;

    let bmis: Vec<f64> = recent
        .iter()
        .filter_map(|o| bmi(o.height_cm, o.weight_kg))
        .collect();
    if !bmis.is_empty() {
        let avg = mean(&bmis);
        if !(18.5..=30.0).contains(&avg) {
            score -= 5;
        }
    }

    let heart_rates: Vec<f64> = recent
        .iter()
        .filter_map(|o| o.heart_rate.map(f64::from))
        .collect();
    if !heart_rates.is_empty() {
        let avg = mean(&heart_rates);
        if !(60.0..=100.0).contains(&avg) {
            score -= 5;
        }
    }

    clamp_factor(score)
}

pub fn symptom_score(symptoms: &[Symptom]) -> u8 {
    if symptoms.is_empty() {
        return MAX_FACTOR as u8;
    }

    let active: Vec<f64> = symptoms
        .iter()
        .filter(|s| s.is_active)
        .map(|s| f64::from(s.severity_level))
        .collect();
    let resolved = symptoms.len() - active.len();

    let mut score = MAX_FACTOR;
    if active.len() > 5 {
        score -= 5;
    }
    if !active.is_empty() && mean(&active) > 7.0 {
        score -= 5;
    }
    if resolved > active.len() {
        score += 5;
    }
    clamp_factor(score)
}

pub fn appointment_score(appointments: &[Appointment]) -> u8 {
    if appointments.is_empty() {
        return NO_DATA_SCORE;
    }
    let completed = appointments
        .iter()
        .filter(|a| a.has_status(AppointmentStatus::Completed))
        .count();
    let ratio = completed as f64 / appointments.len() as f64;
    // Halves go to the even neighbour: 2 of 4 scores 12.
    clamp_factor((ratio * f64::from(MAX_FACTOR)).round_ties_even() as i32)
}

pub fn treatment_score(treatments: &[Treatment]) -> u8 {
    if treatments.is_empty() {
        return NO_DATA_SCORE;
    }
    let active = treatments
        .iter()
        .any(|t| t.has_status(TreatmentStatus::Active));
    let completed = treatments
        .iter()
        .any(|t| t.has_status(TreatmentStatus::Completed));

    match (active, completed) {
        (true, _) => 20,
        (false, true) => 25,
        (false, false) => NO_DATA_SCORE,
    }
}

pub fn impact_for(score: u8) -> Impact {
    match score {
        20.. => Impact::Positive,
        15..=19 => Impact::Neutral,
        _ => Impact::Negative,
    }
}

pub fn trend_for(total: u8) -> HealthTrend {
    match total {
        75.. => HealthTrend::Improving,
        50..=74 => HealthTrend::Stable,
        _ => HealthTrend::Declining,
    }
}

fn factor(name: &str, score: u8) -> HealthFactor {
    HealthFactor {
        name: name.to_string(),
        score,
        impact: impact_for(score),
    }
}

pub fn calculate_health_score(
    observations: &[ClinicalObservation],
    symptoms: &[Symptom],
    appointments: &[Appointment],
    treatments: &[Treatment],
) -> OverallHealthScore {
    let factors = vec![
        factor(VITAL_SIGNS, vital_signs_score(observations)),
        factor(SYMPTOM_MANAGEMENT, symptom_score(symptoms)),
        factor(APPOINTMENT_ADHERENCE, appointment_score(appointments)),
        factor(TREATMENT_PROGRESS, treatment_score(treatments)),
    ];
    let current_score: u8 = factors.iter().map(|f| f.score).sum();

    OverallHealthScore {
        current_score,
        trend: trend_for(current_score),
        factors,
    }
}
