//! Count-based analytics over symptoms, appointments and treatments.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::config::MOST_COMMON_SYMPTOMS_LIMIT;
use crate::models::*;

use super::types::*;
use super::vitals::mean;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Fractional days between two instants.
fn days_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_seconds() as f64 / SECONDS_PER_DAY
}

fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    f64::from(part) / f64::from(whole) * 100.0
}

// ═══════════════════════════════════════════
// Symptoms
// ═══════════════════════════════════════════

/// Groups symptoms by exact (case-sensitive) name, keeping the order in
/// which each name is first encountered.
fn group_by_name(symptoms: &[Symptom]) -> Vec<(&str, Vec<&Symptom>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&Symptom>)> = Vec::new();
    for symptom in symptoms {
        let name = symptom.name.as_str();
        match index.get(name) {
            Some(&i) => groups[i].1.push(symptom),
            None => {
                index.insert(name, groups.len());
                groups.push((name, vec![symptom]));
            }
        }
    }
    groups
}

pub fn build_symptom_analytics(symptoms: &[Symptom]) -> SymptomAnalytics {
    let total = symptoms.len() as u32;
    let active = symptoms.iter().filter(|s| s.is_active).count() as u32;
    let resolved = total - active;

    // Inactive without a resolved date counts as resolved but has no duration.
    let resolution_days: Vec<f64> = symptoms
        .iter()
        .filter(|s| !s.is_active)
        .filter_map(|s| s.date_resolved.map(|r| days_between(s.date_reported, r)))
        .collect();

    let groups = group_by_name(symptoms);

    let symptom_intensity_trends = groups
        .iter()
        .map(|(name, members)| {
            let mut ordered = members.clone();
            ordered.sort_by_key(|s| s.date_reported);
            let status = if members.iter().any(|s| s.is_active) {
                "Active"
            } else {
                "Resolved"
            };
            SymptomTrend {
                symptom_name: name.to_string(),
                status: status.to_string(),
                intensity_over_time: ordered
                    .iter()
                    .map(|s| {
                        let label = if s.is_active { "Active" } else { "Resolved" };
                        DataPoint::labelled(s.date_reported, f64::from(s.severity_level), label)
                    })
                    .collect(),
            }
        })
        .collect();

    let mut most_common: Vec<SymptomFrequency> = groups
        .iter()
        .map(|(name, members)| {
            let severities: Vec<f64> = members.iter().map(|s| f64::from(s.severity_level)).collect();
            SymptomFrequency {
                symptom_name: name.to_string(),
                occurrences: members.len() as u32,
                average_severity: mean(&severities),
            }
        })
        .collect();
    // Stable sort: ties keep encounter order.
    most_common.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
    most_common.truncate(MOST_COMMON_SYMPTOMS_LIMIT);

    SymptomAnalytics {
        total_symptoms: total,
        active_symptoms: active,
        resolved_symptoms: resolved,
        resolution_rate: percentage(resolved, total),
        average_resolution_time_in_days: (!resolution_days.is_empty())
            .then(|| mean(&resolution_days)),
        symptom_intensity_trends,
        most_common_symptoms: most_common,
    }
}

// ═══════════════════════════════════════════
// Appointments
// ═══════════════════════════════════════════

fn month_start(year: i32, month: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
}

pub fn build_appointment_analytics(
    appointments: &[Appointment],
    now: NaiveDateTime,
) -> AppointmentAnalytics {
    let count = |status: AppointmentStatus| {
        appointments.iter().filter(|a| a.has_status(status)).count() as u32
    };
    let total = appointments.len() as u32;
    let completed = count(AppointmentStatus::Completed);

    let mut per_month: BTreeMap<(i32, u32), u32> = BTreeMap::new();
    for a in appointments {
        let key = (a.appointment_date.year(), a.appointment_date.month());
        *per_month.entry(key).or_default() += 1;
    }
    let appointment_frequency = per_month
        .into_iter()
        .filter_map(|((year, month), n)| {
            month_start(year, month)
                .map(|date| DataPoint::labelled(date, f64::from(n), format!("{year:04}-{month:02}")))
        })
        .collect();

    let mut dates: Vec<NaiveDateTime> = appointments.iter().map(|a| a.appointment_date).collect();
    dates.sort();
    let gaps: Vec<f64> = dates.windows(2).map(|w| days_between(w[0], w[1])).collect();

    let next_scheduled_appointment = appointments
        .iter()
        .filter(|a| a.appointment_date > now && !a.has_status(AppointmentStatus::Cancelled))
        .map(|a| a.appointment_date)
        .min();

    AppointmentAnalytics {
        total_appointments: total,
        completed_appointments: completed,
        cancelled_appointments: count(AppointmentStatus::Cancelled),
        missed_appointments: count(AppointmentStatus::Missed),
        attendance_rate: percentage(completed, total),
        appointment_frequency,
        average_days_between_appointments: (!gaps.is_empty()).then(|| mean(&gaps)),
        next_scheduled_appointment,
    }
}

// ═══════════════════════════════════════════
// Treatments
// ═══════════════════════════════════════════

/// Progress percentage of one treatment, 0..=100.
pub fn treatment_progress_percentage(
    treatment: &Treatment,
    progress_notes: usize,
    now: NaiveDateTime,
) -> u8 {
    match treatment.status_kind() {
        Some(TreatmentStatus::Completed) => 100,
        Some(TreatmentStatus::Cancelled) => 0,
        _ => match treatment.end_date {
            Some(end) => {
                let total = days_between(treatment.start_date, end);
                if total <= 0.0 {
                    return 100;
                }
                let elapsed = days_between(treatment.start_date, now);
                (elapsed / total * 100.0).clamp(0.0, 100.0) as u8
            }
            None => (progress_notes.saturating_mul(10)).min(100) as u8,
        },
    }
}

fn progress_history(notes: &[&Progress]) -> Vec<DataPoint> {
    let count = notes.len() as f64;
    notes
        .iter()
        .enumerate()
        .map(|(i, p)| {
            DataPoint::labelled(
                p.date_recorded,
                (i + 1) as f64 / count * 100.0,
                p.progress_status.clone(),
            )
        })
        .collect()
}

pub fn build_treatment_progress(
    treatments: &[Treatment],
    progress: &[Progress],
    now: NaiveDateTime,
) -> TreatmentProgress {
    let mut notes_by_treatment: HashMap<Uuid, Vec<&Progress>> = HashMap::new();
    for note in progress {
        if let Some(treatment_id) = note.treatment_id {
            notes_by_treatment.entry(treatment_id).or_default().push(note);
        }
    }
    for notes in notes_by_treatment.values_mut() {
        notes.sort_by_key(|p| p.date_recorded);
    }

    let total = treatments.len() as u32;
    let active = treatments
        .iter()
        .filter(|t| t.has_status(TreatmentStatus::Active))
        .count() as u32;
    let completed = treatments
        .iter()
        .filter(|t| t.has_status(TreatmentStatus::Completed))
        .count() as u32;

    let items = treatments
        .iter()
        .map(|t| {
            let notes = notes_by_treatment
                .get(&t.id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            TreatmentProgressItem {
                treatment_id: t.id,
                treatment_name: t.title.clone(),
                status: t.status.clone(),
                progress_percentage: treatment_progress_percentage(t, notes.len(), now),
                progress_history: progress_history(notes),
            }
        })
        .collect();

    TreatmentProgress {
        active_treatments: active,
        completed_treatments: completed,
        completion_rate: percentage(completed, total),
        treatment_progress_items: items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn now() -> NaiveDateTime {
        at(2024, 3, 1)
    }

    fn symptom(name: &str, severity: i32, reported: NaiveDateTime, active: bool) -> Symptom {
        Symptom {
            id: Uuid::new_v4(),
            client_id: Uuid::nil(),
            added_by_doctor_id: Uuid::nil(),
            name: name.into(),
            description: None,
            severity_level: severity,
            date_reported: reported,
            date_resolved: None,
            is_active: active,
            notes: None,
        }
    }

    fn appointment(date: NaiveDateTime, status: &str) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            client_id: Uuid::nil(),
            doctor_id: Uuid::nil(),
            title: "Checkup".into(),
            description: None,
            appointment_date: date,
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            status: status.into(),
            location: None,
        }
    }

    fn treatment(status: &str, start: NaiveDateTime, end: Option<NaiveDateTime>) -> Treatment {
        Treatment {
            id: Uuid::new_v4(),
            client_id: Uuid::nil(),
            provided_by_doctor_id: Uuid::nil(),
            title: "Physiotherapy".into(),
            description: String::new(),
            status: status.into(),
            start_date: start,
            end_date: end,
            diagnosis_id: None,
            prescription_id: None,
            next_appointment_id: None,
        }
    }

    fn note(treatment_id: Uuid, date: NaiveDateTime, status: &str) -> Progress {
        Progress {
            id: Uuid::new_v4(),
            client_id: Uuid::nil(),
            recorded_by_doctor_id: Uuid::nil(),
            treatment_id: Some(treatment_id),
            diagnosis_id: None,
            title: "Session".into(),
            notes: String::new(),
            date_recorded: date,
            progress_status: status.into(),
        }
    }

    // ── Symptoms ───────────────────────────────────────────────────────

    #[test]
    fn no_symptoms_has_zero_resolution_rate() {
        let analytics = build_symptom_analytics(&[]);
        assert_eq!(analytics.total_symptoms, 0);
        assert_eq!(analytics.resolution_rate, 0.0);
        assert!(analytics.average_resolution_time_in_days.is_none());
        assert!(analytics.most_common_symptoms.is_empty());
    }

    #[test]
    fn one_of_three_resolved() {
        let symptoms = vec![
            symptom("Headache", 4, at(2024, 1, 1), true),
            symptom("Nausea", 3, at(2024, 1, 2), true),
            symptom("Cough", 2, at(2024, 1, 3), false),
        ];
        let analytics = build_symptom_analytics(&symptoms);
        assert_eq!(analytics.resolved_symptoms, 1);
        assert!((analytics.resolution_rate - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn resolution_time_skips_inactive_without_date() {
        let mut resolved = symptom("Cough", 2, at(2024, 1, 1), false);
        resolved.date_resolved = Some(at(2024, 1, 5));
        let undated = symptom("Fever", 6, at(2024, 1, 2), false);

        let analytics = build_symptom_analytics(&[resolved, undated]);
        assert_eq!(analytics.resolved_symptoms, 2);
        assert_eq!(analytics.average_resolution_time_in_days, Some(4.0));
    }

    #[test]
    fn grouping_is_case_sensitive() {
        let symptoms = vec![
            symptom("Headache", 4, at(2024, 1, 1), true),
            symptom("headache", 5, at(2024, 1, 2), true),
        ];
        let analytics = build_symptom_analytics(&symptoms);
        assert_eq!(analytics.symptom_intensity_trends.len(), 2);
        assert_eq!(analytics.most_common_symptoms.len(), 2);
    }

    #[test]
    fn most_common_orders_by_count_then_encounter() {
        let symptoms = vec![
            symptom("Fatigue", 3, at(2024, 1, 1), true),
            symptom("Cough", 2, at(2024, 1, 2), true),
            symptom("Cough", 4, at(2024, 1, 3), false),
            symptom("Nausea", 5, at(2024, 1, 4), true),
        ];
        let names: Vec<_> = build_symptom_analytics(&symptoms)
            .most_common_symptoms
            .into_iter()
            .map(|f| (f.symptom_name, f.occurrences, f.average_severity))
            .collect();
        assert_eq!(
            names,
            vec![
                ("Cough".to_string(), 2, 3.0),
                ("Fatigue".to_string(), 1, 3.0),
                ("Nausea".to_string(), 1, 5.0),
            ]
        );
    }

    #[test]
    fn most_common_is_capped() {
        let symptoms: Vec<_> = (0..12)
            .map(|i| symptom(&format!("S{i}"), 1, at(2024, 1, 1), true))
            .collect();
        let analytics = build_symptom_analytics(&symptoms);
        assert_eq!(analytics.most_common_symptoms.len(), MOST_COMMON_SYMPTOMS_LIMIT);
        assert_eq!(analytics.most_common_symptoms[0].symptom_name, "S0");
    }

    #[test]
    fn intensity_series_is_chronological_and_labelled() {
        let symptoms = vec![
            symptom("Pain", 7, at(2024, 2, 1), true),
            symptom("Pain", 4, at(2024, 1, 1), false),
        ];
        let trends = build_symptom_analytics(&symptoms).symptom_intensity_trends;
        assert_eq!(trends.len(), 1);
        assert_eq!(trends[0].status, "Active");
        let series = &trends[0].intensity_over_time;
        assert_eq!(series[0].value, 4.0);
        assert_eq!(series[0].label.as_deref(), Some("Resolved"));
        assert_eq!(series[1].value, 7.0);
    }

    // ── Appointments ───────────────────────────────────────────────────

    #[test]
    fn attendance_rate_two_of_four() {
        let appointments = vec![
            appointment(at(2024, 1, 1), "Completed"),
            appointment(at(2024, 1, 8), "Completed"),
            appointment(at(2024, 1, 15), "Missed"),
            appointment(at(2024, 1, 22), "Cancelled"),
        ];
        let analytics = build_appointment_analytics(&appointments, now());
        assert_eq!(analytics.attendance_rate, 50.0);
        assert_eq!(analytics.missed_appointments, 1);
        assert_eq!(analytics.cancelled_appointments, 1);
        assert_eq!(analytics.average_days_between_appointments, Some(7.0));
    }

    #[test]
    fn no_appointments_is_defined() {
        let analytics = build_appointment_analytics(&[], now());
        assert_eq!(analytics.attendance_rate, 0.0);
        assert!(analytics.average_days_between_appointments.is_none());
        assert!(analytics.next_scheduled_appointment.is_none());
        assert!(analytics.appointment_frequency.is_empty());
    }

    #[test]
    fn single_appointment_has_no_average_gap() {
        let analytics = build_appointment_analytics(&[appointment(at(2024, 1, 1), "Completed")], now());
        assert!(analytics.average_days_between_appointments.is_none());
    }

    #[test]
    fn monthly_histogram_is_keyed_by_year_and_month() {
        let appointments = vec![
            appointment(at(2024, 2, 10), "Completed"),
            appointment(at(2023, 12, 5), "Completed"),
            appointment(at(2024, 2, 20), "Scheduled"),
        ];
        let frequency = build_appointment_analytics(&appointments, now()).appointment_frequency;
        assert_eq!(frequency.len(), 2);
        assert_eq!(frequency[0].label.as_deref(), Some("2023-12"));
        assert_eq!(frequency[0].date, month_start(2023, 12).unwrap());
        assert_eq!(frequency[0].date.time(), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        assert_eq!(frequency[1].value, 2.0);
    }

    #[test]
    fn next_appointment_skips_cancelled_and_past() {
        let appointments = vec![
            appointment(at(2024, 2, 1), "Scheduled"),
            appointment(at(2024, 3, 10), "Cancelled"),
            appointment(at(2024, 4, 1), "Scheduled"),
            appointment(at(2024, 3, 20), "Rescheduled"),
        ];
        let analytics = build_appointment_analytics(&appointments, now());
        assert_eq!(analytics.next_scheduled_appointment, Some(at(2024, 3, 20)));
    }

    // ── Treatments ─────────────────────────────────────────────────────

    #[test]
    fn completed_is_full_regardless_of_dates() {
        let t = treatment("Completed", at(2024, 2, 1), Some(at(2025, 1, 1)));
        assert_eq!(treatment_progress_percentage(&t, 0, now()), 100);
    }

    #[test]
    fn cancelled_is_zero_regardless_of_notes() {
        let t = treatment("Cancelled", at(2023, 1, 1), Some(at(2023, 2, 1)));
        assert_eq!(treatment_progress_percentage(&t, 9, now()), 0);
    }

    #[test]
    fn dated_treatment_uses_elapsed_fraction() {
        let t = treatment("Active", at(2024, 2, 1), Some(at(2024, 3, 31)));
        // 29 of 59 days elapsed.
        assert_eq!(treatment_progress_percentage(&t, 0, now()), 49);
    }

    #[test]
    fn dated_treatment_is_clamped() {
        let overdue = treatment("Active", at(2023, 1, 1), Some(at(2023, 6, 1)));
        assert_eq!(treatment_progress_percentage(&overdue, 0, now()), 100);
        let future = treatment("Active", at(2024, 6, 1), Some(at(2024, 12, 1)));
        assert_eq!(treatment_progress_percentage(&future, 0, now()), 0);
        let zero_length = treatment("On Hold", at(2024, 2, 1), Some(at(2024, 2, 1)));
        assert_eq!(treatment_progress_percentage(&zero_length, 0, now()), 100);
    }

    #[test]
    fn undated_treatment_counts_progress_notes() {
        let t = treatment("Active", at(2024, 1, 1), None);
        assert_eq!(treatment_progress_percentage(&t, 3, now()), 30);
        assert_eq!(treatment_progress_percentage(&t, 14, now()), 100);
    }

    #[test]
    fn progress_history_is_rank_fraction() {
        let t = treatment("Active", at(2024, 1, 1), None);
        let notes = vec![
            note(t.id, at(2024, 1, 20), "Improving"),
            note(t.id, at(2024, 1, 10), "Started"),
            note(t.id, at(2024, 2, 1), "Stable"),
            note(t.id, at(2024, 2, 10), "Good"),
        ];
        let progress = build_treatment_progress(std::slice::from_ref(&t), &notes, now());
        let history = &progress.treatment_progress_items[0].progress_history;
        let values: Vec<f64> = history.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![25.0, 50.0, 75.0, 100.0]);
        assert_eq!(history[0].label.as_deref(), Some("Started"));
        assert_eq!(progress.treatment_progress_items[0].progress_percentage, 40);
    }

    #[test]
    fn completion_rate_counts_statuses() {
        let treatments = vec![
            treatment("Active", at(2024, 1, 1), None),
            treatment("Completed", at(2023, 1, 1), None),
            treatment("On Hold", at(2023, 6, 1), None),
            treatment("Completed", at(2023, 3, 1), None),
        ];
        let progress = build_treatment_progress(&treatments, &[], now());
        assert_eq!(progress.active_treatments, 1);
        assert_eq!(progress.completed_treatments, 2);
        assert_eq!(progress.completion_rate, 50.0);
        assert_eq!(progress.treatment_progress_items.len(), 4);
    }
}
