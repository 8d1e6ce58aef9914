//! Record builders for tests.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rusqlite::Connection;
use uuid::Uuid;

use crate::db;
use crate::models::*;

pub fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

/// Fixed clock for deterministic windows: 2024-03-01.
pub fn now() -> NaiveDateTime {
    at(2024, 3, 1)
}

pub fn doctor(first: &str, last: &str) -> Doctor {
    Doctor {
        id: Uuid::new_v4(),
        user_name: format!("{}.{}", first, last).to_lowercase(),
        first_name: Some(first.into()),
        last_name: Some(last.into()),
        specialization: Some("General Practice".into()),
    }
}

pub fn client(doctor_id: Option<Uuid>) -> Client {
    Client {
        id: Uuid::new_v4(),
        user_name: "jdoe".into(),
        first_name: Some("Jane".into()),
        last_name: Some("Doe".into()),
        email: Some("jane@example.com".into()),
        date_of_birth: NaiveDate::from_ymd_opt(1980, 5, 17),
        assigned_doctor_id: doctor_id,
    }
}

pub fn observation(client: &Client, doctor_id: Uuid, date: NaiveDateTime) -> ClinicalObservation {
    ClinicalObservation {
        id: Uuid::new_v4(),
        client_id: client.id,
        recorded_by_doctor_id: doctor_id,
        observation_date: date,
        height_cm: Some(170.0),
        weight_kg: Some(70.0),
        blood_pressure: Some("120/80".into()),
        heart_rate: Some(72),
        observation_type: "Vitals".into(),
        value: "Routine check".into(),
        notes: None,
    }
}

pub fn symptom(client: &Client, doctor_id: Uuid, date: NaiveDateTime, active: bool) -> Symptom {
    Symptom {
        id: Uuid::new_v4(),
        client_id: client.id,
        added_by_doctor_id: doctor_id,
        name: "Headache".into(),
        description: None,
        severity_level: 4,
        date_reported: date,
        date_resolved: None,
        is_active: active,
        notes: None,
    }
}

pub fn diagnosis(client: &Client, doctor_id: Uuid, date: NaiveDateTime, active: bool) -> Diagnosis {
    Diagnosis {
        id: Uuid::new_v4(),
        client_id: client.id,
        diagnosed_by_doctor_id: doctor_id,
        title: "Migraine".into(),
        description: "Episodic".into(),
        diagnosis_code: Some("G43".into()),
        severity: 2,
        status: "Confirmed".into(),
        date_diagnosed: date,
        date_resolved: None,
        is_active: active,
    }
}

pub fn appointment(client: &Client, doctor_id: Uuid, date: NaiveDateTime, status: &str) -> Appointment {
    Appointment {
        id: Uuid::new_v4(),
        client_id: client.id,
        doctor_id,
        title: "Follow-up".into(),
        description: Some("Review".into()),
        appointment_date: date,
        start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        status: status.into(),
        location: None,
    }
}

pub fn prescription(client: &Client, doctor_id: Uuid, date: NaiveDateTime, active: bool) -> Prescription {
    Prescription {
        id: Uuid::new_v4(),
        client_id: client.id,
        prescribed_by_doctor_id: doctor_id,
        medication_name: "Sumatriptan".into(),
        dosage: "50mg".into(),
        frequency: "As needed".into(),
        start_date: date,
        end_date: None,
        instructions: None,
        status: if active { "Active" } else { "Stopped" }.into(),
        is_active: active,
    }
}

pub fn treatment(client: &Client, doctor_id: Uuid, date: NaiveDateTime, status: &str) -> Treatment {
    Treatment {
        id: Uuid::new_v4(),
        client_id: client.id,
        provided_by_doctor_id: doctor_id,
        title: "Physiotherapy".into(),
        description: "Neck exercises".into(),
        status: status.into(),
        start_date: date,
        end_date: None,
        diagnosis_id: None,
        prescription_id: None,
        next_appointment_id: None,
    }
}

pub fn progress(client: &Client, doctor_id: Uuid, treatment_id: Option<Uuid>, date: NaiveDateTime) -> Progress {
    Progress {
        id: Uuid::new_v4(),
        client_id: client.id,
        recorded_by_doctor_id: doctor_id,
        treatment_id,
        diagnosis_id: None,
        title: "Session".into(),
        notes: "Good mobility".into(),
        date_recorded: date,
        progress_status: "Improving".into(),
    }
}

pub fn recommendation(client: &Client, doctor_id: Uuid, date: NaiveDateTime, active: bool) -> Recommendation {
    Recommendation {
        id: Uuid::new_v4(),
        client_id: client.id,
        doctor_id,
        title: "Hydration".into(),
        description: "Two litres a day".into(),
        date_given: date,
        is_active: active,
    }
}

/// A doctor and an assigned client, both persisted.
pub fn seed_client(conn: &Connection) -> (Doctor, Client) {
    let doc = doctor("Grace", "Chen");
    db::insert_doctor(conn, &doc).unwrap();
    let c = client(Some(doc.id));
    db::insert_client(conn, &c).unwrap();
    (doc, c)
}
