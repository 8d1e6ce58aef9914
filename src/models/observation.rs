use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A clinical observation recorded by a doctor.
///
/// Height, weight and heart rate are independently optional. Anything
/// derived from them (BMI, vitals score) skips records missing an operand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalObservation {
    pub id: Uuid,
    pub client_id: Uuid,
    pub recorded_by_doctor_id: Uuid,
    pub observation_date: NaiveDateTime,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub blood_pressure: Option<String>, // "SYS/DIA"
    pub heart_rate: Option<i32>,
    pub observation_type: String,
    pub value: String,
    pub notes: Option<String>,
}
