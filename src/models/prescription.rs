use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescription {
    pub id: Uuid,
    pub client_id: Uuid,
    pub prescribed_by_doctor_id: Uuid,
    pub medication_name: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: NaiveDateTime,
    pub end_date: Option<NaiveDateTime>,
    pub instructions: Option<String>,
    pub status: String,
    pub is_active: bool,
}
