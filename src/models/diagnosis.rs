use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnosis {
    pub id: Uuid,
    pub client_id: Uuid,
    pub diagnosed_by_doctor_id: Uuid,
    pub title: String,
    pub description: String,
    pub diagnosis_code: Option<String>,
    pub severity: i32, // 1 = mild, 5 = critical
    pub status: String,
    pub date_diagnosed: NaiveDateTime,
    pub date_resolved: Option<NaiveDateTime>,
    pub is_active: bool,
}
