use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Symptom {
    pub id: Uuid,
    pub client_id: Uuid,
    pub added_by_doctor_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub severity_level: i32, // 1-10
    pub date_reported: NaiveDateTime,
    pub date_resolved: Option<NaiveDateTime>,
    pub is_active: bool,
    pub notes: Option<String>,
}
