use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: Uuid,
    pub client_id: Uuid,
    pub doctor_id: Uuid,
    pub title: String,
    pub description: String,
    pub date_given: NaiveDateTime,
    pub is_active: bool,
}
