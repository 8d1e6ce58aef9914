use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A progress note, optionally attached to a treatment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progress {
    pub id: Uuid,
    pub client_id: Uuid,
    pub recorded_by_doctor_id: Uuid,
    pub treatment_id: Option<Uuid>,
    pub diagnosis_id: Option<Uuid>,
    pub title: String,
    pub notes: String,
    pub date_recorded: NaiveDateTime,
    pub progress_status: String,
}
