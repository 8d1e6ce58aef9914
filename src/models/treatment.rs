use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::TreatmentStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Treatment {
    pub id: Uuid,
    pub client_id: Uuid,
    pub provided_by_doctor_id: Uuid,
    pub title: String,
    pub description: String,
    pub status: String,
    pub start_date: NaiveDateTime,
    pub end_date: Option<NaiveDateTime>,
    pub diagnosis_id: Option<Uuid>,
    pub prescription_id: Option<Uuid>,
    pub next_appointment_id: Option<Uuid>,
}

impl Treatment {
    pub fn status_kind(&self) -> Option<TreatmentStatus> {
        TreatmentStatus::from_str(&self.status).ok()
    }

    pub fn has_status(&self, status: TreatmentStatus) -> bool {
        self.status_kind() == Some(status)
    }
}
