use std::str::FromStr;

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::AppointmentStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub client_id: Uuid,
    pub doctor_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub appointment_date: NaiveDateTime,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
    pub location: Option<String>,
}

impl Appointment {
    /// Known status, or `None` for free-text values the rules ignore.
    pub fn status_kind(&self) -> Option<AppointmentStatus> {
        AppointmentStatus::from_str(&self.status).ok()
    }

    pub fn has_status(&self, status: AppointmentStatus) -> bool {
        self.status_kind() == Some(status)
    }
}
