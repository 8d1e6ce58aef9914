use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,
    pub user_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub assigned_doctor_id: Option<Uuid>,
}

impl Client {
    pub fn display_name(&self) -> String {
        super::join_name(self.first_name.as_deref(), self.last_name.as_deref())
    }
}
