use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub user_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub specialization: Option<String>,
}

impl Doctor {
    /// `"{first} {last}"`, trimmed. Used on every timeline event.
    pub fn display_name(&self) -> String {
        super::join_name(self.first_name.as_deref(), self.last_name.as_deref())
    }

    /// Display name with the specialization in parentheses, as listed
    /// under "current doctors" in a history summary.
    pub fn display_name_with_specialization(&self) -> String {
        format!(
            "{} {} ({})",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or(""),
            self.specialization.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }
}
