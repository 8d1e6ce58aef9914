use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Caller-supplied restriction for reports, timelines and histories.
///
/// An absent filter (`Option::None` at the call site) means "default window,
/// every doctor, inactive records included". A present filter with
/// `include_inactive == false` drops inactive diagnoses, non-active
/// treatments, inactive symptoms, prescriptions and recommendations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportFilter {
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub doctor_id: Option<Uuid>,
    #[serde(default)]
    pub include_inactive: bool,
}

impl ReportFilter {
    /// A filter that only narrows the date range.
    pub fn between(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start_date: Some(start),
            end_date: Some(end),
            doctor_id: None,
            include_inactive: true,
        }
    }
}
