//! Shared state and request parsing for the HTTP handlers.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::db;
use crate::models::ReportFilter;

/// Shared handler state. Every request opens its own connection, so
/// concurrent requests share nothing mutable.
#[derive(Clone)]
pub struct ApiContext {
    pub db_path: Arc<PathBuf>,
}

impl ApiContext {
    pub fn new(db_path: PathBuf) -> Self {
        Self {
            db_path: Arc::new(db_path),
        }
    }

    pub fn open_db(&self) -> Result<Connection, ApiError> {
        db::open_database(&self.db_path).map_err(ApiError::from)
    }
}

/// Parses a path segment as a record id.
pub fn parse_id(raw: &str, what: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::BadRequest(format!("Invalid {what} id: {raw}")))
}

// ═══════════════════════════════════════════════════════════
// Report query parameters
// ═══════════════════════════════════════════════════════════

/// `?start_date&end_date&doctor_id&include_inactive`, all optional.
///
/// Dates accept `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`. A bare end date
/// covers the whole day.
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub doctor_id: Option<String>,
    pub include_inactive: Option<String>,
}

impl ReportQuery {
    fn is_empty(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.doctor_id.is_none()
            && self.include_inactive.is_none()
    }

    /// `None` when no parameter was given: the caller supplied no filter.
    pub fn into_filter(self) -> Result<Option<ReportFilter>, ApiError> {
        if self.is_empty() {
            return Ok(None);
        }

        let filter = ReportFilter {
            start_date: self
                .start_date
                .as_deref()
                .map(|s| parse_query_date(s, "start_date", false))
                .transpose()?,
            end_date: self
                .end_date
                .as_deref()
                .map(|s| parse_query_date(s, "end_date", true))
                .transpose()?,
            doctor_id: self
                .doctor_id
                .as_deref()
                .map(|s| parse_id(s, "doctor"))
                .transpose()?,
            include_inactive: match self.include_inactive.as_deref() {
                None => false,
                Some(raw) => raw.parse::<bool>().map_err(|_| {
                    ApiError::BadRequest(format!("Invalid include_inactive: {raw}"))
                })?,
            },
        };

        if let (Some(start), Some(end)) = (filter.start_date, filter.end_date) {
            if start > end {
                return Err(ApiError::BadRequest(
                    "start_date must not be after end_date".into(),
                ));
            }
        }
        Ok(Some(filter))
    }
}

fn parse_query_date(raw: &str, field: &str, end_of_day: bool) -> Result<NaiveDateTime, ApiError> {
    let raw = raw.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| {
            if end_of_day {
                d.and_hms_opt(23, 59, 59)
            } else {
                d.and_hms_opt(0, 0, 0)
            }
        })
        .ok_or_else(|| ApiError::BadRequest(format!("Invalid {field}: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_means_no_filter() {
        assert!(ReportQuery::default().into_filter().unwrap().is_none());
    }

    #[test]
    fn bare_dates_cover_whole_days() {
        let query = ReportQuery {
            start_date: Some("2024-01-01".into()),
            end_date: Some("2024-01-31".into()),
            ..Default::default()
        };
        let filter = query.into_filter().unwrap().unwrap();
        assert_eq!(filter.start_date.unwrap().to_string(), "2024-01-01 00:00:00");
        assert_eq!(filter.end_date.unwrap().to_string(), "2024-01-31 23:59:59");
        assert!(!filter.include_inactive);
    }

    #[test]
    fn datetime_and_flags_parse() {
        let doctor = Uuid::new_v4();
        let query = ReportQuery {
            start_date: Some("2024-01-01T08:30:00".into()),
            doctor_id: Some(doctor.to_string()),
            include_inactive: Some("true".into()),
            ..Default::default()
        };
        let filter = query.into_filter().unwrap().unwrap();
        assert_eq!(filter.start_date.unwrap().to_string(), "2024-01-01 08:30:00");
        assert_eq!(filter.doctor_id, Some(doctor));
        assert!(filter.include_inactive);
    }

    #[test]
    fn malformed_values_are_rejected() {
        let bad_date = ReportQuery {
            start_date: Some("01/02/2024".into()),
            ..Default::default()
        };
        assert!(matches!(bad_date.into_filter(), Err(ApiError::BadRequest(_))));

        let bad_flag = ReportQuery {
            include_inactive: Some("yes".into()),
            ..Default::default()
        };
        assert!(matches!(bad_flag.into_filter(), Err(ApiError::BadRequest(_))));

        let inverted = ReportQuery {
            start_date: Some("2024-02-01".into()),
            end_date: Some("2024-01-01".into()),
            ..Default::default()
        };
        assert!(matches!(inverted.into_filter(), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn invalid_id_is_bad_request() {
        assert!(matches!(parse_id("not-a-uuid", "client"), Err(ApiError::BadRequest(_))));
    }
}
