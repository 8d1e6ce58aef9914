//! Window filter: decides which records contribute to a report.
//!
//! One rule set for every entity kind: a record is kept when its
//! reporting date falls inside the window, its responsible doctor
//! matches the requested doctor (if any), and it is not excluded by
//! the "inactive" flag.

use chrono::{Months, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::DEFAULT_WINDOW_MONTHS;
use crate::models::*;

/// Inclusive `[start, end]` date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    /// The last `DEFAULT_WINDOW_MONTHS` months up to `now`.
    pub fn default_at(now: NaiveDateTime) -> Self {
        let start = now
            .checked_sub_months(Months::new(DEFAULT_WINDOW_MONTHS))
            .unwrap_or(NaiveDateTime::MIN);
        Self { start, end: now }
    }

    /// Every representable date.
    pub fn unbounded() -> Self {
        Self {
            start: NaiveDateTime::MIN,
            end: NaiveDateTime::MAX,
        }
    }

    pub fn contains(&self, date: &NaiveDateTime) -> bool {
        *date >= self.start && *date <= self.end
    }
}

/// A `ReportFilter` with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowFilter {
    pub window: TimeWindow,
    pub doctor_id: Option<Uuid>,
    pub exclude_inactive: bool,
}

impl WindowFilter {
    /// Resolves an optional caller filter against `now`.
    ///
    /// Missing bounds fall back to the default window independently.
    /// An absent filter never excludes inactive records.
    pub fn resolve(filter: Option<&ReportFilter>, now: NaiveDateTime) -> Self {
        let default = TimeWindow::default_at(now);
        match filter {
            None => Self {
                window: default,
                doctor_id: None,
                exclude_inactive: false,
            },
            Some(f) => Self {
                window: TimeWindow {
                    start: f.start_date.unwrap_or(default.start),
                    end: f.end_date.unwrap_or(default.end),
                },
                doctor_id: f.doctor_id,
                exclude_inactive: !f.include_inactive,
            },
        }
    }

    /// Like [`resolve`](Self::resolve), but only the bounds the caller
    /// gives restrict anything: an absent filter keeps every record.
    /// Used by the client history, which must see future appointments.
    pub fn resolve_open(filter: Option<&ReportFilter>) -> Self {
        let open = TimeWindow::unbounded();
        match filter {
            None => Self {
                window: open,
                doctor_id: None,
                exclude_inactive: false,
            },
            Some(f) => Self {
                window: TimeWindow {
                    start: f.start_date.unwrap_or(open.start),
                    end: f.end_date.unwrap_or(open.end),
                },
                doctor_id: f.doctor_id,
                exclude_inactive: !f.include_inactive,
            },
        }
    }

    pub fn includes<R: ClinicalRecord>(&self, record: &R) -> bool {
        if !self.window.contains(&record.record_date()) {
            return false;
        }
        if let Some(doctor_id) = self.doctor_id {
            if record.responsible_doctor_id() != doctor_id {
                return false;
            }
        }
        !(self.exclude_inactive && record.is_inactive())
    }

    /// Keeps only the records this filter includes, preserving order.
    pub fn apply<R: ClinicalRecord>(&self, records: Vec<R>) -> Vec<R> {
        records.into_iter().filter(|r| self.includes(r)).collect()
    }
}

/// The three facts the window filter needs from any record kind.
pub trait ClinicalRecord {
    fn record_date(&self) -> NaiveDateTime;
    fn responsible_doctor_id(&self) -> Uuid;

    /// Whether "exclude inactive" drops this record. Kinds without an
    /// active concept (appointments, observations, progress notes) never are.
    fn is_inactive(&self) -> bool {
        false
    }
}

impl ClinicalRecord for ClinicalObservation {
    fn record_date(&self) -> NaiveDateTime {
        self.observation_date
    }
    fn responsible_doctor_id(&self) -> Uuid {
        self.recorded_by_doctor_id
    }
}

impl ClinicalRecord for Symptom {
    fn record_date(&self) -> NaiveDateTime {
        self.date_reported
    }
    fn responsible_doctor_id(&self) -> Uuid {
        self.added_by_doctor_id
    }
    fn is_inactive(&self) -> bool {
        !self.is_active
    }
}

impl ClinicalRecord for Diagnosis {
    fn record_date(&self) -> NaiveDateTime {
        self.date_diagnosed
    }
    fn responsible_doctor_id(&self) -> Uuid {
        self.diagnosed_by_doctor_id
    }
    fn is_inactive(&self) -> bool {
        !self.is_active
    }
}

impl ClinicalRecord for Appointment {
    fn record_date(&self) -> NaiveDateTime {
        self.appointment_date
    }
    fn responsible_doctor_id(&self) -> Uuid {
        self.doctor_id
    }
}

impl ClinicalRecord for Prescription {
    fn record_date(&self) -> NaiveDateTime {
        self.start_date
    }
    fn responsible_doctor_id(&self) -> Uuid {
        self.prescribed_by_doctor_id
    }
    fn is_inactive(&self) -> bool {
        !self.is_active
    }
}

impl ClinicalRecord for Treatment {
    fn record_date(&self) -> NaiveDateTime {
        self.start_date
    }
    fn responsible_doctor_id(&self) -> Uuid {
        self.provided_by_doctor_id
    }
    fn is_inactive(&self) -> bool {
        !self.has_status(TreatmentStatus::Active)
    }
}

impl ClinicalRecord for Progress {
    fn record_date(&self) -> NaiveDateTime {
        self.date_recorded
    }
    fn responsible_doctor_id(&self) -> Uuid {
        self.recorded_by_doctor_id
    }
}

impl ClinicalRecord for Recommendation {
    fn record_date(&self) -> NaiveDateTime {
        self.date_given
    }
    fn responsible_doctor_id(&self) -> Uuid {
        self.doctor_id
    }
    fn is_inactive(&self) -> bool {
        !self.is_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn symptom(date: NaiveDateTime, doctor: Uuid, active: bool) -> Symptom {
        Symptom {
            id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            added_by_doctor_id: doctor,
            name: "Cough".into(),
            description: None,
            severity_level: 3,
            date_reported: date,
            date_resolved: None,
            is_active: active,
            notes: None,
        }
    }

    fn appointment(date: NaiveDateTime, doctor: Uuid) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            doctor_id: doctor,
            title: "Check-up".into(),
            description: None,
            appointment_date: date,
            start_time: chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: chrono::NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            status: "Cancelled".into(),
            location: None,
        }
    }

    fn treatment(status: &str) -> Treatment {
        Treatment {
            id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            provided_by_doctor_id: Uuid::new_v4(),
            title: "Therapy".into(),
            description: String::new(),
            status: status.into(),
            start_date: at(2024, 2, 1),
            end_date: None,
            diagnosis_id: None,
            prescription_id: None,
            next_appointment_id: None,
        }
    }

    #[test]
    fn default_window_is_six_months_back() {
        let now = at(2024, 8, 31);
        let window = TimeWindow::default_at(now);
        assert_eq!(window.start, at(2024, 2, 29));
        assert_eq!(window.end, now);
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let window = TimeWindow { start: at(2024, 1, 1), end: at(2024, 2, 1) };
        assert!(window.contains(&at(2024, 1, 1)));
        assert!(window.contains(&at(2024, 2, 1)));
        assert!(!window.contains(&at(2024, 2, 2)));
    }

    #[test]
    fn absent_filter_keeps_inactive_records() {
        let now = at(2024, 3, 1);
        let filter = WindowFilter::resolve(None, now);
        assert!(!filter.exclude_inactive);
        assert!(filter.includes(&symptom(at(2024, 2, 1), Uuid::new_v4(), false)));
    }

    #[test]
    fn partial_bounds_fall_back_to_default() {
        let now = at(2024, 3, 1);
        let report_filter = ReportFilter {
            start_date: Some(at(2020, 1, 1)),
            ..ReportFilter::default()
        };
        let filter = WindowFilter::resolve(Some(&report_filter), now);
        assert_eq!(filter.window.start, at(2020, 1, 1));
        assert_eq!(filter.window.end, now);
    }

    #[test]
    fn exclude_inactive_drops_inactive_symptom_and_non_active_treatment() {
        let now = at(2024, 3, 1);
        let filter = WindowFilter::resolve(Some(&ReportFilter::default()), now);
        assert!(filter.exclude_inactive);
        assert!(!filter.includes(&symptom(at(2024, 2, 1), Uuid::new_v4(), false)));
        assert!(filter.includes(&symptom(at(2024, 2, 1), Uuid::new_v4(), true)));
        assert!(!filter.includes(&treatment("On Hold")));
        assert!(filter.includes(&treatment("Active")));
    }

    #[test]
    fn exclude_inactive_never_drops_appointments() {
        let now = at(2024, 3, 1);
        let filter = WindowFilter::resolve(Some(&ReportFilter::default()), now);
        assert!(filter.includes(&appointment(at(2024, 2, 1), Uuid::new_v4())));
    }

    #[test]
    fn doctor_filter_matches_responsible_doctor() {
        let now = at(2024, 3, 1);
        let doctor = Uuid::new_v4();
        let report_filter = ReportFilter {
            doctor_id: Some(doctor),
            include_inactive: true,
            ..ReportFilter::default()
        };
        let filter = WindowFilter::resolve(Some(&report_filter), now);
        let kept = filter.apply(vec![
            appointment(at(2024, 2, 1), doctor),
            appointment(at(2024, 2, 2), Uuid::new_v4()),
        ]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].doctor_id, doctor);
    }

    #[test]
    fn records_outside_window_are_dropped() {
        let now = at(2024, 3, 1);
        let filter = WindowFilter::resolve(None, now);
        assert!(!filter.includes(&appointment(at(2023, 8, 1), Uuid::new_v4())));
        assert!(!filter.includes(&appointment(at(2024, 3, 2), Uuid::new_v4())));
    }

    #[test]
    fn open_resolution_keeps_future_records() {
        let filter = WindowFilter::resolve_open(None);
        assert!(filter.includes(&appointment(at(2030, 1, 1), Uuid::new_v4())));
        assert!(filter.includes(&appointment(at(1990, 1, 1), Uuid::new_v4())));
    }

    #[test]
    fn open_resolution_honours_given_bounds() {
        let report_filter = ReportFilter {
            end_date: Some(at(2024, 1, 1)),
            include_inactive: true,
            ..ReportFilter::default()
        };
        let filter = WindowFilter::resolve_open(Some(&report_filter));
        assert!(filter.includes(&appointment(at(2000, 1, 1), Uuid::new_v4())));
        assert!(!filter.includes(&appointment(at(2024, 1, 2), Uuid::new_v4())));
    }
}
