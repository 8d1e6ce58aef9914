use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a numeric series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Stable,
    Increasing,
    Decreasing,
}

/// One point of a derived series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub date: NaiveDateTime,
    pub value: f64,
    pub label: Option<String>,
}

impl DataPoint {
    pub fn new(date: NaiveDateTime, value: f64) -> Self {
        Self { date, value, label: None }
    }

    pub fn labelled(date: NaiveDateTime, value: f64, label: impl Into<String>) -> Self {
        Self {
            date,
            value,
            label: Some(label.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalStatistics {
    pub current: f64,
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub change: f64,
    pub trend: Trend,
}

/// Per-vital series and summaries. A vital no record carries has an
/// empty series and `None` statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClinicalObservationTrends {
    pub weight_trend: Vec<DataPoint>,
    pub weight_stats: Option<VitalStatistics>,
    pub heart_rate_trend: Vec<DataPoint>,
    pub heart_rate_stats: Option<VitalStatistics>,
    pub blood_pressure_systolic_trend: Vec<DataPoint>,
    pub blood_pressure_systolic_stats: Option<VitalStatistics>,
    pub blood_pressure_diastolic_trend: Vec<DataPoint>,
    pub blood_pressure_diastolic_stats: Option<VitalStatistics>,
    pub bmi_trend: Vec<DataPoint>,
    pub bmi_stats: Option<VitalStatistics>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomTrend {
    pub symptom_name: String,
    /// "Active" if any occurrence is still active, else "Resolved".
    pub status: String,
    pub intensity_over_time: Vec<DataPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomFrequency {
    pub symptom_name: String,
    pub occurrences: u32,
    pub average_severity: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SymptomAnalytics {
    pub total_symptoms: u32,
    pub active_symptoms: u32,
    pub resolved_symptoms: u32,
    pub resolution_rate: f64,
    pub average_resolution_time_in_days: Option<f64>,
    pub symptom_intensity_trends: Vec<SymptomTrend>,
    pub most_common_symptoms: Vec<SymptomFrequency>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentAnalytics {
    pub total_appointments: u32,
    pub completed_appointments: u32,
    pub cancelled_appointments: u32,
    pub missed_appointments: u32,
    pub attendance_rate: f64,
    /// One point per `(year, month)`, dated the first of the month.
    pub appointment_frequency: Vec<DataPoint>,
    pub average_days_between_appointments: Option<f64>,
    pub next_scheduled_appointment: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentProgressItem {
    pub treatment_id: Uuid,
    pub treatment_name: String,
    pub status: String,
    pub progress_percentage: u8,
    pub progress_history: Vec<DataPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreatmentProgress {
    pub active_treatments: u32,
    pub completed_treatments: u32,
    pub completion_rate: f64,
    pub treatment_progress_items: Vec<TreatmentProgressItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthFactor {
    pub name: String,
    pub score: u8,
    pub impact: Impact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthTrend {
    Improving,
    Stable,
    Declining,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallHealthScore {
    pub current_score: u8,
    pub trend: HealthTrend,
    pub factors: Vec<HealthFactor>,
}

/// Complete analytics report for one client over one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientAnalytics {
    pub client_id: Uuid,
    pub client_name: String,
    pub analysis_period_start: NaiveDateTime,
    pub analysis_period_end: NaiveDateTime,
    pub clinical_observation_trends: ClinicalObservationTrends,
    pub symptom_analytics: SymptomAnalytics,
    pub appointment_analytics: AppointmentAnalytics,
    pub treatment_progress: TreatmentProgress,
    pub health_score: OverallHealthScore,
}
