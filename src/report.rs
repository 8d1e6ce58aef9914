//! Report assembler: resolves the client, loads windowed records through a
//! [`RecordSource`], and hands them to the analytics, timeline and history
//! builders. Read-only; nothing here writes.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::analytics::{
    self, ClientAnalytics, ClinicalObservationTrends, HealthTrend, OverallHealthScore,
    SymptomAnalytics,
};
use crate::db::DatabaseError;
use crate::history::{self, ClientHistory, HistorySummary};
use crate::models::*;
use crate::records::{ClientRecords, RecordSource};
use crate::timeline::{self, DoctorDirectory, TimelineEvent};
use crate::window::WindowFilter;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Record fetch failed: {0}")]
    UpstreamFetchFailure(#[from] DatabaseError),
}

impl ReportError {
    fn not_found(entity_type: &str, id: &Uuid) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }
}

/// One row of a doctor's client list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientOverview {
    pub client_id: Uuid,
    pub client_name: String,
    pub health_score: u8,
    pub trend: HealthTrend,
    pub active_symptoms: u32,
    pub active_treatments: u32,
    pub next_appointment: Option<NaiveDateTime>,
}

fn current_time() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn require_client<S: RecordSource + ?Sized>(
    source: &S,
    client_id: &Uuid,
) -> Result<Client, ReportError> {
    source
        .client(client_id)?
        .ok_or_else(|| ReportError::not_found("Client", client_id))
}

/// Resolves the client, then loads its records narrowed by `window`.
/// No record provider is called for an unknown client.
fn load<S: RecordSource + ?Sized>(
    source: &S,
    client_id: &Uuid,
    window: &WindowFilter,
) -> Result<(Client, ClientRecords), ReportError> {
    let client = require_client(source, client_id)?;
    let records = ClientRecords::load(source, client_id, window)?;
    Ok((client, records))
}

// ═══════════════════════════════════════════
// Analytics
// ═══════════════════════════════════════════

pub fn build_report<S: RecordSource + ?Sized>(
    source: &S,
    client_id: &Uuid,
    filter: Option<&ReportFilter>,
) -> Result<ClientAnalytics, ReportError> {
    build_report_at(source, client_id, filter, current_time())
}

pub fn build_report_at<S: RecordSource + ?Sized>(
    source: &S,
    client_id: &Uuid,
    filter: Option<&ReportFilter>,
    now: NaiveDateTime,
) -> Result<ClientAnalytics, ReportError> {
    let window = WindowFilter::resolve(filter, now);
    let (client, records) = load(source, client_id, &window)?;
    let report = analytics::build_client_analytics(&client, &window.window, &records, now);
    tracing::info!(
        client_id = %client_id,
        health_score = report.health_score.current_score,
        records = records.total(),
        "Built analytics report"
    );
    Ok(report)
}

pub fn vital_trends<S: RecordSource + ?Sized>(
    source: &S,
    client_id: &Uuid,
    filter: Option<&ReportFilter>,
) -> Result<ClinicalObservationTrends, ReportError> {
    vital_trends_at(source, client_id, filter, Utc::now().naive_utc())
}

pub fn vital_trends_at<S: RecordSource + ?Sized>(
    source: &S,
    client_id: &Uuid,
    filter: Option<&ReportFilter>,
    now: NaiveDateTime,
) -> Result<ClinicalObservationTrends, ReportError> {
    Ok(build_report_at(source, client_id, filter, now)?.clinical_observation_trends)
}

pub fn symptom_trends<S: RecordSource + ?Sized>(
    source: &S,
    client_id: &Uuid,
    filter: Option<&ReportFilter>,
) -> Result<SymptomAnalytics, ReportError> {
    symptom_trends_at(source, client_id, filter, Utc::now().naive_utc())
}

pub fn symptom_trends_at<S: RecordSource + ?Sized>(
    source: &S,
    client_id: &Uuid,
    filter: Option<&ReportFilter>,
    now: NaiveDateTime,
) -> Result<SymptomAnalytics, ReportError> {
    Ok(build_report_at(source, client_id, filter, now)?.symptom_analytics)
}

/// Health score section only, evaluated against the current time.
pub fn health_score<S: RecordSource + ?Sized>(
    source: &S,
    client_id: &Uuid,
    filter: Option<&ReportFilter>,
) -> Result<OverallHealthScore, ReportError> {
    health_score_at(source, client_id, filter, Utc::now().naive_utc())
}

pub fn health_score_at<S: RecordSource + ?Sized>(
    source: &S,
    client_id: &Uuid,
    filter: Option<&ReportFilter>,
    now: NaiveDateTime,
) -> Result<OverallHealthScore, ReportError> {
    Ok(build_report_at(source, client_id, filter, now)?.health_score)
}

// ═══════════════════════════════════════════
// Timeline
// ═══════════════════════════════════════════

/// Looks up every doctor the records reference. Missing doctors are
/// logged and later rendered as "Unknown".
fn doctor_directory<S: RecordSource + ?Sized>(
    source: &S,
    records: &ClientRecords,
) -> Result<DoctorDirectory, ReportError> {
    let mut doctors = Vec::new();
    for doctor_id in timeline::referenced_doctor_ids(records) {
        match source.doctor(&doctor_id)? {
            Some(doctor) => doctors.push(doctor),
            None => tracing::warn!(doctor_id = %doctor_id, "Timeline references unknown doctor"),
        }
    }
    Ok(DoctorDirectory::new(doctors))
}

pub fn build_timeline<S: RecordSource + ?Sized>(
    source: &S,
    client_id: &Uuid,
    filter: Option<&ReportFilter>,
) -> Result<Vec<TimelineEvent>, ReportError> {
    build_timeline_at(source, client_id, filter, current_time())
}

pub fn build_timeline_at<S: RecordSource + ?Sized>(
    source: &S,
    client_id: &Uuid,
    filter: Option<&ReportFilter>,
    now: NaiveDateTime,
) -> Result<Vec<TimelineEvent>, ReportError> {
    let window = WindowFilter::resolve(filter, now);
    let (_, records) = load(source, client_id, &window)?;
    let doctors = doctor_directory(source, &records)?;
    let events = timeline::merge_timeline(&records, &doctors);
    tracing::info!(client_id = %client_id, events = events.len(), "Built client timeline");
    Ok(events)
}

// ═══════════════════════════════════════════
// History
// ═══════════════════════════════════════════

pub fn build_history<S: RecordSource + ?Sized>(
    source: &S,
    client_id: &Uuid,
    filter: Option<&ReportFilter>,
) -> Result<ClientHistory, ReportError> {
    build_history_at(source, client_id, filter, current_time())
}

pub fn build_history_at<S: RecordSource + ?Sized>(
    source: &S,
    client_id: &Uuid,
    filter: Option<&ReportFilter>,
    now: NaiveDateTime,
) -> Result<ClientHistory, ReportError> {
    let (client, records) = load(source, client_id, &WindowFilter::resolve_open(filter))?;
    let assigned = match client.assigned_doctor_id {
        Some(doctor_id) => source.doctor(&doctor_id)?,
        None => None,
    };
    tracing::info!(client_id = %client_id, records = records.total(), "Built client history");
    Ok(history::build_client_history(client, records, assigned.as_ref(), now))
}

pub fn history_summary_at<S: RecordSource + ?Sized>(
    source: &S,
    client_id: &Uuid,
    filter: Option<&ReportFilter>,
    now: NaiveDateTime,
) -> Result<HistorySummary, ReportError> {
    Ok(build_history_at(source, client_id, filter, now)?.summary)
}

// ═══════════════════════════════════════════
// Doctor overview
// ═══════════════════════════════════════════

pub fn doctor_clients_overview<S: RecordSource + ?Sized>(
    source: &S,
    doctor_id: &Uuid,
) -> Result<Vec<ClientOverview>, ReportError> {
    doctor_clients_overview_at(source, doctor_id, current_time())
}

/// Unfiltered report summary for every client assigned to `doctor_id`.
pub fn doctor_clients_overview_at<S: RecordSource + ?Sized>(
    source: &S,
    doctor_id: &Uuid,
    now: NaiveDateTime,
) -> Result<Vec<ClientOverview>, ReportError> {
    if source.doctor(doctor_id)?.is_none() {
        return Err(ReportError::not_found("Doctor", doctor_id));
    }

    let clients = source.clients_for_doctor(doctor_id)?;
    let mut overview = Vec::with_capacity(clients.len());
    for client in clients {
        let report = build_report_at(source, &client.id, None, now)?;
        overview.push(ClientOverview {
            client_id: client.id,
            client_name: report.client_name,
            health_score: report.health_score.current_score,
            trend: report.health_score.trend,
            active_symptoms: report.symptom_analytics.active_symptoms,
            active_treatments: report.treatment_progress.active_treatments,
            next_appointment: report.appointment_analytics.next_scheduled_appointment,
        });
    }
    tracing::info!(doctor_id = %doctor_id, clients = overview.len(), "Built doctor overview");
    Ok(overview)
}
