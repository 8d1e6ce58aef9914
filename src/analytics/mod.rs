pub mod categorical;
pub mod score;
pub mod types;
pub mod vitals;

pub use categorical::*;
pub use score::*;
pub use types::*;
pub use vitals::*;

use chrono::NaiveDateTime;

use crate::models::Client;
use crate::records::ClientRecords;
use crate::window::TimeWindow;

/// Assembles the analytics report from already window-filtered records.
pub fn build_client_analytics(
    client: &Client,
    window: &TimeWindow,
    records: &ClientRecords,
    now: NaiveDateTime,
) -> ClientAnalytics {
    ClientAnalytics {
        client_id: client.id,
        client_name: client.display_name(),
        analysis_period_start: window.start,
        analysis_period_end: window.end,
        clinical_observation_trends: build_observation_trends(&records.observations),
        symptom_analytics: build_symptom_analytics(&records.symptoms),
        appointment_analytics: build_appointment_analytics(&records.appointments, now),
        treatment_progress: build_treatment_progress(&records.treatments, &records.progress_notes, now),
        health_score: calculate_health_score(
            &records.observations,
            &records.symptoms,
            &records.appointments,
            &records.treatments,
        ),
    }
}
