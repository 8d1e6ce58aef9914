use rusqlite::{params, Connection};
use uuid::Uuid;

use super::{datetime_at, format_datetime, uuid_at};
use crate::db::DatabaseError;
use crate::models::ClinicalObservation;

pub fn insert_observation(
    conn: &Connection,
    obs: &ClinicalObservation,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO clinical_observations (id, client_id, recorded_by_doctor_id, observation_date,
         height_cm, weight_kg, blood_pressure, heart_rate, observation_type, value, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            obs.id.to_string(),
            obs.client_id.to_string(),
            obs.recorded_by_doctor_id.to_string(),
            format_datetime(&obs.observation_date),
            obs.height_cm,
            obs.weight_kg,
            obs.blood_pressure,
            obs.heart_rate,
            obs.observation_type,
            obs.value,
            obs.notes,
        ],
    )?;
    Ok(())
}

/// All observations for a client, oldest first.
pub fn get_observations_by_client(
    conn: &Connection,
    client_id: &Uuid,
) -> Result<Vec<ClinicalObservation>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, client_id, recorded_by_doctor_id, observation_date, height_cm, weight_kg,
                blood_pressure, heart_rate, observation_type, value, notes
         FROM clinical_observations
         WHERE client_id = ?1
         ORDER BY observation_date ASC, rowid ASC",
    )?;
    let rows = stmt.query_map(params![client_id.to_string()], row_to_observation)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

fn row_to_observation(row: &rusqlite::Row) -> Result<ClinicalObservation, rusqlite::Error> {
    Ok(ClinicalObservation {
        id: uuid_at(row, 0)?,
        client_id: uuid_at(row, 1)?,
        recorded_by_doctor_id: uuid_at(row, 2)?,
        observation_date: datetime_at(row, 3)?,
        height_cm: row.get(4)?,
        weight_kg: row.get(5)?,
        blood_pressure: row.get(6)?,
        heart_rate: row.get(7)?,
        observation_type: row.get(8)?,
        value: row.get(9)?,
        notes: row.get(10)?,
    })
}
