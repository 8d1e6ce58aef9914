use rusqlite::{params, Connection};
use uuid::Uuid;

use super::{datetime_at, format_datetime, opt_datetime_at, opt_uuid_at, uuid_at};
use crate::db::DatabaseError;
use crate::models::Treatment;

pub fn insert_treatment(conn: &Connection, treatment: &Treatment) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO treatments (id, client_id, provided_by_doctor_id, title, description, status,
         start_date, end_date, diagnosis_id, prescription_id, next_appointment_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            treatment.id.to_string(),
            treatment.client_id.to_string(),
            treatment.provided_by_doctor_id.to_string(),
            treatment.title,
            treatment.description,
            treatment.status,
            format_datetime(&treatment.start_date),
            treatment.end_date.as_ref().map(format_datetime),
            treatment.diagnosis_id.map(|id| id.to_string()),
            treatment.prescription_id.map(|id| id.to_string()),
            treatment.next_appointment_id.map(|id| id.to_string()),
        ],
    )?;
    Ok(())
}

pub fn get_treatments_by_client(
    conn: &Connection,
    client_id: &Uuid,
) -> Result<Vec<Treatment>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, client_id, provided_by_doctor_id, title, description, status,
                start_date, end_date, diagnosis_id, prescription_id, next_appointment_id
         FROM treatments
         WHERE client_id = ?1
         ORDER BY start_date ASC, rowid ASC",
    )?;
    let rows = stmt.query_map(params![client_id.to_string()], row_to_treatment)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

fn row_to_treatment(row: &rusqlite::Row) -> Result<Treatment, rusqlite::Error> {
    Ok(Treatment {
        id: uuid_at(row, 0)?,
        client_id: uuid_at(row, 1)?,
        provided_by_doctor_id: uuid_at(row, 2)?,
        title: row.get(3)?,
        description: row.get(4)?,
        status: row.get(5)?,
        start_date: datetime_at(row, 6)?,
        end_date: opt_datetime_at(row, 7)?,
        diagnosis_id: opt_uuid_at(row, 8)?,
        prescription_id: opt_uuid_at(row, 9)?,
        next_appointment_id: opt_uuid_at(row, 10)?,
    })
}
