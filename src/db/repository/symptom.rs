use rusqlite::{params, Connection};
use uuid::Uuid;

use super::{bool_at, datetime_at, format_datetime, opt_datetime_at, uuid_at};
use crate::db::DatabaseError;
use crate::models::Symptom;

pub fn insert_symptom(conn: &Connection, symptom: &Symptom) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO symptoms (id, client_id, added_by_doctor_id, name, description, severity_level,
         date_reported, date_resolved, is_active, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            symptom.id.to_string(),
            symptom.client_id.to_string(),
            symptom.added_by_doctor_id.to_string(),
            symptom.name,
            symptom.description,
            symptom.severity_level,
            format_datetime(&symptom.date_reported),
            symptom.date_resolved.as_ref().map(format_datetime),
            symptom.is_active as i32,
            symptom.notes,
        ],
    )?;
    Ok(())
}

/// Active and resolved symptoms for a client, oldest report first.
pub fn get_symptoms_by_client(
    conn: &Connection,
    client_id: &Uuid,
) -> Result<Vec<Symptom>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, client_id, added_by_doctor_id, name, description, severity_level,
                date_reported, date_resolved, is_active, notes
         FROM symptoms
         WHERE client_id = ?1
         ORDER BY date_reported ASC, rowid ASC",
    )?;
    let rows = stmt.query_map(params![client_id.to_string()], row_to_symptom)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

fn row_to_symptom(row: &rusqlite::Row) -> Result<Symptom, rusqlite::Error> {
    Ok(Symptom {
        id: uuid_at(row, 0)?,
        client_id: uuid_at(row, 1)?,
        added_by_doctor_id: uuid_at(row, 2)?,
        name: row.get(3)?,
        description: row.get(4)?,
        severity_level: row.get(5)?,
        date_reported: datetime_at(row, 6)?,
        date_resolved: opt_datetime_at(row, 7)?,
        is_active: bool_at(row, 8)?,
        notes: row.get(9)?,
    })
}
