use rusqlite::{params, Connection};
use uuid::Uuid;

use super::{bool_at, datetime_at, format_datetime, opt_datetime_at, uuid_at};
use crate::db::DatabaseError;
use crate::models::Diagnosis;

pub fn insert_diagnosis(conn: &Connection, diagnosis: &Diagnosis) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO diagnoses (id, client_id, diagnosed_by_doctor_id, title, description,
         diagnosis_code, severity, status, date_diagnosed, date_resolved, is_active)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            diagnosis.id.to_string(),
            diagnosis.client_id.to_string(),
            diagnosis.diagnosed_by_doctor_id.to_string(),
            diagnosis.title,
            diagnosis.description,
            diagnosis.diagnosis_code,
            diagnosis.severity,
            diagnosis.status,
            format_datetime(&diagnosis.date_diagnosed),
            diagnosis.date_resolved.as_ref().map(format_datetime),
            diagnosis.is_active as i32,
        ],
    )?;
    Ok(())
}

pub fn get_diagnoses_by_client(
    conn: &Connection,
    client_id: &Uuid,
) -> Result<Vec<Diagnosis>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, client_id, diagnosed_by_doctor_id, title, description, diagnosis_code,
                severity, status, date_diagnosed, date_resolved, is_active
         FROM diagnoses
         WHERE client_id = ?1
         ORDER BY date_diagnosed ASC, rowid ASC",
    )?;
    let rows = stmt.query_map(params![client_id.to_string()], row_to_diagnosis)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

fn row_to_diagnosis(row: &rusqlite::Row) -> Result<Diagnosis, rusqlite::Error> {
    Ok(Diagnosis {
        id: uuid_at(row, 0)?,
        client_id: uuid_at(row, 1)?,
        diagnosed_by_doctor_id: uuid_at(row, 2)?,
        title: row.get(3)?,
        description: row.get(4)?,
        diagnosis_code: row.get(5)?,
        severity: row.get(6)?,
        status: row.get(7)?,
        date_diagnosed: datetime_at(row, 8)?,
        date_resolved: opt_datetime_at(row, 9)?,
        is_active: bool_at(row, 10)?,
    })
}
