use rusqlite::{params, Connection};
use uuid::Uuid;

use super::{bool_at, datetime_at, format_datetime, opt_datetime_at, uuid_at};
use crate::db::DatabaseError;
use crate::models::Prescription;

pub fn insert_prescription(conn: &Connection, rx: &Prescription) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO prescriptions (id, client_id, prescribed_by_doctor_id, medication_name, dosage,
         frequency, start_date, end_date, instructions, status, is_active)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            rx.id.to_string(),
            rx.client_id.to_string(),
            rx.prescribed_by_doctor_id.to_string(),
            rx.medication_name,
            rx.dosage,
            rx.frequency,
            format_datetime(&rx.start_date),
            rx.end_date.as_ref().map(format_datetime),
            rx.instructions,
            rx.status,
            rx.is_active as i32,
        ],
    )?;
    Ok(())
}

pub fn get_prescriptions_by_client(
    conn: &Connection,
    client_id: &Uuid,
) -> Result<Vec<Prescription>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, client_id, prescribed_by_doctor_id, medication_name, dosage, frequency,
                start_date, end_date, instructions, status, is_active
         FROM prescriptions
         WHERE client_id = ?1
         ORDER BY start_date ASC, rowid ASC",
    )?;
    let rows = stmt.query_map(params![client_id.to_string()], row_to_prescription)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

fn row_to_prescription(row: &rusqlite::Row) -> Result<Prescription, rusqlite::Error> {
    Ok(Prescription {
        id: uuid_at(row, 0)?,
        client_id: uuid_at(row, 1)?,
        prescribed_by_doctor_id: uuid_at(row, 2)?,
        medication_name: row.get(3)?,
        dosage: row.get(4)?,
        frequency: row.get(5)?,
        start_date: datetime_at(row, 6)?,
        end_date: opt_datetime_at(row, 7)?,
        instructions: row.get(8)?,
        status: row.get(9)?,
        is_active: bool_at(row, 10)?,
    })
}
