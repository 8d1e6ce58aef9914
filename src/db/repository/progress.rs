use rusqlite::{params, Connection};
use uuid::Uuid;

use super::{datetime_at, format_datetime, opt_uuid_at, uuid_at};
use crate::db::DatabaseError;
use crate::models::Progress;

pub fn insert_progress(conn: &Connection, progress: &Progress) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO progress_notes (id, client_id, recorded_by_doctor_id, treatment_id, diagnosis_id,
         title, notes, date_recorded, progress_status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            progress.id.to_string(),
            progress.client_id.to_string(),
            progress.recorded_by_doctor_id.to_string(),
            progress.treatment_id.map(|id| id.to_string()),
            progress.diagnosis_id.map(|id| id.to_string()),
            progress.title,
            progress.notes,
            format_datetime(&progress.date_recorded),
            progress.progress_status,
        ],
    )?;
    Ok(())
}

pub fn get_progress_by_client(
    conn: &Connection,
    client_id: &Uuid,
) -> Result<Vec<Progress>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, client_id, recorded_by_doctor_id, treatment_id, diagnosis_id,
                title, notes, date_recorded, progress_status
         FROM progress_notes
         WHERE client_id = ?1
         ORDER BY date_recorded ASC, rowid ASC",
    )?;
    let rows = stmt.query_map(params![client_id.to_string()], row_to_progress)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

fn row_to_progress(row: &rusqlite::Row) -> Result<Progress, rusqlite::Error> {
    Ok(Progress {
        id: uuid_at(row, 0)?,
        client_id: uuid_at(row, 1)?,
        recorded_by_doctor_id: uuid_at(row, 2)?,
        treatment_id: opt_uuid_at(row, 3)?,
        diagnosis_id: opt_uuid_at(row, 4)?,
        title: row.get(5)?,
        notes: row.get(6)?,
        date_recorded: datetime_at(row, 7)?,
        progress_status: row.get(8)?,
    })
}
