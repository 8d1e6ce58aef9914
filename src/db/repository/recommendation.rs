use rusqlite::{params, Connection};
use uuid::Uuid;

use super::{bool_at, datetime_at, format_datetime, uuid_at};
use crate::db::DatabaseError;
use crate::models::Recommendation;

pub fn insert_recommendation(
    conn: &Connection,
    rec: &Recommendation,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO recommendations (id, client_id, doctor_id, title, description, date_given, is_active)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            rec.id.to_string(),
            rec.client_id.to_string(),
            rec.doctor_id.to_string(),
            rec.title,
            rec.description,
            format_datetime(&rec.date_given),
            rec.is_active as i32,
        ],
    )?;
    Ok(())
}

pub fn get_recommendations_by_client(
    conn: &Connection,
    client_id: &Uuid,
) -> Result<Vec<Recommendation>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, client_id, doctor_id, title, description, date_given, is_active
         FROM recommendations
         WHERE client_id = ?1
         ORDER BY date_given ASC, rowid ASC",
    )?;
    let rows = stmt.query_map(params![client_id.to_string()], row_to_recommendation)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

fn row_to_recommendation(row: &rusqlite::Row) -> Result<Recommendation, rusqlite::Error> {
    Ok(Recommendation {
        id: uuid_at(row, 0)?,
        client_id: uuid_at(row, 1)?,
        doctor_id: uuid_at(row, 2)?,
        title: row.get(3)?,
        description: row.get(4)?,
        date_given: datetime_at(row, 5)?,
        is_active: bool_at(row, 6)?,
    })
}
