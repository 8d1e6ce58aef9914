use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use super::uuid_at;
use crate::db::DatabaseError;
use crate::models::Doctor;

pub fn insert_doctor(conn: &Connection, doctor: &Doctor) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO doctors (id, user_name, first_name, last_name, specialization)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            doctor.id.to_string(),
            doctor.user_name,
            doctor.first_name,
            doctor.last_name,
            doctor.specialization,
        ],
    )?;
    Ok(())
}

pub fn get_doctor(conn: &Connection, id: &Uuid) -> Result<Option<Doctor>, DatabaseError> {
    conn.query_row(
        "SELECT id, user_name, first_name, last_name, specialization
         FROM doctors WHERE id = ?1",
        params![id.to_string()],
        row_to_doctor,
    )
    .optional()
    .map_err(DatabaseError::from)
}

fn row_to_doctor(row: &rusqlite::Row) -> Result<Doctor, rusqlite::Error> {
    Ok(Doctor {
        id: uuid_at(row, 0)?,
        user_name: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        specialization: row.get(4)?,
    })
}
