use rusqlite::{params, Connection};
use uuid::Uuid;

use super::{datetime_at, format_datetime, time_at, uuid_at};
use crate::db::DatabaseError;
use crate::models::Appointment;

pub fn insert_appointment(conn: &Connection, appt: &Appointment) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO appointments (id, client_id, doctor_id, title, description, appointment_date,
         start_time, end_time, status, location)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            appt.id.to_string(),
            appt.client_id.to_string(),
            appt.doctor_id.to_string(),
            appt.title,
            appt.description,
            format_datetime(&appt.appointment_date),
            appt.start_time.format("%H:%M:%S").to_string(),
            appt.end_time.format("%H:%M:%S").to_string(),
            appt.status,
            appt.location,
        ],
    )?;
    Ok(())
}

pub fn get_appointments_by_client(
    conn: &Connection,
    client_id: &Uuid,
) -> Result<Vec<Appointment>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, client_id, doctor_id, title, description, appointment_date,
                start_time, end_time, status, location
         FROM appointments
         WHERE client_id = ?1
         ORDER BY appointment_date ASC, rowid ASC",
    )?;
    let rows = stmt.query_map(params![client_id.to_string()], row_to_appointment)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

fn row_to_appointment(row: &rusqlite::Row) -> Result<Appointment, rusqlite::Error> {
    Ok(Appointment {
        id: uuid_at(row, 0)?,
        client_id: uuid_at(row, 1)?,
        doctor_id: uuid_at(row, 2)?,
        title: row.get(3)?,
        description: row.get(4)?,
        appointment_date: datetime_at(row, 5)?,
        start_time: time_at(row, 6)?,
        end_time: time_at(row, 7)?,
        status: row.get(8)?,
        location: row.get(9)?,
    })
}
