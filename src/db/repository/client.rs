use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use super::{opt_date_at, opt_uuid_at, uuid_at};
use crate::db::DatabaseError;
use crate::models::Client;

pub fn insert_client(conn: &Connection, client: &Client) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO clients (id, user_name, first_name, last_name, email, date_of_birth, assigned_doctor_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            client.id.to_string(),
            client.user_name,
            client.first_name,
            client.last_name,
            client.email,
            client.date_of_birth.map(|d| d.to_string()),
            client.assigned_doctor_id.map(|id| id.to_string()),
        ],
    )?;
    Ok(())
}

pub fn get_client(conn: &Connection, id: &Uuid) -> Result<Option<Client>, DatabaseError> {
    conn.query_row(
        "SELECT id, user_name, first_name, last_name, email, date_of_birth, assigned_doctor_id
         FROM clients WHERE id = ?1",
        params![id.to_string()],
        row_to_client,
    )
    .optional()
    .map_err(DatabaseError::from)
}

/// Clients whose assigned doctor is `doctor_id`, by last then first name.
pub fn get_clients_by_doctor(
    conn: &Connection,
    doctor_id: &Uuid,
) -> Result<Vec<Client>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, user_name, first_name, last_name, email, date_of_birth, assigned_doctor_id
         FROM clients
         WHERE assigned_doctor_id = ?1
         ORDER BY last_name, first_name, user_name",
    )?;
    let rows = stmt.query_map(params![doctor_id.to_string()], row_to_client)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

fn row_to_client(row: &rusqlite::Row) -> Result<Client, rusqlite::Error> {
    Ok(Client {
        id: uuid_at(row, 0)?,
        user_name: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        email: row.get(4)?,
        date_of_birth: opt_date_at(row, 5)?,
        assigned_doctor_id: opt_uuid_at(row, 6)?,
    })
}
