//! Repository layer: entity-scoped read and seed operations.
//!
//! Reads are always "every record for one client"; narrowing by date,
//! doctor or active flag happens in `crate::window`, not in SQL.

mod appointment;
mod client;
mod diagnosis;
mod doctor;
mod observation;
mod prescription;
mod progress;
mod recommendation;
mod symptom;
mod treatment;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rusqlite::types::Type;
use uuid::Uuid;

pub use appointment::*;
pub use client::*;
pub use diagnosis::*;
pub use doctor::*;
pub use observation::*;
pub use prescription::*;
pub use progress::*;
pub use recommendation::*;
pub use symptom::*;
pub use treatment::*;

pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

pub(crate) fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

fn conversion_error(
    idx: usize,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

fn uuid_at(row: &rusqlite::Row, idx: usize) -> Result<Uuid, rusqlite::Error> {
    let raw: String = row.get(idx)?;
    Uuid::parse_str(&raw).map_err(|e| conversion_error(idx, e))
}

fn opt_uuid_at(row: &rusqlite::Row, idx: usize) -> Result<Option<Uuid>, rusqlite::Error> {
    let raw: Option<String> = row.get(idx)?;
    raw.map(|s| Uuid::parse_str(&s).map_err(|e| conversion_error(idx, e)))
        .transpose()
}

fn datetime_at(row: &rusqlite::Row, idx: usize) -> Result<NaiveDateTime, rusqlite::Error> {
    let raw: String = row.get(idx)?;
    NaiveDateTime::parse_from_str(&raw, DATETIME_FORMAT).map_err(|e| conversion_error(idx, e))
}

fn opt_datetime_at(
    row: &rusqlite::Row,
    idx: usize,
) -> Result<Option<NaiveDateTime>, rusqlite::Error> {
    let raw: Option<String> = row.get(idx)?;
    raw.map(|s| {
        NaiveDateTime::parse_from_str(&s, DATETIME_FORMAT).map_err(|e| conversion_error(idx, e))
    })
    .transpose()
}

fn opt_date_at(row: &rusqlite::Row, idx: usize) -> Result<Option<NaiveDate>, rusqlite::Error> {
    let raw: Option<String> = row.get(idx)?;
    raw.map(|s| NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(|e| conversion_error(idx, e)))
        .transpose()
}

fn time_at(row: &rusqlite::Row, idx: usize) -> Result<NaiveTime, rusqlite::Error> {
    let raw: String = row.get(idx)?;
    NaiveTime::parse_from_str(&raw, TIME_FORMAT).map_err(|e| conversion_error(idx, e))
}

fn bool_at(row: &rusqlite::Row, idx: usize) -> Result<bool, rusqlite::Error> {
    Ok(row.get::<_, i32>(idx)? != 0)
}
