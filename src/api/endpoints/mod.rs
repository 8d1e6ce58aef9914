//! API endpoint handlers.
//!
//! Handlers only parse the request and map errors; the work is done by
//! `crate::report`.

pub mod analytics;
pub mod doctors;
pub mod health;
pub mod history;
pub mod timeline;
