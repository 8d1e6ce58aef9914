//! HTTP surface for the reporting engine.
//!
//! A thin axum layer: handlers parse ids and query filters, call
//! `crate::report`, and map `ReportError` onto status codes.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{serve, start_api_server, ApiServer, StartupError};
pub use types::ApiContext;
