//! Doctor-facing endpoints.

use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{parse_id, ApiContext};
use crate::report::{self, ClientOverview};

/// `GET /api/doctors/:doctor_id/clients-overview`
pub async fn clients_overview(
    State(ctx): State<ApiContext>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Vec<ClientOverview>>, ApiError> {
    let doctor_id = parse_id(&doctor_id, "doctor")?;
    let conn = ctx.open_db()?;
    Ok(Json(report::doctor_clients_overview(&conn, &doctor_id)?))
}
