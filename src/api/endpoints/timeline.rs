//! Timeline endpoint.

use axum::extract::{Path, Query, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{parse_id, ApiContext, ReportQuery};
use crate::report;
use crate::timeline::TimelineEvent;

/// `GET /api/clients/:client_id/timeline`: events newest first.
pub async fn client_timeline(
    State(ctx): State<ApiContext>,
    Path(client_id): Path<String>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<Vec<TimelineEvent>>, ApiError> {
    let client_id = parse_id(&client_id, "client")?;
    let filter = query.into_filter()?;
    let conn = ctx.open_db()?;
    let events = report::build_timeline(&conn, &client_id, filter.as_ref())?;
    Ok(Json(events))
}
