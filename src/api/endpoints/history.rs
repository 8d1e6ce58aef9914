//! Client history endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;

use crate::api::error::ApiError;
use crate::api::types::{parse_id, ApiContext, ReportQuery};
use crate::history::{ClientHistory, HistorySummary};
use crate::report;

/// `GET /api/clients/:client_id/history`
pub async fn client_history(
    State(ctx): State<ApiContext>,
    Path(client_id): Path<String>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ClientHistory>, ApiError> {
    let client_id = parse_id(&client_id, "client")?;
    let filter = query.into_filter()?;
    let conn = ctx.open_db()?;
    Ok(Json(report::build_history(&conn, &client_id, filter.as_ref())?))
}

/// `GET /api/clients/:client_id/history/summary`
pub async fn summary(
    State(ctx): State<ApiContext>,
    Path(client_id): Path<String>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<HistorySummary>, ApiError> {
    let client_id = parse_id(&client_id, "client")?;
    let filter = query.into_filter()?;
    let conn = ctx.open_db()?;
    let now = Utc::now().naive_utc();
    Ok(Json(report::history_summary_at(&conn, &client_id, filter.as_ref(), now)?))
}
