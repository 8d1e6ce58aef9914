//! Analytics report endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;

use crate::analytics::{ClientAnalytics, ClinicalObservationTrends, OverallHealthScore, SymptomAnalytics};
use crate::api::error::ApiError;
use crate::api::types::{parse_id, ApiContext, ReportQuery};
use crate::report;

/// `GET /api/clients/:client_id/analytics`
pub async fn client_report(
    State(ctx): State<ApiContext>,
    Path(client_id): Path<String>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ClientAnalytics>, ApiError> {
    let client_id = parse_id(&client_id, "client")?;
    let filter = query.into_filter()?;
    let conn = ctx.open_db()?;
    let report = report::build_report(&conn, &client_id, filter.as_ref())?;
    Ok(Json(report))
}

/// `GET /api/clients/:client_id/analytics/vital-trends`
pub async fn vital_trends(
    State(ctx): State<ApiContext>,
    Path(client_id): Path<String>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ClinicalObservationTrends>, ApiError> {
    let client_id = parse_id(&client_id, "client")?;
    let filter = query.into_filter()?;
    let conn = ctx.open_db()?;
    Ok(Json(report::vital_trends(&conn, &client_id, filter.as_ref())?))
}

/// `GET /api/clients/:client_id/analytics/symptom-trends`
pub async fn symptom_trends(
    State(ctx): State<ApiContext>,
    Path(client_id): Path<String>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<SymptomAnalytics>, ApiError> {
    let client_id = parse_id(&client_id, "client")?;
    let filter = query.into_filter()?;
    let conn = ctx.open_db()?;
    Ok(Json(report::symptom_trends(&conn, &client_id, filter.as_ref())?))
}

/// `GET /api/clients/:client_id/analytics/health-score`
pub async fn health_score(
    State(ctx): State<ApiContext>,
    Path(client_id): Path<String>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<OverallHealthScore>, ApiError> {
    let client_id = parse_id(&client_id, "client")?;
    let filter = query.into_filter()?;
    let conn = ctx.open_db()?;
    Ok(Json(report::health_score(&conn, &client_id, filter.as_ref())?))
}
