//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`. All routes are read-only `GET`s.

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the reporting API router.
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn api_router(ctx: ApiContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route(
            "/clients/:client_id/analytics",
            get(endpoints::analytics::client_report),
        )
        .route(
            "/clients/:client_id/analytics/vital-trends",
            get(endpoints::analytics::vital_trends),
        )
        .route(
            "/clients/:client_id/analytics/symptom-trends",
            get(endpoints::analytics::symptom_trends),
        )
        .route(
            "/clients/:client_id/analytics/health-score",
            get(endpoints::analytics::health_score),
        )
        .route(
            "/clients/:client_id/timeline",
            get(endpoints::timeline::client_timeline),
        )
        .route(
            "/clients/:client_id/history",
            get(endpoints::history::client_history),
        )
        .route(
            "/clients/:client_id/history/summary",
            get(endpoints::history::summary),
        )
        .route(
            "/doctors/:doctor_id/clients-overview",
            get(endpoints::doctors::clients_overview),
        )
        .with_state(ctx);

    Router::new()
        .nest("/api", routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
