use crate::infra::AppState;
use advisor_connect::auth::ReviewerGate;
use advisor_connect::marketplace::applications::{
    application_router, AdvisorApplicationService, ApplicationRepository, NotificationPublisher,
};
use advisor_connect::marketplace::directory::{directory_router, AdvisorDirectory};
use advisor_connect::marketplace::engagement::{dashboard_router, ClientDashboard};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

/// Compose the marketplace routers with the operational endpoints.
pub(crate) fn marketplace_routes<R, N>(
    service: Arc<AdvisorApplicationService<R, N>>,
    gate: ReviewerGate,
    directory: Arc<AdvisorDirectory>,
) -> axum::Router
where
    R: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    application_router(service, gate)
        .merge(directory_router(directory))
        .merge(dashboard_router(Arc::new(ClientDashboard::seeded())))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
