use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::auth::{AuthError, ReviewerGate};

use super::domain::{
    ApplicationId, ApplicationStatus, RegistrationSubmission, ReviewDecision,
};
use super::repository::{ApplicationRepository, NotificationPublisher, RepositoryError};
use super::service::{AdvisorApplicationService, ApplicationServiceError, ReviewError};

/// Router builder exposing intake, queue, and review endpoints. The review
/// endpoint is gated by the configured reviewer identity.
pub fn application_router<R, N>(
    service: Arc<AdvisorApplicationService<R, N>>,
    gate: ReviewerGate,
) -> Router
where
    R: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    Router::new()
        .route(
            "/api/v1/advisors/applications",
            post(submit_handler::<R, N>).get(queue_handler::<R, N>),
        )
        .route(
            "/api/v1/advisors/applications/summary",
            get(summary_handler::<R, N>),
        )
        .route(
            "/api/v1/advisors/applications/:application_id",
            get(status_handler::<R, N>),
        )
        .route(
            "/api/v1/advisors/applications/:application_id/review",
            post(review_handler::<R, N>),
        )
        .layer(Extension(gate))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QueueParams {
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReviewRequest {
    decision: ReviewDecision,
    #[serde(default)]
    notes: Option<String>,
}

fn error_response(error: ApplicationServiceError) -> Response {
    let status = match &error {
        ApplicationServiceError::Submission(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ApplicationServiceError::Review(ReviewError::AlreadyDecided { .. }) => {
            StatusCode::CONFLICT
        }
        ApplicationServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ApplicationServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ApplicationServiceError::Repository(RepositoryError::Unavailable(_))
        | ApplicationServiceError::Notification(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

fn auth_response(error: AuthError) -> Response {
    let status = match &error {
        AuthError::MissingIdentity => StatusCode::UNAUTHORIZED,
        AuthError::Forbidden { .. } => StatusCode::FORBIDDEN,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn submit_handler<R, N>(
    State(service): State<Arc<AdvisorApplicationService<R, N>>>,
    axum::Json(submission): axum::Json<RegistrationSubmission>,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.submit(submission) {
        Ok(application) => {
            (StatusCode::ACCEPTED, axum::Json(application.status_view())).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<R, N>(
    State(service): State<Arc<AdvisorApplicationService<R, N>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    let id = ApplicationId(application_id);
    match service.get(&id) {
        Ok(application) => {
            (StatusCode::OK, axum::Json(application.status_view())).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn queue_handler<R, N>(
    State(service): State<Arc<AdvisorApplicationService<R, N>>>,
    Query(params): Query<QueueParams>,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    let status = match params.status.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match ApplicationStatus::parse_label(raw) {
            Some(status) => Some(status),
            None => {
                let payload = json!({
                    "error": format!("unknown status filter '{raw}'"),
                });
                return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload))
                    .into_response();
            }
        },
    };

    match service.list(status) {
        Ok(applications) => {
            let views: Vec<_> = applications
                .iter()
                .map(|application| application.status_view())
                .collect();
            let payload = json!({ "count": views.len(), "applications": views });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn summary_handler<R, N>(
    State(service): State<Arc<AdvisorApplicationService<R, N>>>,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.counts() {
        Ok(counts) => (StatusCode::OK, axum::Json(counts)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn review_handler<R, N>(
    State(service): State<Arc<AdvisorApplicationService<R, N>>>,
    Extension(gate): Extension<ReviewerGate>,
    Path(application_id): Path<String>,
    headers: HeaderMap,
    axum::Json(request): axum::Json<ReviewRequest>,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    if let Err(error) = gate.authorize(&headers) {
        return auth_response(error);
    }

    let id = ApplicationId(application_id);
    match service.review(&id, request.decision, request.notes) {
        Ok(application) => {
            (StatusCode::OK, axum::Json(application.status_view())).into_response()
        }
        Err(error) => error_response(error),
    }
}
