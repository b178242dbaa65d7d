use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::{Advisor, AdvisorDirectory, AdvisorId, AdvisorQuery};

/// Router builder exposing the browse and profile endpoints.
pub fn directory_router(directory: Arc<AdvisorDirectory>) -> Router {
    Router::new()
        .route("/api/v1/advisors", get(search_handler))
        .route("/api/v1/advisors/specialties", get(specialties_handler))
        .route("/api/v1/advisors/:advisor_id", get(profile_handler))
        .with_state(directory)
}

/// Filtered browse view; `count` mirrors the "N Advisors Found" headline.
#[derive(Debug, Serialize)]
pub struct DirectorySearchView {
    pub count: usize,
    pub advisors: Vec<Advisor>,
}

pub(crate) async fn search_handler(
    State(directory): State<Arc<AdvisorDirectory>>,
    Query(query): Query<AdvisorQuery>,
) -> Response {
    let advisors: Vec<Advisor> = directory
        .search(&query)
        .into_iter()
        .cloned()
        .collect();

    let view = DirectorySearchView {
        count: advisors.len(),
        advisors,
    };
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn specialties_handler(
    State(directory): State<Arc<AdvisorDirectory>>,
) -> Response {
    let payload = json!({ "specialties": directory.specialties() });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn profile_handler(
    State(directory): State<Arc<AdvisorDirectory>>,
    Path(advisor_id): Path<String>,
) -> Response {
    let id = AdvisorId(advisor_id);
    match directory.get(&id) {
        Some(profile) => (StatusCode::OK, axum::Json(profile.clone())).into_response(),
        None => {
            let payload = json!({
                "error": format!("no advisor listed with id '{}'", id.0),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}
