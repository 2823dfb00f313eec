use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::CandidateId;
use super::query::RosterQueryParams;
use super::repository::CandidateRepository;
use super::service::{RosterService, RosterServiceError};

/// Body of a comparison request; `null` entries are empty slots.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub candidate_ids: Vec<Option<CandidateId>>,
}

/// Router builder exposing the roster listing and comparison endpoints.
pub fn candidate_router<R>(service: Arc<RosterService<R>>) -> Router
where
    R: CandidateRepository + 'static,
{
    Router::new()
        .route("/api/v1/candidates", get(list_handler::<R>))
        .route("/api/v1/candidates/positions", get(positions_handler::<R>))
        .route("/api/v1/candidates/compare", post(compare_handler::<R>))
        .route("/api/v1/candidates/:candidate_id", get(detail_handler::<R>))
        .with_state(service)
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<RosterService<R>>>,
    Query(params): Query<RosterQueryParams>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    let query = match params.into_query() {
        Ok(query) => query,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    match service.list(&query) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn positions_handler<R>(
    State(service): State<Arc<RosterService<R>>>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    match service.positions() {
        Ok(positions) => {
            (StatusCode::OK, axum::Json(json!({ "positions": positions }))).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn detail_handler<R>(
    State(service): State<Arc<RosterService<R>>>,
    Path(candidate_id): Path<u32>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    match service.get(CandidateId(candidate_id)) {
        Ok(candidate) => {
            let initials = candidate.initials();
            let band = candidate.score.band();
            let payload = json!({
                "candidate": candidate,
                "initials": initials,
                "score_band": band.label(),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error @ RosterServiceError::UnknownCandidate(_)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn compare_handler<R>(
    State(service): State<Arc<RosterService<R>>>,
    axum::Json(request): axum::Json<CompareRequest>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    match service.compare(&request.candidate_ids) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(other) => internal_error(other),
    }
}

fn internal_error(error: RosterServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
