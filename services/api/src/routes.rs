use crate::infra::{AppState, InterviewFeedState};
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use talent_board::error::AppError;
use talent_board::workflows::candidates::{
    candidate_router, CandidateRepository, QueryError, RosterService, SortDirection, SortState,
};
use talent_board::workflows::interviews::{
    arrange_rows, default_row_sort, InterviewRow, RowField, StatusTone,
};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct InterviewsQuery {
    #[serde(default)]
    pub(crate) company_id: Option<String>,
    #[serde(default)]
    pub(crate) search: Option<String>,
    #[serde(default)]
    pub(crate) sort: Option<String>,
    #[serde(default)]
    pub(crate) direction: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct InterviewsResponse {
    pub(crate) company_id: String,
    pub(crate) total: usize,
    pub(crate) sort: SortState<RowField>,
    pub(crate) rows: Vec<InterviewRowView>,
}

#[derive(Debug, Serialize)]
pub(crate) struct InterviewRowView {
    #[serde(flatten)]
    pub(crate) row: InterviewRow,
    pub(crate) status_label: String,
    pub(crate) status_tone: StatusTone,
}

impl From<InterviewRow> for InterviewRowView {
    fn from(row: InterviewRow) -> Self {
        Self {
            status_label: row.status_label(),
            status_tone: row.status_tone(),
            row,
        }
    }
}

pub(crate) fn with_roster_routes<R>(service: Arc<RosterService<R>>) -> axum::Router
where
    R: CandidateRepository + 'static,
{
    candidate_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/interviews", axum::routing::get(interviews_endpoint))
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

/// Interview rows for one company. An unconfigured or failing feed yields an empty list.
pub(crate) async fn interviews_endpoint(
    Extension(feed): Extension<Arc<InterviewFeedState>>,
    Query(params): Query<InterviewsQuery>,
) -> Result<Json<InterviewsResponse>, AppError> {
    let InterviewsQuery {
        company_id,
        search,
        sort,
        direction,
    } = params;

    let company_id = feed.company_id(company_id)?;
    let sort = interview_sort(sort.as_deref(), direction.as_deref())?;

    let rows = match &feed.client {
        Some(client) => client.fetch_or_empty(&company_id).await,
        None => {
            tracing::warn!(%company_id, "interview feed endpoint is not configured");
            Vec::new()
        }
    };

    let arranged = arrange_rows(&rows, search.as_deref().unwrap_or_default(), sort);
    Ok(Json(InterviewsResponse {
        company_id,
        total: arranged.len(),
        sort,
        rows: arranged.into_iter().map(InterviewRowView::from).collect(),
    }))
}

fn interview_sort(
    field: Option<&str>,
    direction: Option<&str>,
) -> Result<SortState<RowField>, QueryError> {
    let default = default_row_sort();
    let field = match field {
        Some(raw) => raw.parse()?,
        None => default.field,
    };
    let direction: SortDirection = match direction {
        Some(raw) => raw.parse()?,
        None if field == default.field => default.direction,
        None => SortDirection::Asc,
    };
    Ok(SortState::new(field, direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::roster_service;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn router(feed: InterviewFeedState) -> axum::Router {
        let service = Arc::new(roster_service(None).expect("sample roster loads"));
        with_roster_routes(service).layer(Extension(Arc::new(feed)))
    }

    async fn read_json_body(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn interviews_endpoint_requires_company_id() {
        let response = router(InterviewFeedState::default())
            .oneshot(
                Request::get("/api/v1/interviews")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn interviews_endpoint_degrades_to_empty_without_feed() {
        let feed = InterviewFeedState {
            client: None,
            default_company_id: Some("acme".to_string()),
        };
        let response = router(feed)
            .oneshot(
                Request::get("/api/v1/interviews?search=engineer")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["company_id"], "acme");
        assert_eq!(payload["total"], 0);
        assert_eq!(payload["sort"]["field"], "posted_on");
        assert_eq!(payload["sort"]["direction"], "desc");
    }

    #[tokio::test]
    async fn interviews_endpoint_rejects_unknown_sort_column() {
        let response = router(InterviewFeedState::default())
            .oneshot(
                Request::get("/api/v1/interviews?company_id=acme&sort=salary")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn health_and_candidates_share_one_router() {
        let app = router(InterviewFeedState::default());

        let health = app
            .clone()
            .oneshot(Request::get("/health").body(Body::empty()).expect("request builds"))
            .await
            .expect("route executes");
        assert_eq!(health.status(), StatusCode::OK);

        let roster = app
            .oneshot(
                Request::get("/api/v1/candidates?search=engineer")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        let payload = read_json_body(roster).await;
        assert_eq!(payload["total"], 2);
    }

    #[test]
    fn interview_sort_defaults_follow_the_active_column() {
        assert_eq!(interview_sort(None, None).expect("sort"), default_row_sort());
        assert_eq!(
            interview_sort(Some("jobId"), None).expect("sort"),
            SortState::new(RowField::JobId, SortDirection::Asc)
        );
    }
}
