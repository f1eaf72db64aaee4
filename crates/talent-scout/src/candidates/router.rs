use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::directory::{CandidateDirectory, CandidateQuery, DirectoryError, SelectionRequest};
use super::source::CandidateSource;

/// Router builder exposing the candidate browsing and selection endpoints.
pub fn candidate_router<S>(directory: Arc<CandidateDirectory<S>>) -> Router
where
    S: CandidateSource + 'static,
{
    Router::new()
        .route("/api/v1/candidates", get(list_handler::<S>))
        .route("/api/v1/candidates/stats", get(stats_handler::<S>))
        .route("/api/v1/candidates/export", get(export_handler::<S>))
        .route("/api/v1/candidates/refresh", post(refresh_handler::<S>))
        .route(
            "/api/v1/candidates/selection",
            post(save_selection_handler::<S>),
        )
        .route(
            "/api/v1/candidates/selection/current",
            get(current_selection_handler::<S>),
        )
        .route("/api/v1/candidates/:candidate_id", get(detail_handler::<S>))
        .with_state(directory)
}

pub(crate) async fn list_handler<S>(
    State(directory): State<Arc<CandidateDirectory<S>>>,
    Query(query): Query<CandidateQuery>,
) -> Response
where
    S: CandidateSource + 'static,
{
    (StatusCode::OK, axum::Json(directory.query(&query))).into_response()
}

pub(crate) async fn stats_handler<S>(
    State(directory): State<Arc<CandidateDirectory<S>>>,
) -> Response
where
    S: CandidateSource + 'static,
{
    (StatusCode::OK, axum::Json(directory.stats())).into_response()
}

pub(crate) async fn detail_handler<S>(
    State(directory): State<Arc<CandidateDirectory<S>>>,
    Path(candidate_id): Path<usize>,
) -> Response
where
    S: CandidateSource + 'static,
{
    match directory.get(candidate_id) {
        Some(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        None => {
            let payload = json!({ "error": "candidate not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn export_handler<S>(
    State(directory): State<Arc<CandidateDirectory<S>>>,
) -> Response
where
    S: CandidateSource + 'static,
{
    match directory.export_csv() {
        Ok(body) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"candidates.csv\"",
                ),
            ],
            body,
        )
            .into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn refresh_handler<S>(
    State(directory): State<Arc<CandidateDirectory<S>>>,
) -> Response
where
    S: CandidateSource + 'static,
{
    match directory.refresh() {
        Ok(total) => (StatusCode::OK, axum::Json(json!({ "total": total }))).into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn save_selection_handler<S>(
    State(directory): State<Arc<CandidateDirectory<S>>>,
    axum::Json(request): axum::Json<SelectionRequest>,
) -> Response
where
    S: CandidateSource + 'static,
{
    match directory.save_selection(request) {
        Ok(selection) => {
            let payload = json!({ "success": true, "selection": selection });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(
            error @ (DirectoryError::ShortlistSize(_)
            | DirectoryError::DuplicateCandidate(_)
            | DirectoryError::UnknownCandidate(_)),
        ) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn current_selection_handler<S>(
    State(directory): State<Arc<CandidateDirectory<S>>>,
) -> Response
where
    S: CandidateSource + 'static,
{
    (StatusCode::OK, axum::Json(directory.current_selection())).into_response()
}

fn internal_error(error: DirectoryError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
