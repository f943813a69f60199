use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    routing::post,
    Json, Router,
};
use chrono::Utc;
use serde_json::json;

use super::catalog::{self, LIKERT_SCALE, MAX_RESPONSE};
use super::document::render_document;
use super::domain::{SubmissionForm, SubmissionId};
use super::repository::{RepositoryError, SubmissionFilter, SubmissionRepository};
use super::service::{AssessmentService, AssessmentServiceError};

/// Router builder exposing the questionnaire intake, report, and admin
/// endpoints.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: SubmissionRepository + 'static,
{
    Router::new()
        .route("/api/v1/catalog", get(catalog_handler))
        .route(
            "/api/v1/assessments",
            post(submit_handler::<R>).get(list_handler::<R>),
        )
        .route("/api/v1/assessments/export.csv", get(export_handler::<R>))
        .route(
            "/api/v1/assessments/:submission_id/report",
            get(report_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:submission_id/document",
            get(document_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn catalog_handler() -> Json<serde_json::Value> {
    Json(json!({
        "questions": catalog::questions(),
        "scale": LIKERT_SCALE,
        "max_response": MAX_RESPONSE,
    }))
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Json(form): Json<SubmissionForm>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.submit(form) {
        Ok(record) => {
            let payload = json!({
                "submission_id": record.id,
                "created_at": record.created_at,
                "scores": record.ranked_scores(),
            });
            (StatusCode::CREATED, Json(payload)).into_response()
        }
        Err(AssessmentServiceError::Validation(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(AssessmentServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({ "error": "submission already exists" });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        Err(AssessmentServiceError::Repository(RepositoryError::Unavailable(_))) => {
            let payload = json!({
                "error": "failed to save the assessment, please try again",
            });
            (StatusCode::SERVICE_UNAVAILABLE, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn report_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(submission_id): Path<String>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    let id = SubmissionId(submission_id);
    match service.report(&id) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => not_found_or_internal(&id, error),
    }
}

pub(crate) async fn document_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(submission_id): Path<String>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    let id = SubmissionId(submission_id);
    match service.report(&id) {
        Ok(report) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            render_document(&report),
        )
            .into_response(),
        Err(error) => not_found_or_internal(&id, error),
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Query(filter): Query<SubmissionFilter>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.list(&filter) {
        Ok(submissions) => {
            let payload = json!({
                "count": submissions.len(),
                "submissions": submissions,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn export_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Query(filter): Query<SubmissionFilter>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.export_csv(&filter) {
        Ok(csv) => {
            let filename = format!(
                "attachment; filename=\"mi-assessments-{}.csv\"",
                Utc::now().format("%Y-%m-%d")
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (header::CONTENT_DISPOSITION, filename),
                ],
                csv,
            )
                .into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

/// Map a report-path failure: a missing submission gets a dedicated
/// not-found payload with a way back to the entry point, everything else is
/// a generic store failure.
fn not_found_or_internal(id: &SubmissionId, error: AssessmentServiceError) -> Response {
    match error {
        AssessmentServiceError::Repository(RepositoryError::NotFound) => {
            let payload = json!({
                "error": "assessment not found",
                "submission_id": id.0,
                "entry_point": "/api/v1/catalog",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_)) => {
            let payload = json!({
                "error": "failed to load the assessment, please try again",
            });
            (StatusCode::SERVICE_UNAVAILABLE, Json(payload)).into_response()
        }
        other => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
