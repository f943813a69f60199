//! HTTP round-trips through the assessment router, using `tower::ServiceExt`
//! so no listener is needed.

mod common;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use common::{complete_form, InMemorySubmissionRepository};
use mi_profile::assessment::{assessment_router, AssessmentService};
use tower::util::ServiceExt;

fn app() -> (Router, Arc<InMemorySubmissionRepository>) {
    let repository = Arc::new(InMemorySubmissionRepository::default());
    let service = Arc::new(AssessmentService::new(repository.clone()));
    (assessment_router(service), repository)
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}

#[tokio::test]
async fn catalog_endpoint_serves_the_full_question_list() {
    let (app, _repository) = app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/catalog")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["questions"].as_array().map(Vec::len), Some(43));
    assert_eq!(body["scale"].as_array().map(Vec::len), Some(4));
    assert_eq!(body["max_response"], 4);
}

#[tokio::test]
async fn valid_submission_returns_created_with_ranked_scores() {
    let (app, _repository) = app();
    let form = complete_form();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/assessments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&form).expect("form serializes"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert!(body["submission_id"]
        .as_str()
        .expect("id present")
        .starts_with("sub-"));
    assert_eq!(body["scores"].as_array().map(Vec::len), Some(8));
}

#[tokio::test]
async fn malformed_email_is_rejected_with_a_single_message() {
    let (app, _repository) = app();
    let mut form = complete_form();
    form.email = "asha@example".to_string();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/assessments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&form).expect("form serializes"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["error"], "please enter a valid email address");
}

#[tokio::test]
async fn blank_date_of_birth_is_rejected_with_a_single_message() {
    let (app, _repository) = app();
    let mut form = complete_form();
    form.date_of_birth = "".to_string();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/assessments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&form).expect("form serializes"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(
        body["error"],
        "please fill in all personal information fields (date_of_birth is missing)"
    );
}

#[tokio::test]
async fn blank_date_of_birth_is_reported_before_email_shape() {
    let (app, _repository) = app();
    let mut form = complete_form();
    form.date_of_birth = "   ".to_string();
    form.email = "not-an-email".to_string();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/assessments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&form).expect("form serializes"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(
        body["error"],
        "please fill in all personal information fields (date_of_birth is missing)"
    );
}

#[tokio::test]
async fn unknown_submission_gets_a_dedicated_not_found_state() {
    let (app, _repository) = app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/assessments/sub-999999/report")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"], "assessment not found");
    assert_eq!(body["entry_point"], "/api/v1/catalog");
}

#[tokio::test]
async fn report_and_document_share_one_submission() {
    let (app, _repository) = app();
    let form = complete_form();

    let created = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/assessments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&form).expect("form serializes"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    let id = json_body(created).await["submission_id"]
        .as_str()
        .expect("id present")
        .to_string();

    let report = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/v1/assessments/{id}/report"))
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(report.status(), StatusCode::OK);
    let report_body = json_body(report).await;
    assert_eq!(report_body["highlights"].as_array().map(Vec::len), Some(2));

    let document = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/v1/assessments/{id}/document"))
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(document.status(), StatusCode::OK);
    let content_type = document
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));
    let bytes = to_bytes(document.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let html = String::from_utf8(bytes.to_vec()).expect("utf-8 document");
    assert!(html.contains("MI Assessment Report"));
    assert!(html.contains("Asha Patel"));
}

#[tokio::test]
async fn store_outage_maps_to_service_unavailable() {
    let (app, repository) = app();
    repository.fail_inserts();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/assessments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&complete_form()).expect("form serializes"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn csv_export_sets_download_headers() {
    let (app, _repository) = app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/assessments/export.csv")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/csv"));
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"mi-assessments-"));

    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let csv = String::from_utf8(bytes.to_vec()).expect("utf-8 csv");
    assert!(csv.starts_with("Name,Email,Phone,DOB,City,Created At,Top Domain"));
}
