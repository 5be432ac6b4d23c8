use super::common::*;
use axum::extract::{Query, State};
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::board::jobs::{JobQuery, JobService};
use crate::board::router::board_router;
use crate::board::storage::{DocumentCollection, ResourceId};

#[tokio::test]
async fn health_reports_configured_service_name() {
    let (board, _, _, _) = build_board();
    let router = board_router(&board);

    let (status, payload) = get_json(&router, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["status"], json!("healthy"));
    assert_eq!(payload["service"], json!("Careers Test API"));
    assert!(payload["timestamp"].is_string());
}

#[tokio::test]
async fn empty_collections_list_as_arrays() {
    let (board, _, _, _) = build_board();
    let router = board_router(&board);

    let (jobs_status, jobs) = get_json(&router, "/api/jobs").await;
    let (apps_status, applications) = get_json(&router, "/api/applications").await;

    assert_eq!(jobs_status, StatusCode::OK);
    assert_eq!(apps_status, StatusCode::OK);
    assert_eq!(jobs, json!([]));
    assert_eq!(applications, json!([]));
}

#[tokio::test]
async fn seeded_lists_hide_storage_keys_and_use_valid_statuses() {
    let (router, _, _) = seeded_router();

    let (_, jobs) = get_json(&router, "/api/jobs").await;
    let jobs = jobs.as_array().expect("jobs array");
    assert!(jobs.len() >= 4);
    for job in jobs {
        assert_no_storage_key(job);
        for field in ["title", "type", "location", "status", "description"] {
            assert!(job.get(field).is_some(), "job missing {field}");
        }
        let status = job["status"].as_str().expect("status string");
        assert!(["draft", "published", "paused", "closed", "archived"].contains(&status));
    }

    let (_, applications) = get_json(&router, "/api/applications").await;
    let applications = applications.as_array().expect("applications array");
    assert!(applications.len() >= 5);
    for application in applications {
        assert_no_storage_key(application);
        for field in ["name", "email", "status", "position", "jobId"] {
            assert!(application.get(field).is_some(), "application missing {field}");
        }
        let status = application["status"].as_str().expect("status string");
        assert!([
            "new",
            "screening",
            "interview_scheduled",
            "interview_complete",
            "offer_pending",
            "hired",
            "rejected",
            "on_hold"
        ]
        .contains(&status));
    }
}

#[tokio::test]
async fn post_job_returns_created_representation() {
    let (board, _, _, _) = build_board();
    let router = board_router(&board);

    let response = send(
        &router,
        Method::POST,
        "/api/jobs",
        Some(json!({
            "title": "TEST_QA Engineer",
            "type": "full-time",
            "salaryMin": "$80k",
            "salaryMax": "$120k",
            "location": "Remote",
            "description": "Test job description",
            "requirements": ["Python", "Selenium"],
            "responsibilities": ["Write tests", "Review code"],
            "status": "draft"
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_no_storage_key(&payload);
    assert_eq!(payload["title"], json!("TEST_QA Engineer"));
    assert_eq!(payload["type"], json!("full-time"));
    assert_eq!(payload["salaryMin"], json!("$80k"));
    assert_eq!(payload["requirements"], json!(["Python", "Selenium"]));
    assert_eq!(payload["applicationsCount"], json!(0));

    let (_, listed) = get_json(&router, "/api/jobs").await;
    assert_eq!(listed[0]["id"], payload["id"]);
}

#[tokio::test]
async fn post_job_with_invalid_status_is_a_client_error() {
    let (board, _, _, _) = build_board();
    let router = board_router(&board);

    let response = send(
        &router,
        Method::POST,
        "/api/jobs",
        Some(json!({
            "title": "Ops",
            "type": "full-time",
            "location": "Remote",
            "description": "Keep the lights on",
            "status": "live"
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"].as_str().unwrap_or_default().contains("status"));
}

#[tokio::test]
async fn post_application_ignores_caller_status() {
    let (router, jobs, _) = seeded_router();
    let (_, listed) = get_json(&router, "/api/jobs").await;
    let job_id = listed[0]["id"].as_str().expect("job id").to_string();
    let title = listed[0]["title"].clone();

    let response = send(
        &router,
        Method::POST,
        "/api/applications",
        Some(json!({
            "jobId": job_id,
            "name": "TEST_John Tester",
            "email": "test.john@example.com",
            "phone": "+1 555-0199",
            "position": title,
            "resumeUrl": "/resumes/test-john.pdf",
            "linkedIn": "linkedin.com/in/johntester",
            "portfolio": "johntester.dev",
            "coverLetter": "I am excited to apply for this position...",
            "experience": "5 years",
            "status": "hired"
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_no_storage_key(&payload);
    assert_eq!(payload["name"], json!("TEST_John Tester"));
    assert_eq!(payload["email"], json!("test.john@example.com"));
    assert_eq!(payload["status"], json!("new"));
    assert_eq!(payload["linkedIn"], json!("linkedin.com/in/johntester"));
    assert_eq!(payload["rating"], json!(0.0));
    assert_eq!(payload["notes"], json!([]));
    assert_eq!(payload["ratings"], json!([]));

    let job = jobs
        .fetch(&ResourceId(job_id))
        .expect("fetch succeeds")
        .expect("job present");
    assert_eq!(job.body.applications_count, 2);
}

#[tokio::test]
async fn post_application_for_unknown_job_is_rejected() {
    let (router, _, applications) = seeded_router();

    let response = send(
        &router,
        Method::POST,
        "/api/applications",
        Some(json!({
            "jobId": "does-not-exist",
            "name": "Nobody",
            "email": "nobody@example.com",
            "position": "Phantom"
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(applications.list().expect("list").len(), 5);
}

#[tokio::test]
async fn application_filter_matches_job_id_exactly() {
    let (router, _, _) = seeded_router();

    let (status, filtered) = get_json(&router, "/api/applications?jobId=2").await;
    assert_eq!(status, StatusCode::OK);
    let filtered = filtered.as_array().expect("array");
    assert_eq!(filtered.len(), 3);
    assert!(filtered
        .iter()
        .all(|application| application["jobId"] == json!("2")));

    let (_, unused) = get_json(&router, "/api/applications?jobId=unused-job").await;
    assert_eq!(unused, json!([]));

    let (status, _) = get_json(&router, "/api/applications?status=offer").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn blank_application_query_values_list_everything() {
    let (router, _, _) = seeded_router();

    let (status, listed) = get_json(&router, "/api/applications?jobId=&status=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(5));

    let (status, listed) = get_json(&router, "/api/applications?jobId=%20&stage=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(5));

    let (status, listed) = get_json(&router, "/api/jobs?status=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn applications_filter_by_stage() {
    let (router, _, _) = seeded_router();

    let (status, listed) =
        get_json(&router, "/api/applications?jobId=2&stage=interview_scheduled").await;
    assert_eq!(status, StatusCode::OK);
    let listed = listed.as_array().expect("array");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], json!("app-3"));
    assert_eq!(listed[0]["stage"], json!("interview_scheduled"));

    let (status, payload) = get_json(&router, "/api/applications?stage=offer").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(payload["error"].as_str().unwrap_or_default().contains("stage"));
}

#[tokio::test]
async fn applications_expose_rating_notes_and_scorecards() {
    let (router, _, _) = seeded_router();

    let (_, first) = get_json(&router, "/api/applications/app-1").await;
    assert_eq!(first["rating"], json!(4.5));
    assert_eq!(first["notes"], json!([]));
    let scorecards = first["ratings"].as_array().expect("ratings array");
    assert_eq!(scorecards.len(), 2);
    assert_eq!(scorecards[0]["category"], json!("Technical Skills"));
    assert_eq!(scorecards[0]["maxScore"], json!(10));

    let (_, second) = get_json(&router, "/api/applications/app-2").await;
    assert_eq!(second["notes"][0]["noteType"], json!("phone_screen"));
    assert_eq!(second["notes"][0]["isPinned"], json!(true));
    assert_eq!(second["ratings"], json!([]));

    let response = send(
        &router,
        Method::PUT,
        "/api/applications/app-2",
        Some(json!({ "rating": 4.5 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json_body(response).await["rating"], json!(4.5));

    let response = send(
        &router,
        Method::PUT,
        "/api/applications/app-2",
        Some(json!({ "rating": 9 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn single_resource_routes_round_out_crud() {
    let (router, _, _) = seeded_router();

    let (status, job) = get_json(&router, "/api/jobs/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(job["title"], json!("Senior product designer"));

    let response = send(
        &router,
        Method::PUT,
        "/api/jobs/3",
        Some(json!({ "status": "closed" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json_body(response).await["status"], json!("closed"));

    let response = send(
        &router,
        Method::PUT,
        "/api/applications/app-4",
        Some(json!({ "status": "on_hold" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json_body(response).await["stage"], json!("on_hold"));

    let response = send(&router, Method::DELETE, "/api/applications/app-4", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json_body(response).await, json!({ "success": true }));

    let (status, job) = get_json(&router, "/api/jobs/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(job["applicationsCount"], json!(0));

    let (status, payload) = get_json(&router, "/api/applications/app-4").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(payload["error"].is_string());

    let response = send(&router, Method::DELETE, "/api/jobs/missing", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn seed_endpoint_resets_the_board() {
    let (router, _, _) = seeded_router();
    send(&router, Method::DELETE, "/api/jobs/1", None).await;

    let response = send(&router, Method::POST, "/api/seed", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let payload: Value = read_json_body(response).await;
    assert_eq!(payload["success"], json!(true));
    assert_eq!(payload["counts"], json!({ "jobs": 4, "applications": 5 }));

    let (_, jobs) = get_json(&router, "/api/jobs").await;
    assert_eq!(jobs.as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn list_handler_surfaces_storage_failure_as_server_error() {
    let service = Arc::new(JobService::new(Arc::new(UnavailableCollection)));

    let response = crate::board::jobs::router::list_handler::<UnavailableCollection>(
        State(service),
        Query(JobQuery::default()),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("database offline"));
}
