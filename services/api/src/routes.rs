use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use job_board::board::applications::{Application, ApplicationNotifier};
use job_board::board::jobs::Job;
use job_board::board::{board_router, Board, DocumentCollection};
use serde_json::json;

/// Board routes plus the readiness and metrics endpoints served next to them.
pub(crate) fn with_board_routes<J, A, N>(board: &Board<J, A, N>) -> axum::Router
where
    J: DocumentCollection<Job> + 'static,
    A: DocumentCollection<Application> + 'static,
    N: ApplicationNotifier + 'static,
{
    board_router(board)
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
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
