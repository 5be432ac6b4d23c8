use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Liveness payload served at `/api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub timestamp: String,
    pub service: String,
}

impl HealthReport {
    pub fn current(service: &str) -> Self {
        Self {
            status: "healthy",
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            service: service.to_string(),
        }
    }
}

pub fn health_router(service_name: impl Into<Arc<str>>) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .with_state(service_name.into())
}

pub(crate) async fn health_handler(State(service_name): State<Arc<str>>) -> Json<HealthReport> {
    Json(HealthReport::current(&service_name))
}
