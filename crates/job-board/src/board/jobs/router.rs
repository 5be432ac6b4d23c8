use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use super::domain::{Job, JobDraft, JobPatch, JobQuery};
use super::service::JobService;
use crate::board::error::BoardError;
use crate::board::mapper::{expose, expose_all, Exposed};
use crate::board::storage::{DocumentCollection, ResourceId};

/// Router exposing the job posting endpoints.
pub fn jobs_router<J>(service: Arc<JobService<J>>) -> Router
where
    J: DocumentCollection<Job> + 'static,
{
    Router::new()
        .route("/api/jobs", get(list_handler::<J>).post(create_handler::<J>))
        .route(
            "/api/jobs/:job_id",
            get(get_handler::<J>)
                .put(update_handler::<J>)
                .delete(delete_handler::<J>),
        )
        .with_state(service)
}

pub(crate) async fn list_handler<J>(
    State(service): State<Arc<JobService<J>>>,
    Query(query): Query<JobQuery>,
) -> Result<Json<Vec<Exposed<Job>>>, BoardError>
where
    J: DocumentCollection<Job> + 'static,
{
    let status = query.status_filter()?;
    let jobs = service.list(status)?;
    Ok(Json(expose_all(jobs)))
}

pub(crate) async fn create_handler<J>(
    State(service): State<Arc<JobService<J>>>,
    Json(draft): Json<JobDraft>,
) -> Result<(StatusCode, Json<Exposed<Job>>), BoardError>
where
    J: DocumentCollection<Job> + 'static,
{
    let stored = service.create(draft)?;
    Ok((StatusCode::CREATED, Json(expose(stored))))
}

pub(crate) async fn get_handler<J>(
    State(service): State<Arc<JobService<J>>>,
    Path(job_id): Path<String>,
) -> Result<Json<Exposed<Job>>, BoardError>
where
    J: DocumentCollection<Job> + 'static,
{
    let stored = service.get(&ResourceId(job_id))?;
    Ok(Json(expose(stored)))
}

pub(crate) async fn update_handler<J>(
    State(service): State<Arc<JobService<J>>>,
    Path(job_id): Path<String>,
    Json(patch): Json<JobPatch>,
) -> Result<Json<Exposed<Job>>, BoardError>
where
    J: DocumentCollection<Job> + 'static,
{
    let stored = service.update(&ResourceId(job_id), patch)?;
    Ok(Json(expose(stored)))
}

pub(crate) async fn delete_handler<J>(
    State(service): State<Arc<JobService<J>>>,
    Path(job_id): Path<String>,
) -> Result<Json<Value>, BoardError>
where
    J: DocumentCollection<Job> + 'static,
{
    service.delete(&ResourceId(job_id))?;
    Ok(Json(json!({ "success": true })))
}
