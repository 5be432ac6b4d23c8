use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use super::domain::{Application, ApplicationDraft, ApplicationPatch, ApplicationQuery};
use super::notify::ApplicationNotifier;
use super::service::ApplicationService;
use crate::board::error::BoardError;
use crate::board::jobs::Job;
use crate::board::mapper::{expose, expose_all, Exposed};
use crate::board::storage::{DocumentCollection, ResourceId};

type SharedService<J, A, N> = Arc<ApplicationService<J, A, N>>;

/// Router exposing the application intake and listing endpoints.
pub fn applications_router<J, A, N>(service: SharedService<J, A, N>) -> Router
where
    J: DocumentCollection<Job> + 'static,
    A: DocumentCollection<Application> + 'static,
    N: ApplicationNotifier + 'static,
{
    Router::new()
        .route(
            "/api/applications",
            get(list_handler::<J, A, N>).post(create_handler::<J, A, N>),
        )
        .route(
            "/api/applications/:application_id",
            get(get_handler::<J, A, N>)
                .put(update_handler::<J, A, N>)
                .delete(delete_handler::<J, A, N>),
        )
        .with_state(service)
}

pub(crate) async fn list_handler<J, A, N>(
    State(service): State<SharedService<J, A, N>>,
    Query(query): Query<ApplicationQuery>,
) -> Result<Json<Vec<Exposed<Application>>>, BoardError>
where
    J: DocumentCollection<Job> + 'static,
    A: DocumentCollection<Application> + 'static,
    N: ApplicationNotifier + 'static,
{
    let filter = query.filter()?;
    let applications = service.list(&filter)?;
    Ok(Json(expose_all(applications)))
}

pub(crate) async fn create_handler<J, A, N>(
    State(service): State<SharedService<J, A, N>>,
    Json(draft): Json<ApplicationDraft>,
) -> Result<(StatusCode, Json<Exposed<Application>>), BoardError>
where
    J: DocumentCollection<Job> + 'static,
    A: DocumentCollection<Application> + 'static,
    N: ApplicationNotifier + 'static,
{
    let stored = service.create(draft)?;
    Ok((StatusCode::CREATED, Json(expose(stored))))
}

pub(crate) async fn get_handler<J, A, N>(
    State(service): State<SharedService<J, A, N>>,
    Path(application_id): Path<String>,
) -> Result<Json<Exposed<Application>>, BoardError>
where
    J: DocumentCollection<Job> + 'static,
    A: DocumentCollection<Application> + 'static,
    N: ApplicationNotifier + 'static,
{
    let stored = service.get(&ResourceId(application_id))?;
    Ok(Json(expose(stored)))
}

pub(crate) async fn update_handler<J, A, N>(
    State(service): State<SharedService<J, A, N>>,
    Path(application_id): Path<String>,
    Json(patch): Json<ApplicationPatch>,
) -> Result<Json<Exposed<Application>>, BoardError>
where
    J: DocumentCollection<Job> + 'static,
    A: DocumentCollection<Application> + 'static,
    N: ApplicationNotifier + 'static,
{
    let stored = service.update(&ResourceId(application_id), patch)?;
    Ok(Json(expose(stored)))
}

pub(crate) async fn delete_handler<J, A, N>(
    State(service): State<SharedService<J, A, N>>,
    Path(application_id): Path<String>,
) -> Result<Json<Value>, BoardError>
where
    J: DocumentCollection<Job> + 'static,
    A: DocumentCollection<Application> + 'static,
    N: ApplicationNotifier + 'static,
{
    service.delete(&ResourceId(application_id))?;
    Ok(Json(json!({ "success": true })))
}
