use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use crate::board::applications::{
    Application, ApplicationDraft, ApplicationNotice, ApplicationNotifier, NotificationError,
};
use crate::board::jobs::{Job, JobDraft};
use crate::board::router::{board_router, Board};
use crate::board::storage::{
    DocumentCollection, MemoryCollection, RepositoryError, ResourceId, StoredDocument,
};
use crate::config::BoardConfig;

pub(super) type MemoryJobs = MemoryCollection<Job>;
pub(super) type MemoryApplications = MemoryCollection<Application>;
pub(super) type TestBoard = Board<MemoryJobs, MemoryApplications, RecordingNotifier>;

pub(super) const ADMIN_EMAIL: &str = "hiring@example.com";

pub(super) fn board_config() -> BoardConfig {
    BoardConfig {
        service_name: "Careers Test API".to_string(),
        seed_on_start: false,
        admin_email: ADMIN_EMAIL.to_string(),
    }
}

pub(super) fn build_board() -> (
    TestBoard,
    Arc<MemoryJobs>,
    Arc<MemoryApplications>,
    Arc<RecordingNotifier>,
) {
    let jobs = Arc::new(MemoryCollection::new("jobs"));
    let applications = Arc::new(MemoryCollection::new("applications"));
    let notifier = Arc::new(RecordingNotifier::default());
    let board = Board::new(
        jobs.clone(),
        applications.clone(),
        notifier.clone(),
        &board_config(),
    );
    (board, jobs, applications, notifier)
}

pub(super) fn seeded_router() -> (Router, Arc<MemoryJobs>, Arc<MemoryApplications>) {
    let (board, jobs, applications, _) = build_board();
    board.seeder.run().expect("seed succeeds");
    (board_router(&board), jobs, applications)
}

pub(super) fn job_draft() -> JobDraft {
    JobDraft {
        title: Some("QA Engineer".to_string()),
        job_type: Some("full-time".to_string()),
        salary_min: Some("$80k".to_string()),
        salary_max: Some("$120k".to_string()),
        location: Some("Remote".to_string()),
        description: Some("Own the regression suite".to_string()),
        requirements: Some(vec!["Python".to_string(), "Selenium".to_string()]),
        responsibilities: Some(vec!["Write tests".to_string(), "Review code".to_string()]),
        status: Some("draft".to_string()),
        ..JobDraft::default()
    }
}

pub(super) fn application_draft(job_id: &ResourceId, position: &str) -> ApplicationDraft {
    ApplicationDraft {
        job_id: Some(job_id.0.clone()),
        name: Some("John Tester".to_string()),
        email: Some("john.tester@example.com".to_string()),
        phone: Some("+1 555-0199".to_string()),
        position: Some(position.to_string()),
        resume_url: Some("/resumes/john-tester.pdf".to_string()),
        linked_in: Some("linkedin.com/in/johntester".to_string()),
        portfolio: Some("johntester.dev".to_string()),
        cover_letter: Some("I am excited to apply".to_string()),
        experience: Some("5 years".to_string()),
    }
}

#[derive(Default, Clone)]
pub(super) struct RecordingNotifier {
    notices: Arc<Mutex<Vec<ApplicationNotice>>>,
}

impl RecordingNotifier {
    pub(super) fn notices(&self) -> Vec<ApplicationNotice> {
        self.notices.lock().expect("notifier mutex poisoned").clone()
    }
}

impl ApplicationNotifier for RecordingNotifier {
    fn publish(&self, notice: ApplicationNotice) -> Result<(), NotificationError> {
        self.notices
            .lock()
            .expect("notifier mutex poisoned")
            .push(notice);
        Ok(())
    }
}

pub(super) struct OfflineNotifier;

impl ApplicationNotifier for OfflineNotifier {
    fn publish(&self, _notice: ApplicationNotice) -> Result<(), NotificationError> {
        Err(NotificationError::Transport("smtp offline".to_string()))
    }
}

/// Collection whose backend is unreachable.
pub(super) struct UnavailableCollection;

impl<T> DocumentCollection<T> for UnavailableCollection {
    fn insert(&self, _id: ResourceId, _body: T) -> Result<StoredDocument<T>, RepositoryError> {
        Err(offline())
    }

    fn list(&self) -> Result<Vec<StoredDocument<T>>, RepositoryError> {
        Err(offline())
    }

    fn fetch(&self, _id: &ResourceId) -> Result<Option<StoredDocument<T>>, RepositoryError> {
        Err(offline())
    }

    fn modify(
        &self,
        _id: &ResourceId,
        _change: &mut dyn FnMut(&mut T),
    ) -> Result<Option<StoredDocument<T>>, RepositoryError> {
        Err(offline())
    }

    fn remove(&self, _id: &ResourceId) -> Result<Option<StoredDocument<T>>, RepositoryError> {
        Err(offline())
    }

    fn replace_all(
        &self,
        _documents: Vec<(ResourceId, T)>,
    ) -> Result<Vec<StoredDocument<T>>, RepositoryError> {
        Err(offline())
    }
}

fn offline() -> RepositoryError {
    RepositoryError::Unavailable("database offline".to_string())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&payload).expect("payload encodes")))
            .expect("request builds"),
        None => builder.body(Body::empty()).expect("request builds"),
    };

    router
        .clone()
        .oneshot(request)
        .await
        .expect("route executes")
}

pub(super) async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = send(router, Method::GET, uri, None).await;
    let status = response.status();
    (status, read_json_body(response).await)
}

pub(super) fn assert_no_storage_key(value: &Value) {
    let object = value.as_object().expect("object payload");
    assert!(object.contains_key("id"), "id missing from {value}");
    assert!(!object.contains_key("_id"), "_id leaked in {value}");
    assert!(!object.contains_key("key"), "storage key leaked in {value}");
}
