use job_board::board::applications::{
    Application, ApplicationNotice, ApplicationNotifier, NotificationError,
};
use job_board::board::jobs::Job;
use job_board::board::{Board, MemoryCollection};
use job_board::config::BoardConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

pub(crate) type MemoryJobs = MemoryCollection<Job>;
pub(crate) type MemoryApplications = MemoryCollection<Application>;
pub(crate) type InMemoryBoard = Board<MemoryJobs, MemoryApplications, InMemoryNotificationOutbox>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Keeps every notice in memory; stands in for an e-mail transport.
#[derive(Default, Clone)]
pub(crate) struct InMemoryNotificationOutbox {
    notices: Arc<Mutex<Vec<ApplicationNotice>>>,
}

impl ApplicationNotifier for InMemoryNotificationOutbox {
    fn publish(&self, notice: ApplicationNotice) -> Result<(), NotificationError> {
        let mut guard = self
            .notices
            .lock()
            .map_err(|_| NotificationError::Transport("outbox mutex poisoned".to_string()))?;
        info!(
            template = notice.template.label(),
            recipient = %notice.recipient,
            application_id = %notice.application_id,
            "notification queued"
        );
        guard.push(notice);
        Ok(())
    }
}

impl InMemoryNotificationOutbox {
    pub(crate) fn notices(&self) -> Vec<ApplicationNotice> {
        self.notices
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

pub(crate) fn in_memory_board(config: &BoardConfig) -> (InMemoryBoard, Arc<InMemoryNotificationOutbox>) {
    let jobs = Arc::new(MemoryCollection::new("jobs"));
    let applications = Arc::new(MemoryCollection::new("applications"));
    let outbox = Arc::new(InMemoryNotificationOutbox::default());
    let board = Board::new(jobs, applications, outbox.clone(), config);
    (board, outbox)
}
