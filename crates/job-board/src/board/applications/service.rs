use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{Application, ApplicationDraft, ApplicationFilter, ApplicationPatch};
use super::notify::{ApplicationNotice, ApplicationNotifier, NoticeTemplate};
use crate::board::error::BoardError;
use crate::board::jobs::Job;
use crate::board::storage::{DocumentCollection, ResourceId, StoredDocument};

/// Service composing the application collection, the job collection it references, and the
/// outbound notifier.
pub struct ApplicationService<J, A, N> {
    jobs: Arc<J>,
    applications: Arc<A>,
    notifier: Arc<N>,
    admin_email: String,
}

impl<J, A, N> ApplicationService<J, A, N>
where
    J: DocumentCollection<Job> + 'static,
    A: DocumentCollection<Application> + 'static,
    N: ApplicationNotifier + 'static,
{
    pub fn new(
        jobs: Arc<J>,
        applications: Arc<A>,
        notifier: Arc<N>,
        admin_email: impl Into<String>,
    ) -> Self {
        Self {
            jobs,
            applications,
            notifier,
            admin_email: admin_email.into(),
        }
    }

    pub fn list(
        &self,
        filter: &ApplicationFilter,
    ) -> Result<Vec<StoredDocument<Application>>, BoardError> {
        let mut documents = self.applications.list()?;
        documents.retain(|document| filter.matches(&document.body));
        Ok(documents)
    }

    /// Submit a new application against an existing job.
    pub fn create(
        &self,
        draft: ApplicationDraft,
    ) -> Result<StoredDocument<Application>, BoardError> {
        let application = draft.into_application(Utc::now())?;

        if self.jobs.fetch(&application.job_id)?.is_none() {
            return Err(BoardError::Validation(format!(
                "jobId '{}' does not reference an existing job",
                application.job_id
            )));
        }

        let stored = self
            .applications
            .insert(ResourceId::generate(), application)?;
        info!(
            application_id = %stored.id,
            job_id = %stored.body.job_id,
            "application received"
        );

        self.adjust_applications_count(&stored.body.job_id, 1);
        self.notify_received(&stored);
        Ok(stored)
    }

    pub fn get(&self, id: &ResourceId) -> Result<StoredDocument<Application>, BoardError> {
        self.applications.fetch(id)?.ok_or_else(|| not_found(id))
    }

    pub fn update(
        &self,
        id: &ResourceId,
        patch: ApplicationPatch,
    ) -> Result<StoredDocument<Application>, BoardError> {
        let changes = patch.validate()?;
        let updated = self
            .applications
            .modify(id, &mut |application| changes.apply(application))?
            .ok_or_else(|| not_found(id))?;
        info!(application_id = %id, status = ?updated.body.status, "application updated");
        Ok(updated)
    }

    pub fn delete(&self, id: &ResourceId) -> Result<(), BoardError> {
        let removed = self.applications.remove(id)?.ok_or_else(|| not_found(id))?;
        self.adjust_applications_count(&removed.body.job_id, -1);
        info!(application_id = %id, "application deleted");
        Ok(())
    }

    /// Keeps the job's denormalized counter in step. The application write has already
    /// committed, so failures here are logged rather than surfaced.
    fn adjust_applications_count(&self, job_id: &ResourceId, delta: i64) {
        let outcome = self.jobs.modify(job_id, &mut |job| {
            let next = i64::from(job.applications_count) + delta;
            job.applications_count = u32::try_from(next.max(0)).unwrap_or(u32::MAX);
        });
        match outcome {
            Ok(Some(_)) => {}
            Ok(None) => warn!(%job_id, "job vanished before its applications count was updated"),
            Err(err) => warn!(%job_id, error = %err, "failed to update applications count"),
        }
    }

    fn notify_received(&self, stored: &StoredDocument<Application>) {
        let mut details = BTreeMap::new();
        details.insert("candidate_name".to_string(), stored.body.name.clone());
        details.insert("candidate_email".to_string(), stored.body.email.clone());
        details.insert("job_title".to_string(), stored.body.position.clone());

        let notices = [
            (NoticeTemplate::CandidateConfirmation, stored.body.email.clone()),
            (NoticeTemplate::AdminNewApplication, self.admin_email.clone()),
        ];
        for (template, recipient) in notices {
            let notice = ApplicationNotice {
                template,
                recipient,
                application_id: stored.id.clone(),
                details: details.clone(),
            };
            if let Err(err) = self.notifier.publish(notice) {
                warn!(
                    application_id = %stored.id,
                    template = template.label(),
                    error = %err,
                    "notification dispatch failed"
                );
            }
        }
    }
}

fn not_found(id: &ResourceId) -> BoardError {
    BoardError::NotFound {
        resource: "application",
        id: id.clone(),
    }
}
