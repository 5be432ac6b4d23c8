use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{Job, JobDraft, JobPatch, JobStatus};
use crate::board::error::BoardError;
use crate::board::storage::{DocumentCollection, ResourceId, StoredDocument};

/// Service owning job postings on top of a document collection.
pub struct JobService<J> {
    jobs: Arc<J>,
}

impl<J> JobService<J>
where
    J: DocumentCollection<Job> + 'static,
{
    pub fn new(jobs: Arc<J>) -> Self {
        Self { jobs }
    }

    /// All postings in insertion order, optionally restricted to one status.
    pub fn list(&self, status: Option<JobStatus>) -> Result<Vec<StoredDocument<Job>>, BoardError> {
        let mut documents = self.jobs.list()?;
        if let Some(status) = status {
            documents.retain(|document| document.body.status == status);
        }
        Ok(documents)
    }

    pub fn create(&self, draft: JobDraft) -> Result<StoredDocument<Job>, BoardError> {
        let job = draft.into_job(Utc::now())?;
        let stored = self.jobs.insert(ResourceId::generate(), job)?;
        info!(job_id = %stored.id, title = %stored.body.title, "job created");
        Ok(stored)
    }

    pub fn get(&self, id: &ResourceId) -> Result<StoredDocument<Job>, BoardError> {
        self.jobs.fetch(id)?.ok_or_else(|| not_found(id))
    }

    pub fn update(
        &self,
        id: &ResourceId,
        patch: JobPatch,
    ) -> Result<StoredDocument<Job>, BoardError> {
        let changes = patch.validate()?;
        let now = Utc::now();
        let updated = self
            .jobs
            .modify(id, &mut |job| changes.apply(job, now))?
            .ok_or_else(|| not_found(id))?;
        info!(job_id = %id, status = ?updated.body.status, "job updated");
        Ok(updated)
    }

    pub fn delete(&self, id: &ResourceId) -> Result<(), BoardError> {
        self.jobs.remove(id)?.ok_or_else(|| not_found(id))?;
        info!(job_id = %id, "job deleted");
        Ok(())
    }
}

fn not_found(id: &ResourceId) -> BoardError {
    BoardError::NotFound {
        resource: "job",
        id: id.clone(),
    }
}
