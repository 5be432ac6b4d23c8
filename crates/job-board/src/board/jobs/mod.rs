pub mod domain;
pub mod router;
pub mod service;

pub use domain::{Job, JobChanges, JobDraft, JobPatch, JobQuery, JobStatus, JobType};
pub use router::jobs_router;
pub use service::JobService;
