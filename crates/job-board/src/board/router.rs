use std::sync::Arc;

use axum::Router;

use super::applications::{applications_router, Application, ApplicationNotifier, ApplicationService};
use super::health::health_router;
use super::jobs::{jobs_router, Job, JobService};
use super::seed::{seed_router, Seeder};
use super::storage::DocumentCollection;
use crate::config::BoardConfig;

/// Services sharing one pair of job and application collections.
pub struct Board<J, A, N> {
    pub jobs: Arc<JobService<J>>,
    pub applications: Arc<ApplicationService<J, A, N>>,
    pub seeder: Arc<Seeder<J, A>>,
    service_name: Arc<str>,
}

impl<J, A, N> Board<J, A, N>
where
    J: DocumentCollection<Job> + 'static,
    A: DocumentCollection<Application> + 'static,
    N: ApplicationNotifier + 'static,
{
    pub fn new(jobs: Arc<J>, applications: Arc<A>, notifier: Arc<N>, config: &BoardConfig) -> Self {
        Self {
            jobs: Arc::new(JobService::new(jobs.clone())),
            applications: Arc::new(ApplicationService::new(
                jobs.clone(),
                applications.clone(),
                notifier,
                config.admin_email.clone(),
            )),
            seeder: Arc::new(Seeder::new(jobs, applications)),
            service_name: Arc::from(config.service_name.as_str()),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

/// Router serving health, jobs, applications, and seeding for one board.
pub fn board_router<J, A, N>(board: &Board<J, A, N>) -> Router
where
    J: DocumentCollection<Job> + 'static,
    A: DocumentCollection<Application> + 'static,
    N: ApplicationNotifier + 'static,
{
    health_router(board.service_name.clone())
        .merge(jobs_router(board.jobs.clone()))
        .merge(applications_router(board.applications.clone()))
        .merge(seed_router(board.seeder.clone()))
}
