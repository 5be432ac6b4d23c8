//! Reference data set: four published jobs and five applications spread across them.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use super::applications::{
    Application, ApplicationStatus, CandidateNote, CandidateRating, NoteKind, NoteVisibility,
};
use super::error::BoardError;
use super::jobs::{Job, JobStatus, JobType};
use super::storage::{DocumentCollection, RepositoryError, ResourceId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedCounts {
    pub jobs: usize,
    pub applications: usize,
}

/// Replaces the contents of both collections with the reference data set.
pub struct Seeder<J, A> {
    jobs: Arc<J>,
    applications: Arc<A>,
}

impl<J, A> Seeder<J, A>
where
    J: DocumentCollection<Job> + 'static,
    A: DocumentCollection<Application> + 'static,
{
    pub fn new(jobs: Arc<J>, applications: Arc<A>) -> Self {
        Self { jobs, applications }
    }

    pub fn run(&self) -> Result<SeedCounts, RepositoryError> {
        let now = Utc::now();
        let applications = seed_applications(now);
        let jobs = seed_jobs(now)
            .into_iter()
            .map(|(id, mut job)| {
                let count = applications
                    .iter()
                    .filter(|(_, application)| application.job_id == id)
                    .count();
                job.applications_count = u32::try_from(count).unwrap_or(u32::MAX);
                (id, job)
            })
            .collect::<Vec<_>>();

        let counts = SeedCounts {
            jobs: self.jobs.replace_all(jobs)?.len(),
            applications: self.applications.replace_all(applications)?.len(),
        };

        info!(jobs = counts.jobs, applications = counts.applications, "board seeded");
        Ok(counts)
    }
}

pub fn seed_router<J, A>(seeder: Arc<Seeder<J, A>>) -> Router
where
    J: DocumentCollection<Job> + 'static,
    A: DocumentCollection<Application> + 'static,
{
    Router::new()
        .route("/api/seed", post(seed_handler::<J, A>))
        .with_state(seeder)
}

pub(crate) async fn seed_handler<J, A>(
    State(seeder): State<Arc<Seeder<J, A>>>,
) -> Result<Json<Value>, BoardError>
where
    J: DocumentCollection<Job> + 'static,
    A: DocumentCollection<Application> + 'static,
{
    let counts = seeder.run()?;
    Ok(Json(json!({
        "success": true,
        "message": "Database seeded successfully",
        "counts": counts,
    })))
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

struct JobSeed {
    id: &'static str,
    title: &'static str,
    salary: (&'static str, &'static str),
    location: &'static str,
    color: &'static str,
    description: &'static str,
    requirements: [&'static str; 3],
    responsibilities: [&'static str; 3],
    benefits: [&'static str; 3],
    deadline: Option<&'static str>,
    category: &'static str,
}

fn seed_jobs(now: DateTime<Utc>) -> Vec<(ResourceId, Job)> {
    let seeds = [
        JobSeed {
            id: "1",
            title: "Strategy & operations",
            salary: ("120k", "200k"),
            location: "Chennai, Tamilnadu",
            color: "#EC4899",
            description:
                "Lead strategic initiatives and optimize operations across the organization.",
            requirements: [
                "5+ years experience in strategy/operations",
                "MBA preferred",
                "Strong analytical skills",
            ],
            responsibilities: [
                "Develop and execute strategic plans",
                "Optimize operational processes",
                "Lead cross-functional teams",
            ],
            benefits: ["Health insurance", "Stock options", "Remote work"],
            deadline: Some("2026-01-31"),
            category: "Operations",
        },
        JobSeed {
            id: "2",
            title: "Full stack developer",
            salary: ("200k", "400k"),
            location: "Remote",
            color: "#3B82F6",
            description: "Build and maintain scalable web applications using modern technologies.",
            requirements: [
                "5+ years full-stack experience",
                "React/Next.js expertise",
                "Node.js/Python backend skills",
            ],
            responsibilities: [
                "Design and implement features",
                "Code reviews",
                "Mentor junior developers",
            ],
            benefits: ["Health insurance", "Stock options", "Flexible hours"],
            deadline: Some("2026-01-07"),
            category: "Engineering",
        },
        JobSeed {
            id: "3",
            title: "Senior product designer",
            salary: ("250k", "400k"),
            location: "Bangalore, Karnataka",
            color: "#F97316",
            description: "Lead product design initiatives and create exceptional user experiences.",
            requirements: [
                "7+ years UX/UI design",
                "Portfolio required",
                "Figma expertise",
            ],
            responsibilities: [
                "Lead design projects",
                "User research",
                "Design system maintenance",
            ],
            benefits: ["Health insurance", "Learning budget", "Gym membership"],
            deadline: None,
            category: "Design",
        },
        JobSeed {
            id: "4",
            title: "Customer success manager",
            salary: ("225k", "400k"),
            location: "Remote",
            color: "#F472B6",
            description:
                "Ensure customer success and drive product adoption across enterprise accounts.",
            requirements: [
                "3+ years in customer success",
                "Enterprise software experience",
                "Excellent communication",
            ],
            responsibilities: [
                "Manage customer relationships",
                "Drive product adoption",
                "Handle escalations",
            ],
            benefits: ["Health insurance", "Performance bonus", "Remote work"],
            deadline: Some("2026-01-05"),
            category: "Customer Success",
        },
    ];

    seeds
        .into_iter()
        .map(|seed| {
            let job = Job {
                title: seed.title.to_string(),
                job_type: JobType::FullTime,
                salary_min: seed.salary.0.to_string(),
                salary_max: seed.salary.1.to_string(),
                location: seed.location.to_string(),
                color: seed.color.to_string(),
                description: seed.description.to_string(),
                requirements: strings(&seed.requirements),
                responsibilities: strings(&seed.responsibilities),
                benefits: strings(&seed.benefits),
                status: JobStatus::Published,
                category: Some(seed.category.to_string()),
                application_deadline: seed.deadline.map(str::to_string),
                applications_count: 0,
                created_at: now,
                updated_at: now,
                status_changed_at: now,
            };
            (ResourceId::from(seed.id), job)
        })
        .collect()
}

struct ApplicationSeed {
    id: &'static str,
    job_id: &'static str,
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    position: &'static str,
    resume_url: Option<&'static str>,
    linked_in: Option<&'static str>,
    portfolio: Option<&'static str>,
    experience: &'static str,
    status: ApplicationStatus,
    rating: f32,
    applied_hours_ago: i64,
}

fn seed_applications(now: DateTime<Utc>) -> Vec<(ResourceId, Application)> {
    let seeds = [
        ApplicationSeed {
            id: "app-1",
            job_id: "2",
            name: "Sarah Chen",
            email: "sarah.chen@email.com",
            phone: "+1 555-0101",
            position: "Full stack developer",
            resume_url: Some("/resumes/sarah-chen.pdf"),
            linked_in: Some("linkedin.com/in/sarahchen"),
            portfolio: Some("sarahchen.dev"),
            experience: "6 years",
            status: ApplicationStatus::New,
            rating: 4.5,
            applied_hours_ago: 24,
        },
        ApplicationSeed {
            id: "app-2",
            job_id: "2",
            name: "Michael Johnson",
            email: "michael.j@email.com",
            phone: "+1 555-0102",
            position: "Full stack developer",
            resume_url: Some("/resumes/michael-j.pdf"),
            linked_in: Some("linkedin.com/in/michaelj"),
            portfolio: None,
            experience: "4 years",
            status: ApplicationStatus::Screening,
            rating: 3.8,
            applied_hours_ago: 48,
        },
        ApplicationSeed {
            id: "app-3",
            job_id: "2",
            name: "Emily Rodriguez",
            email: "emily.r@email.com",
            phone: "+1 555-0103",
            position: "Full stack developer",
            resume_url: None,
            linked_in: None,
            portfolio: None,
            experience: "8 years",
            status: ApplicationStatus::InterviewScheduled,
            rating: 4.2,
            applied_hours_ago: 72,
        },
        ApplicationSeed {
            id: "app-4",
            job_id: "3",
            name: "David Kim",
            email: "david.kim@email.com",
            phone: "+1 555-0104",
            position: "Senior product designer",
            resume_url: None,
            linked_in: None,
            portfolio: Some("davidkim.design"),
            experience: "9 years",
            status: ApplicationStatus::New,
            rating: 4.8,
            applied_hours_ago: 12,
        },
        ApplicationSeed {
            id: "app-5",
            job_id: "1",
            name: "Jessica Williams",
            email: "jessica.w@email.com",
            phone: "+1 555-0105",
            position: "Strategy & operations",
            resume_url: None,
            linked_in: None,
            portfolio: None,
            experience: "7 years",
            status: ApplicationStatus::InterviewComplete,
            rating: 4.0,
            applied_hours_ago: 120,
        },
    ];

    seeds
        .into_iter()
        .map(|seed| {
            let application = Application {
                job_id: ResourceId::from(seed.job_id),
                name: seed.name.to_string(),
                email: seed.email.to_string(),
                phone: seed.phone.to_string(),
                position: seed.position.to_string(),
                resume_url: seed.resume_url.map(str::to_string),
                linked_in: seed.linked_in.map(str::to_string),
                portfolio: seed.portfolio.map(str::to_string),
                cover_letter: None,
                experience: seed.experience.to_string(),
                status: seed.status,
                stage: seed.status,
                rating: seed.rating,
                applied_at: now - Duration::hours(seed.applied_hours_ago),
                notes: seed_notes(seed.id, now),
                ratings: seed_ratings(seed.id, now),
            };
            (ResourceId::from(seed.id), application)
        })
        .collect()
}

fn seed_notes(application_id: &str, now: DateTime<Utc>) -> Vec<CandidateNote> {
    match application_id {
        "app-2" => vec![CandidateNote {
            id: "n1".to_string(),
            application_id: ResourceId::from(application_id),
            author_id: "admin-1".to_string(),
            author_name: "Admin".to_string(),
            note_type: NoteKind::PhoneScreen,
            content: "Good communication skills, needs more backend experience".to_string(),
            is_pinned: true,
            visibility: NoteVisibility::Team,
            created_at: now,
            can_edit: true,
        }],
        _ => Vec::new(),
    }
}

fn seed_ratings(application_id: &str, now: DateTime<Utc>) -> Vec<CandidateRating> {
    let scorecard = |id: &str, category: &str, score: u8| CandidateRating {
        id: id.to_string(),
        application_id: ResourceId::from(application_id),
        category: category.to_string(),
        score,
        max_score: 10,
        reviewer_id: "admin-1".to_string(),
        reviewer_name: "Admin".to_string(),
        comment: None,
        created_at: now,
    };
    match application_id {
        "app-1" => vec![
            scorecard("r1", "Technical Skills", 9),
            scorecard("r2", "Communication", 8),
        ],
        _ => Vec::new(),
    }
}
