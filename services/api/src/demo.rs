use crate::infra::{in_memory_board, InMemoryBoard, InMemoryNotificationOutbox};
use chrono::{DateTime, Utc};
use clap::Args;
use job_board::board::applications::{ApplicationDraft, ApplicationFilter};
use job_board::board::jobs::JobStatus;
use job_board::board::{ResourceId, Vocabulary};
use job_board::config::BoardConfig;
use job_board::error::AppError;
use serde::Serialize;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Job to submit the sample application against.
    #[arg(long, default_value = "2")]
    pub(crate) job_id: String,
    /// Only list jobs in this status (draft, published, paused, closed, archived).
    #[arg(long)]
    pub(crate) status: Option<String>,
    /// Skip the application intake portion of the demo.
    #[arg(long)]
    pub(crate) skip_application: bool,
    /// Print the pipeline snapshot as JSON instead of a text report.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PipelineSnapshot {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) jobs: Vec<JobPipeline>,
    pub(crate) notices: Vec<NoticeLine>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JobPipeline {
    pub(crate) id: ResourceId,
    pub(crate) title: String,
    pub(crate) status: &'static str,
    pub(crate) location: String,
    pub(crate) applications_count: u32,
    pub(crate) applicants: Vec<ApplicantLine>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApplicantLine {
    pub(crate) id: ResourceId,
    pub(crate) name: String,
    pub(crate) status: &'static str,
    pub(crate) applied_hours_ago: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NoticeLine {
    pub(crate) template: &'static str,
    pub(crate) recipient: String,
    pub(crate) application_id: ResourceId,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        job_id,
        status,
        skip_application,
        json,
    } = args;

    let status = status
        .as_deref()
        .map(JobStatus::parse_field)
        .transpose()?;

    let (board, outbox) = in_memory_board(&BoardConfig::default());
    let counts = board.seeder.run()?;

    if !json {
        println!("Job board demo");
        println!(
            "- Seeded {} jobs and {} applications",
            counts.jobs, counts.applications
        );
    }

    if !skip_application {
        let draft = demo_application(&job_id);
        match board.applications.create(draft) {
            Ok(stored) if !json => println!(
                "- Received application {} for job {} -> status {}",
                stored.id,
                stored.body.job_id,
                stored.body.status.label()
            ),
            Ok(_) => {}
            Err(err) if !json => println!("- Submission rejected: {err}"),
            Err(err) => return Err(err.into()),
        }
    }

    let snapshot = pipeline_snapshot(&board, &outbox, status, Utc::now())?;
    if json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => println!("failed to render snapshot: {err}"),
        }
    } else {
        render_snapshot(&snapshot);
    }

    Ok(())
}

fn demo_application(job_id: &str) -> ApplicationDraft {
    ApplicationDraft {
        job_id: Some(job_id.to_string()),
        name: Some("Jordan Rivera".to_string()),
        email: Some("jordan.rivera@example.com".to_string()),
        phone: Some("+1 555-0142".to_string()),
        position: Some("Full stack developer".to_string()),
        linked_in: Some("linkedin.com/in/jordanrivera".to_string()),
        experience: Some("5 years".to_string()),
        cover_letter: Some("I have shipped and operated Next.js products at scale.".to_string()),
        ..ApplicationDraft::default()
    }
}

pub(crate) fn pipeline_snapshot(
    board: &InMemoryBoard,
    outbox: &InMemoryNotificationOutbox,
    status: Option<JobStatus>,
    now: DateTime<Utc>,
) -> Result<PipelineSnapshot, AppError> {
    let mut jobs = Vec::new();
    for job in board.jobs.list(status)? {
        let applicants = board
            .applications
            .list(&ApplicationFilter::for_job(job.id.as_str()))?
            .into_iter()
            .map(|application| ApplicantLine {
                id: application.id,
                name: application.body.name,
                status: application.body.status.label(),
                applied_hours_ago: (now - application.body.applied_at).num_hours(),
            })
            .collect();
        jobs.push(JobPipeline {
            id: job.id,
            title: job.body.title,
            status: job.body.status.label(),
            location: job.body.location,
            applications_count: job.body.applications_count,
            applicants,
        });
    }

    let notices = outbox
        .notices()
        .into_iter()
        .map(|notice| NoticeLine {
            template: notice.template.label(),
            recipient: notice.recipient,
            application_id: notice.application_id,
        })
        .collect();

    Ok(PipelineSnapshot {
        generated_at: now,
        jobs,
        notices,
    })
}

fn render_snapshot(snapshot: &PipelineSnapshot) {
    println!("\nOpen roles ({})", snapshot.jobs.len());
    for job in &snapshot.jobs {
        println!(
            "- [{}] {} | {} | {} | {} applications",
            job.id, job.title, job.location, job.status, job.applications_count
        );
        for applicant in &job.applicants {
            println!(
                "    - {} ({}) {} | applied {}h ago",
                applicant.name, applicant.id, applicant.status, applicant.applied_hours_ago
            );
        }
    }

    if snapshot.notices.is_empty() {
        return;
    }
    println!("\nQueued notifications");
    for notice in &snapshot.notices {
        println!(
            "- {} -> {} (application {})",
            notice.template, notice.recipient, notice.application_id
        );
    }
}
