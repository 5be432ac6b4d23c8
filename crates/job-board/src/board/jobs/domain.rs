use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::board::error::BoardError;
use crate::board::validation::{non_blank, RequiredFields, Vocabulary};

const DEFAULT_COLOR: &str = "#3B82F6";

/// Employment arrangement advertised on a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl Vocabulary for JobType {
    const ALL: &'static [Self] = &[
        Self::FullTime,
        Self::PartTime,
        Self::Contract,
        Self::Internship,
    ];
    const FIELD: &'static str = "type";

    fn label(self) -> &'static str {
        match self {
            Self::FullTime => "full-time",
            Self::PartTime => "part-time",
            Self::Contract => "contract",
            Self::Internship => "internship",
        }
    }
}

/// Publication lifecycle of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Draft,
    Published,
    Paused,
    Closed,
    Archived,
}

impl Vocabulary for JobStatus {
    const ALL: &'static [Self] = &[
        Self::Draft,
        Self::Published,
        Self::Paused,
        Self::Closed,
        Self::Archived,
    ];
    const FIELD: &'static str = "status";

    fn label(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Paused => "paused",
            Self::Closed => "closed",
            Self::Archived => "archived",
        }
    }
}

/// Stored body of a job posting. The public `id` lives on the storage envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub title: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub salary_min: String,
    pub salary_max: String,
    pub location: String,
    pub color: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub benefits: Vec<String>,
    pub status: JobStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<String>,
    pub applications_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status_changed_at: DateTime<Utc>,
}

/// Incoming payload for `POST /api/jobs`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    #[serde(alias = "salary_min")]
    pub salary_min: Option<String>,
    #[serde(alias = "salary_max")]
    pub salary_max: Option<String>,
    pub location: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub responsibilities: Option<Vec<String>>,
    pub benefits: Option<Vec<String>>,
    pub status: Option<String>,
    pub category: Option<String>,
    #[serde(alias = "application_deadline")]
    pub application_deadline: Option<String>,
}

impl JobDraft {
    /// Validate the payload and build the job body stamped with `now`.
    pub fn into_job(self, now: DateTime<Utc>) -> Result<Job, BoardError> {
        let mut required = RequiredFields::default();
        let title = required.take("title", self.title);
        let raw_type = required.take("type", self.job_type);
        let location = required.take("location", self.location);
        let description = required.take("description", self.description);
        let raw_status = required.take("status", self.status);
        required.finish()?;

        let job_type = JobType::parse_field(&raw_type)?;
        let status = JobStatus::parse_field(&raw_status)?;

        Ok(Job {
            title,
            job_type,
            salary_min: self.salary_min.unwrap_or_default(),
            salary_max: self.salary_max.unwrap_or_default(),
            location,
            color: self.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            description,
            requirements: self.requirements.unwrap_or_default(),
            responsibilities: self.responsibilities.unwrap_or_default(),
            benefits: self.benefits.unwrap_or_default(),
            status,
            category: self.category,
            application_deadline: self.application_deadline,
            applications_count: 0,
            created_at: now,
            updated_at: now,
            status_changed_at: now,
        })
    }
}

/// Incoming payload for `PUT /api/jobs/:id`; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPatch {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    #[serde(alias = "salary_min")]
    pub salary_min: Option<String>,
    #[serde(alias = "salary_max")]
    pub salary_max: Option<String>,
    pub location: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub responsibilities: Option<Vec<String>>,
    pub benefits: Option<Vec<String>>,
    pub status: Option<String>,
    pub category: Option<String>,
    #[serde(alias = "application_deadline")]
    pub application_deadline: Option<String>,
}

/// A patch whose values have already passed validation.
#[derive(Debug, Clone)]
pub struct JobChanges {
    title: Option<String>,
    job_type: Option<JobType>,
    salary_min: Option<String>,
    salary_max: Option<String>,
    location: Option<String>,
    color: Option<String>,
    description: Option<String>,
    requirements: Option<Vec<String>>,
    responsibilities: Option<Vec<String>>,
    benefits: Option<Vec<String>>,
    status: Option<JobStatus>,
    category: Option<String>,
    application_deadline: Option<String>,
}

impl JobPatch {
    pub fn validate(self) -> Result<JobChanges, BoardError> {
        Ok(JobChanges {
            title: non_blank("title", self.title)?,
            job_type: self
                .job_type
                .as_deref()
                .map(JobType::parse_field)
                .transpose()?,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            location: non_blank("location", self.location)?,
            color: self.color,
            description: non_blank("description", self.description)?,
            requirements: self.requirements,
            responsibilities: self.responsibilities,
            benefits: self.benefits,
            status: self
                .status
                .as_deref()
                .map(JobStatus::parse_field)
                .transpose()?,
            category: self.category,
            application_deadline: self.application_deadline,
        })
    }
}

impl JobChanges {
    pub fn apply(&self, job: &mut Job, now: DateTime<Utc>) {
        if let Some(title) = &self.title {
            job.title.clone_from(title);
        }
        if let Some(job_type) = self.job_type {
            job.job_type = job_type;
        }
        if let Some(salary_min) = &self.salary_min {
            job.salary_min.clone_from(salary_min);
        }
        if let Some(salary_max) = &self.salary_max {
            job.salary_max.clone_from(salary_max);
        }
        if let Some(location) = &self.location {
            job.location.clone_from(location);
        }
        if let Some(color) = &self.color {
            job.color.clone_from(color);
        }
        if let Some(description) = &self.description {
            job.description.clone_from(description);
        }
        if let Some(requirements) = &self.requirements {
            job.requirements.clone_from(requirements);
        }
        if let Some(responsibilities) = &self.responsibilities {
            job.responsibilities.clone_from(responsibilities);
        }
        if let Some(benefits) = &self.benefits {
            job.benefits.clone_from(benefits);
        }
        if let Some(status) = self.status {
            job.status = status;
            job.status_changed_at = now;
        }
        if let Some(category) = &self.category {
            job.category = Some(category.clone());
        }
        if let Some(deadline) = &self.application_deadline {
            job.application_deadline = Some(deadline.clone());
        }
        job.updated_at = now;
    }
}

/// Query string accepted by `GET /api/jobs`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobQuery {
    pub status: Option<String>,
}

impl JobQuery {
    /// `?status=all` is the same as no filter.
    pub fn status_filter(&self) -> Result<Option<JobStatus>, BoardError> {
        match self.status.as_deref().map(str::trim) {
            None | Some("") | Some("all") => Ok(None),
            Some(raw) => JobStatus::parse_field(raw).map(Some),
        }
    }
}
