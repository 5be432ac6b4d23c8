use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::review::{CandidateNote, CandidateRating};
use crate::board::error::BoardError;
use crate::board::storage::ResourceId;
use crate::board::validation::{non_blank, present, RequiredFields, Vocabulary};

/// Upper bound of the overall recruiter rating.
pub const MAX_RATING: f32 = 5.0;

/// Hiring pipeline position of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    New,
    Screening,
    InterviewScheduled,
    InterviewComplete,
    OfferPending,
    Hired,
    Rejected,
    OnHold,
}

impl Vocabulary for ApplicationStatus {
    const ALL: &'static [Self] = &[
        Self::New,
        Self::Screening,
        Self::InterviewScheduled,
        Self::InterviewComplete,
        Self::OfferPending,
        Self::Hired,
        Self::Rejected,
        Self::OnHold,
    ];
    const FIELD: &'static str = "status";

    fn label(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Screening => "screening",
            Self::InterviewScheduled => "interview_scheduled",
            Self::InterviewComplete => "interview_complete",
            Self::OfferPending => "offer_pending",
            Self::Hired => "hired",
            Self::Rejected => "rejected",
            Self::OnHold => "on_hold",
        }
    }
}

/// Stored body of a candidate application.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub job_id: ResourceId,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Title of the referenced job at submission time.
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    pub experience: String,
    pub status: ApplicationStatus,
    pub stage: ApplicationStatus,
    /// Overall recruiter rating, `0.0..=MAX_RATING`; zero until someone rates the candidate.
    pub rating: f32,
    pub applied_at: DateTime<Utc>,
    pub notes: Vec<CandidateNote>,
    pub ratings: Vec<CandidateRating>,
}

/// Incoming payload for `POST /api/applications`.
///
/// There is no `status` field: submissions always enter the pipeline as `new`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    #[serde(alias = "job_id")]
    pub job_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    #[serde(alias = "resume_url")]
    pub resume_url: Option<String>,
    #[serde(alias = "linkedin")]
    pub linked_in: Option<String>,
    pub portfolio: Option<String>,
    #[serde(alias = "cover_letter")]
    pub cover_letter: Option<String>,
    pub experience: Option<String>,
}

impl ApplicationDraft {
    /// Validate required fields and build the application body with a `new` status.
    pub fn into_application(self, now: DateTime<Utc>) -> Result<Application, BoardError> {
        let mut required = RequiredFields::default();
        let job_id = required.take("jobId", self.job_id);
        let name = required.take("name", self.name);
        let email = required.take("email", self.email);
        let position = required.take("position", self.position);
        required.finish()?;

        Ok(Application {
            job_id: ResourceId(job_id),
            name,
            email,
            phone: self.phone.unwrap_or_default(),
            position,
            resume_url: self.resume_url,
            linked_in: self.linked_in,
            portfolio: self.portfolio,
            cover_letter: self.cover_letter,
            experience: self.experience.unwrap_or_default(),
            status: ApplicationStatus::New,
            stage: ApplicationStatus::New,
            rating: 0.0,
            applied_at: now,
            notes: Vec::new(),
            ratings: Vec::new(),
        })
    }
}

/// Incoming payload for `PUT /api/applications/:id`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    #[serde(alias = "resume_url")]
    pub resume_url: Option<String>,
    #[serde(alias = "linkedin")]
    pub linked_in: Option<String>,
    pub portfolio: Option<String>,
    #[serde(alias = "cover_letter")]
    pub cover_letter: Option<String>,
    pub experience: Option<String>,
    pub status: Option<String>,
    pub rating: Option<f32>,
}

/// Validated application patch.
#[derive(Debug, Clone)]
pub struct ApplicationChanges {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    position: Option<String>,
    resume_url: Option<String>,
    linked_in: Option<String>,
    portfolio: Option<String>,
    cover_letter: Option<String>,
    experience: Option<String>,
    status: Option<ApplicationStatus>,
    rating: Option<f32>,
}

impl ApplicationPatch {
    pub fn validate(self) -> Result<ApplicationChanges, BoardError> {
        if let Some(rating) = self.rating {
            if !(0.0..=MAX_RATING).contains(&rating) {
                return Err(BoardError::Validation(format!(
                    "rating {rating} must be between 0 and {MAX_RATING}"
                )));
            }
        }

        Ok(ApplicationChanges {
            name: non_blank("name", self.name)?,
            email: non_blank("email", self.email)?,
            phone: self.phone,
            position: non_blank("position", self.position)?,
            resume_url: self.resume_url,
            linked_in: self.linked_in,
            portfolio: self.portfolio,
            cover_letter: self.cover_letter,
            experience: self.experience,
            status: self
                .status
                .as_deref()
                .map(ApplicationStatus::parse_field)
                .transpose()?,
            rating: self.rating,
        })
    }
}

impl ApplicationChanges {
    pub fn apply(&self, application: &mut Application) {
        if let Some(name) = &self.name {
            application.name.clone_from(name);
        }
        if let Some(email) = &self.email {
            application.email.clone_from(email);
        }
        if let Some(phone) = &self.phone {
            application.phone.clone_from(phone);
        }
        if let Some(position) = &self.position {
            application.position.clone_from(position);
        }
        if let Some(resume_url) = &self.resume_url {
            application.resume_url = Some(resume_url.clone());
        }
        if let Some(linked_in) = &self.linked_in {
            application.linked_in = Some(linked_in.clone());
        }
        if let Some(portfolio) = &self.portfolio {
            application.portfolio = Some(portfolio.clone());
        }
        if let Some(cover_letter) = &self.cover_letter {
            application.cover_letter = Some(cover_letter.clone());
        }
        if let Some(experience) = &self.experience {
            application.experience.clone_from(experience);
        }
        if let Some(status) = self.status {
            application.status = status;
            application.stage = status;
        }
        if let Some(rating) = self.rating {
            application.rating = rating;
        }
    }
}

/// Query string accepted by `GET /api/applications`. Blank values count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationQuery {
    #[serde(alias = "job_id")]
    pub job_id: Option<String>,
    pub status: Option<String>,
    pub stage: Option<String>,
}

/// Parsed list filter; every present criterion must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationFilter {
    pub job_id: Option<ResourceId>,
    pub status: Option<ApplicationStatus>,
    pub stage: Option<ApplicationStatus>,
}

impl ApplicationQuery {
    pub fn filter(self) -> Result<ApplicationFilter, BoardError> {
        Ok(ApplicationFilter {
            job_id: present(self.job_id).map(ResourceId),
            status: present(self.status)
                .map(|raw| ApplicationStatus::parse_field(&raw))
                .transpose()?,
            stage: present(self.stage)
                .map(|raw| ApplicationStatus::parse_named("stage", &raw))
                .transpose()?,
        })
    }
}

impl ApplicationFilter {
    pub fn for_job(job_id: impl Into<String>) -> Self {
        Self {
            job_id: Some(ResourceId(job_id.into())),
            ..Self::default()
        }
    }

    pub fn matches(&self, application: &Application) -> bool {
        self.job_id
            .as_ref()
            .map_or(true, |job_id| &application.job_id == job_id)
            && self
                .status
                .map_or(true, |status| application.status == status)
            && self.stage.map_or(true, |stage| application.stage == stage)
    }
}
