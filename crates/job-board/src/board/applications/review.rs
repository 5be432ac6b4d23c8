//! Reviewer notes and scorecards attached to an application.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::board::storage::ResourceId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    General,
    PhoneScreen,
    Interview,
    Reference,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteVisibility {
    Private,
    Team,
}

/// Free-text note left by a recruiter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateNote {
    pub id: String,
    pub application_id: ResourceId,
    pub author_id: String,
    pub author_name: String,
    pub note_type: NoteKind,
    pub content: String,
    pub is_pinned: bool,
    pub visibility: NoteVisibility,
    pub created_at: DateTime<Utc>,
    pub can_edit: bool,
}

/// One reviewer's score in a single category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRating {
    pub id: String,
    pub application_id: ResourceId,
    pub category: String,
    pub score: u8,
    pub max_score: u8,
    pub reviewer_id: String,
    pub reviewer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}
