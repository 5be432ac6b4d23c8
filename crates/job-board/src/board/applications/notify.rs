use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::board::storage::ResourceId;

/// Outbound hook for candidate-facing and recruiter-facing notices (e-mail adapters, queues).
pub trait ApplicationNotifier: Send + Sync {
    fn publish(&self, notice: ApplicationNotice) -> Result<(), NotificationError>;
}

/// Message template selected for a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeTemplate {
    CandidateConfirmation,
    AdminNewApplication,
}

impl NoticeTemplate {
    pub fn label(self) -> &'static str {
        match self {
            Self::CandidateConfirmation => "candidate_confirmation",
            Self::AdminNewApplication => "admin_new_application",
        }
    }
}

/// Notice payload so adapters and tests can assert integration boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationNotice {
    pub template: NoticeTemplate,
    pub recipient: String,
    pub application_id: ResourceId,
    pub details: BTreeMap<String, String>,
}

/// Notice dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}
