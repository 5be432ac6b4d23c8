//! Candidate applications: intake against an existing job, listing, and pipeline updates.

pub mod domain;
pub mod notify;
pub mod review;
pub mod router;
pub mod service;

pub use domain::{
    Application, ApplicationChanges, ApplicationDraft, ApplicationFilter, ApplicationPatch,
    ApplicationQuery, ApplicationStatus, MAX_RATING,
};
pub use notify::{ApplicationNotice, ApplicationNotifier, NotificationError, NoticeTemplate};
pub use review::{CandidateNote, CandidateRating, NoteKind, NoteVisibility};
pub use router::applications_router;
pub use service::ApplicationService;
