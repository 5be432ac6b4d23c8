//! Job board resources: jobs, candidate applications, and the shared storage boundary.
//!
//! Every document leaves this module through [`mapper::expose`], so the internal storage
//! key never reaches a response body.

pub mod applications;
pub mod error;
pub mod health;
pub mod jobs;
pub mod mapper;
pub mod router;
pub mod seed;
pub mod storage;
mod validation;

#[cfg(test)]
mod tests;

pub use error::BoardError;
pub use health::HealthReport;
pub use mapper::{expose, expose_all, Exposed};
pub use router::{board_router, Board};
pub use seed::{SeedCounts, Seeder};
pub use storage::{
    DocumentCollection, MemoryCollection, RepositoryError, ResourceId, StorageKey,
    StoredDocument,
};
pub use validation::Vocabulary;
