//! Boundary transform between stored documents and what API clients see.
//!
//! The storage key never crosses this boundary: [`Exposed`] only carries the public `id`
//! and the flattened body.

use serde::Serialize;

use super::storage::{ResourceId, StoredDocument};

/// External representation of a stored document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exposed<T> {
    pub id: ResourceId,
    #[serde(flatten)]
    pub body: T,
}

pub fn expose<T>(document: StoredDocument<T>) -> Exposed<T> {
    let StoredDocument { key: _, id, body } = document;
    Exposed { id, body }
}

pub fn expose_all<T>(documents: Vec<StoredDocument<T>>) -> Vec<Exposed<T>> {
    documents.into_iter().map(expose).collect()
}
