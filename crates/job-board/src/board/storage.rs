use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

/// Public identifier exposed to API clients as `id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub String);

impl ResourceId {
    /// Fresh collision-free identifier for a newly created document.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Internal primary key assigned by the store. Never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StorageKey(u64);

static STORAGE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

impl StorageKey {
    fn next() -> Self {
        Self(STORAGE_SEQUENCE.fetch_add(1, Ordering::Relaxed))
    }
}

/// A document as held by the store: internal key, public id, and body.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument<T> {
    pub key: StorageKey,
    pub id: ResourceId,
    pub body: T,
}

/// Storage abstraction over a single resource collection.
pub trait DocumentCollection<T>: Send + Sync {
    /// Persist a new document under `id`, assigning its storage key.
    fn insert(&self, id: ResourceId, body: T) -> Result<StoredDocument<T>, RepositoryError>;
    /// Snapshot of every document in insertion order.
    fn list(&self) -> Result<Vec<StoredDocument<T>>, RepositoryError>;
    fn fetch(&self, id: &ResourceId) -> Result<Option<StoredDocument<T>>, RepositoryError>;
    /// Apply `change` to the stored body, returning the updated document.
    fn modify(
        &self,
        id: &ResourceId,
        change: &mut dyn FnMut(&mut T),
    ) -> Result<Option<StoredDocument<T>>, RepositoryError>;
    fn remove(&self, id: &ResourceId) -> Result<Option<StoredDocument<T>>, RepositoryError>;
    /// Swap the whole collection for `documents` in one write.
    fn replace_all(
        &self,
        documents: Vec<(ResourceId, T)>,
    ) -> Result<Vec<StoredDocument<T>>, RepositoryError>;
}

/// Error enumeration for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("document already exists")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-local document collection guarded by a read/write lock.
pub struct MemoryCollection<T> {
    name: &'static str,
    documents: RwLock<Vec<StoredDocument<T>>>,
}

impl<T> MemoryCollection<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            documents: RwLock::new(Vec::new()),
        }
    }

    fn poisoned(&self) -> RepositoryError {
        RepositoryError::Unavailable(format!("{} collection lock poisoned", self.name))
    }
}

impl<T> DocumentCollection<T> for MemoryCollection<T>
where
    T: Clone + Send + Sync,
{
    fn insert(&self, id: ResourceId, body: T) -> Result<StoredDocument<T>, RepositoryError> {
        let mut guard = self.documents.write().map_err(|_| self.poisoned())?;
        if guard.iter().any(|doc| doc.id == id) {
            return Err(RepositoryError::Conflict);
        }
        let document = StoredDocument {
            key: StorageKey::next(),
            id,
            body,
        };
        guard.push(document.clone());
        Ok(document)
    }

    fn list(&self) -> Result<Vec<StoredDocument<T>>, RepositoryError> {
        let guard = self.documents.read().map_err(|_| self.poisoned())?;
        Ok(guard.clone())
    }

    fn fetch(&self, id: &ResourceId) -> Result<Option<StoredDocument<T>>, RepositoryError> {
        let guard = self.documents.read().map_err(|_| self.poisoned())?;
        Ok(guard.iter().find(|doc| &doc.id == id).cloned())
    }

    fn modify(
        &self,
        id: &ResourceId,
        change: &mut dyn FnMut(&mut T),
    ) -> Result<Option<StoredDocument<T>>, RepositoryError> {
        let mut guard = self.documents.write().map_err(|_| self.poisoned())?;
        Ok(guard.iter_mut().find(|doc| &doc.id == id).map(|doc| {
            change(&mut doc.body);
            doc.clone()
        }))
    }

    fn remove(&self, id: &ResourceId) -> Result<Option<StoredDocument<T>>, RepositoryError> {
        let mut guard = self.documents.write().map_err(|_| self.poisoned())?;
        let position = guard.iter().position(|doc| &doc.id == id);
        Ok(position.map(|index| guard.remove(index)))
    }

    fn replace_all(
        &self,
        documents: Vec<(ResourceId, T)>,
    ) -> Result<Vec<StoredDocument<T>>, RepositoryError> {
        let mut replacement: Vec<StoredDocument<T>> = Vec::with_capacity(documents.len());
        for (id, body) in documents {
            if replacement.iter().any(|doc| doc.id == id) {
                return Err(RepositoryError::Conflict);
            }
            replacement.push(StoredDocument {
                key: StorageKey::next(),
                id,
                body,
            });
        }

        let mut guard = self.documents.write().map_err(|_| self.poisoned())?;
        *guard = replacement.clone();
        Ok(replacement)
    }
}
