//! Abstract repository trait (port) for idea storage.

use async_trait::async_trait;
use thiserror::Error;

use ideabox_types::{
    DayCount, DomainError, Idea, IdeaId, IdeaPatch, IdeaReplace, IdeaStats, NewIdea,
};

/// Errors returned by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No idea has the requested id.
    #[error("idea not found: {id}")]
    NotFound { id: IdeaId },
    /// The request cannot be applied (empty patch, blank title, ...).
    #[error("{message}")]
    Validation { message: String },
    /// A database or I/O error occurred.
    #[error("storage error: {message}")]
    Storage { message: String },
}

impl From<DomainError> for RepositoryError {
    fn from(err: DomainError) -> Self {
        Self::Validation {
            message: err.message,
        }
    }
}

/// Abstract trait for idea persistence.
///
/// Every method is a single read or write against the store. Implementations
/// live in adapter crates (e.g., `ideabox-store-sqlite`).
#[async_trait]
pub trait IdeaRepository: Send + Sync {
    /// All ideas, `date` descending by string comparison.
    async fn list(&self) -> Result<Vec<Idea>, RepositoryError>;

    /// Finds an idea by id.
    async fn find_by_id(&self, id: IdeaId) -> Result<Option<Idea>, RepositoryError>;

    /// Inserts a new idea and returns its assigned id.
    async fn insert(&self, idea: &NewIdea) -> Result<IdeaId, RepositoryError>;

    /// Overwrites title, content and category of an existing idea.
    async fn replace(&self, id: IdeaId, idea: &IdeaReplace) -> Result<(), RepositoryError>;

    /// Updates only the fields present in `patch`.
    async fn patch(&self, id: IdeaId, patch: &IdeaPatch) -> Result<(), RepositoryError>;

    /// Deletes an idea permanently.
    async fn delete(&self, id: IdeaId) -> Result<(), RepositoryError>;

    /// Aggregate counts; `today` is the `YYYY-MM-DD` prefix that counts as today.
    async fn stats(&self, today: &str) -> Result<IdeaStats, RepositoryError>;

    /// Number of ideas whose `date` starts with each given day, in input order.
    async fn daily_counts(&self, days: &[String]) -> Result<Vec<DayCount>, RepositoryError>;
}
