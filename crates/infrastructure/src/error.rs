use common::EntityId;
use domain::DomainError;
use thiserror::Error;

/// Errors that can occur when interacting with a repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No row exists for the requested ID.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: EntityId },

    /// A stored row no longer satisfies the entity's invariants.
    #[error("Invalid {entity} row {id}: {source}")]
    InvalidRow {
        entity: &'static str,
        id: EntityId,
        source: DomainError,
    },

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl RepositoryError {
    pub(crate) fn invalid_row(
        entity: &'static str,
        id: &EntityId,
        source: impl Into<DomainError>,
    ) -> Self {
        RepositoryError::InvalidRow {
            entity,
            id: id.clone(),
            source: source.into(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
