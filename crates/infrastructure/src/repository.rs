use async_trait::async_trait;
use common::EntityId;

use crate::Result;

/// Core trait for entity repositories.
///
/// A repository persists whole entities and reloads them by ID.
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait Repository<T>: Send + Sync {
    /// Inserts a new entity.
    async fn create(&self, entity: &T) -> Result<()>;

    /// Overwrites a stored entity.
    ///
    /// Fails with `NotFound` if no entity with that ID exists.
    async fn update(&self, entity: &T) -> Result<()>;

    /// Loads an entity by ID.
    ///
    /// Fails with `NotFound` if no entity with that ID exists.
    async fn find(&self, id: &EntityId) -> Result<T>;

    /// Loads every entity in insertion order.
    async fn find_all(&self) -> Result<Vec<T>>;
}
