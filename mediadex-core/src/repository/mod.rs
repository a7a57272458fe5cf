//! Persistence port for catalog entities.

pub mod memory;

pub use memory::InMemoryRepository;

use async_trait::async_trait;
use mediadex_model::{CatalogEntity, EntityId};

use crate::error::Result;

/// Repository port for one entity type.
///
/// Implementations assign ids on insert; callers never pick them.
#[async_trait]
pub trait CatalogRepository<E: CatalogEntity>: Send + Sync {
    async fn find(&self, id: EntityId) -> Result<Option<E>>;

    async fn find_all(&self) -> Result<Vec<E>>;

    /// Stores `entity` under a fresh id and returns it.
    async fn insert(&self, entity: E) -> Result<EntityId>;

    /// Replaces the stored entity with the same id.
    async fn update(&self, entity: E) -> Result<()>;

    /// Returns whether something was removed.
    async fn remove(&self, id: EntityId) -> Result<bool>;
}
