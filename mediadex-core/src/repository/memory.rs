use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use mediadex_model::{CatalogEntity, EntityId};

use super::CatalogRepository;
use crate::error::{CatalogError, Result};

#[derive(Debug)]
struct Store<E> {
    entities: BTreeMap<EntityId, E>,
    last_id: EntityId,
}

/// Process-local repository; ids start at 1 and are never reused.
#[derive(Debug)]
pub struct InMemoryRepository<E> {
    store: RwLock<Store<E>>,
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self {
            store: RwLock::new(Store {
                entities: BTreeMap::new(),
                last_id: EntityId(0),
            }),
        }
    }
}

impl<E> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.entities.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl<E: CatalogEntity> CatalogRepository<E> for InMemoryRepository<E> {
    async fn find(&self, id: EntityId) -> Result<Option<E>> {
        Ok(self.store.read().await.entities.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<E>> {
        Ok(self.store.read().await.entities.values().cloned().collect())
    }

    async fn insert(&self, mut entity: E) -> Result<EntityId> {
        let mut store = self.store.write().await;
        let id = store.last_id.next().ok_or_else(|| {
            CatalogError::Internal(format!(
                "{} ids exhausted",
                E::KIND.label()
            ))
        })?;
        store.last_id = id;
        entity.set_id(Some(id));
        store.entities.insert(id, entity);
        Ok(id)
    }

    async fn update(&self, entity: E) -> Result<()> {
        let id = entity.id().ok_or_else(|| {
            CatalogError::Internal(format!(
                "cannot update {} without an id",
                E::KIND.label()
            ))
        })?;

        let mut store = self.store.write().await;
        match store.entities.get_mut(&id) {
            Some(stored) => {
                *stored = entity;
                Ok(())
            }
            None => Err(CatalogError::NotFound(format!(
                "{} {id}",
                E::KIND.label()
            ))),
        }
    }

    async fn remove(&self, id: EntityId) -> Result<bool> {
        Ok(self.store.write().await.entities.remove(&id).is_some())
    }
}
