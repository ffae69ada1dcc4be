use async_trait::async_trait;
use log::debug;
use std::future::Future;
use std::sync::Arc;

use super::query_cache::QueryCache;
use super::store_traits::{Entity, EntityServiceTrait, RepositoryTrait};
use crate::errors::{Error, Result};

/// Validating, cache-aware service over one entity repository.
pub struct EntityService<E: Entity> {
    repository: Arc<dyn RepositoryTrait<E>>,
    cache: Arc<QueryCache>,
}

impl<E: Entity> EntityService<E> {
    pub fn new(repository: Arc<dyn RepositoryTrait<E>>, cache: Arc<QueryCache>) -> Self {
        Self { repository, cache }
    }

    /// Runs a repository write on its own task so it completes, and the
    /// cache is invalidated, even when the caller is dropped mid-write.
    ///
    /// `write` yields whether the collection changed alongside its result.
    async fn mutate<T, F>(&self, write: F) -> Result<T>
    where
        T: Send + 'static,
        F: Future<Output = Result<(bool, T)>> + Send + 'static,
    {
        let cache = self.cache.clone();
        let task = tokio::spawn(async move {
            let (changed, value) = write.await?;
            if changed {
                cache.invalidate(E::RESOURCE);
            }
            Ok::<T, Error>(value)
        });
        task.await.map_err(|e| {
            Error::Unexpected(format!("{} write task failed: {}", E::LABEL, e))
        })?
    }
}

#[async_trait]
impl<E: Entity> EntityServiceTrait<E> for EntityService<E> {
    fn list(&self) -> Result<Arc<Vec<E>>> {
        self.cache
            .get_or_load(E::RESOURCE, || self.repository.list())
    }

    fn get(&self, id: &str) -> Result<Option<E>> {
        self.repository.get_by_id(id)
    }

    async fn create(&self, payload: E::Payload) -> Result<E> {
        let new = E::validate_new(payload)?;
        debug!("Creating {}: {:?}", E::LABEL, new);
        let repository = self.repository.clone();
        self.mutate(async move {
            let created = repository.create(new).await?;
            Ok((true, created))
        })
        .await
    }

    async fn update(&self, id: &str, payload: E::Payload) -> Result<Option<E>> {
        let update = E::validate_update(payload)?;
        debug!("Updating {} {}: {:?}", E::LABEL, id, update);
        let repository = self.repository.clone();
        let id = id.to_string();
        self.mutate(async move {
            let updated = repository.update(&id, update).await?;
            Ok((updated.is_some(), updated))
        })
        .await
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        debug!("Deleting {} {}", E::LABEL, id);
        let repository = self.repository.clone();
        let id = id.to_string();
        self.mutate(async move {
            let deleted = repository.delete(&id).await?;
            Ok((deleted, deleted))
        })
        .await
    }
}
