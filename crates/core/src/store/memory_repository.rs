use async_trait::async_trait;
use chrono::Utc;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use super::store_traits::{Entity, RepositoryTrait};
use crate::errors::{Error, Result};

/// Volatile repository backed by a vector in insertion order.
pub struct MemoryRepository<E: Entity> {
    items: RwLock<Vec<E>>,
}

impl<E: Entity> MemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<E>>> {
        self.items
            .read()
            .map_err(|_| Error::Repository(format!("{} store lock poisoned", E::RESOURCE)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<E>>> {
        self.items
            .write()
            .map_err(|_| Error::Repository(format!("{} store lock poisoned", E::RESOURCE)))
    }
}

impl<E: Entity> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> RepositoryTrait<E> for MemoryRepository<E> {
    fn list(&self) -> Result<Vec<E>> {
        let mut items = self.read()?.clone();
        E::order_listing(&mut items);
        Ok(items)
    }

    fn get_by_id(&self, id: &str) -> Result<Option<E>> {
        Ok(self.read()?.iter().find(|item| item.id() == id).cloned())
    }

    async fn create(&self, new: E::New) -> Result<E> {
        let entity = E::from_new(Uuid::new_v4().to_string(), Utc::now().naive_utc(), new);
        self.write()?.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, id: &str, update: E::Update) -> Result<Option<E>> {
        let mut items = self.write()?;
        Ok(items.iter_mut().find(|item| item.id() == id).map(|item| {
            item.merge(update);
            item.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut items = self.write()?;
        let before = items.len();
        items.retain(|item| item.id() != id);
        Ok(items.len() != before)
    }
}
