use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::sync::Arc;

use crate::errors::Result;

/// A record type owned by one CRUD collection.
///
/// `New` is a validated insert, `Update` a validated partial update where
/// every `None` means "keep the stored value". `Payload` is the raw,
/// unvalidated request body both are built from.
pub trait Entity: Clone + Debug + Serialize + Send + Sync + 'static {
    type New: Clone + Debug + Send + Sync + 'static;
    type Update: Clone + Debug + Default + Send + Sync + 'static;
    type Payload: DeserializeOwned + Default + Send + 'static;

    /// Collection name used in routes and as the query cache key.
    const RESOURCE: &'static str;
    /// Human-readable singular name used in API messages.
    const LABEL: &'static str;

    fn id(&self) -> &str;

    fn from_new(id: String, created_at: NaiveDateTime, new: Self::New) -> Self;

    /// Shallow merge; fields absent from `update` are preserved.
    fn merge(&mut self, update: Self::Update);

    /// Puts a collection snapshot into listing order. Items arrive in
    /// insertion order.
    fn order_listing(_items: &mut [Self]) {}

    fn validate_new(payload: Self::Payload) -> Result<Self::New>;

    fn validate_update(payload: Self::Payload) -> Result<Self::Update>;
}

/// Storage contract for one entity collection.
///
/// A missing record is `None` / `false`, never an error.
#[async_trait]
pub trait RepositoryTrait<E: Entity>: Send + Sync {
    fn list(&self) -> Result<Vec<E>>;
    fn get_by_id(&self, id: &str) -> Result<Option<E>>;
    async fn create(&self, new: E::New) -> Result<E>;
    async fn update(&self, id: &str, update: E::Update) -> Result<Option<E>>;
    async fn delete(&self, id: &str) -> Result<bool>;
}

/// Service facade used by the API: validation, cached listing and
/// invalidation on mutation.
#[async_trait]
pub trait EntityServiceTrait<E: Entity>: Send + Sync {
    fn list(&self) -> Result<Arc<Vec<E>>>;
    fn get(&self, id: &str) -> Result<Option<E>>;
    async fn create(&self, payload: E::Payload) -> Result<E>;
    async fn update(&self, id: &str, payload: E::Payload) -> Result<Option<E>>;
    async fn delete(&self, id: &str) -> Result<bool>;
}
