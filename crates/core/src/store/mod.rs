//! Generic entity store: the repository contract, the volatile
//! implementation, the query cache and the entity service.

mod entity_service;
mod memory_repository;
mod query_cache;
mod store_traits;

#[cfg(test)]
mod entity_service_tests;

pub use entity_service::EntityService;
pub use memory_repository::MemoryRepository;
pub use query_cache::QueryCache;
pub use store_traits::{Entity, EntityServiceTrait, RepositoryTrait};
