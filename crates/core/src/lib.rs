//! Lumeo Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the Lumeo finance tracker.
//! It is database-agnostic and defines the repository traits that are
//! implemented by the `storage-sqlite` crate.

pub mod analytics;
pub mod constants;
pub mod errors;
pub mod goals;
pub mod presentation;
pub mod savings;
pub mod settings;
pub mod store;
pub mod subscriptions;
pub mod transactions;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
