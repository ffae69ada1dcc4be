//! SQLite storage implementation for Lumeo.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `lumeo-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for every entity collection and the settings store
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! `core` is database-agnostic and works with traits; the server picks either
//! these repositories or the in-memory ones at startup.
//!
//! ```text
//!          core (domain)
//!                │
//!                ▼
//!     storage-sqlite (this crate)
//!                │
//!                ▼
//!            SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod goals;
pub mod savings;
pub mod settings;
pub mod subscriptions;
pub mod transactions;

#[cfg(test)]
mod test_support;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export repositories
pub use goals::GoalRepository;
pub use savings::SavingsAccountRepository;
pub use settings::SettingsRepository;
pub use subscriptions::SubscriptionRepository;
pub use transactions::TransactionRepository;

// Re-export from lumeo-core for convenience
pub use lumeo_core::errors::{DatabaseError, Error, Result};
