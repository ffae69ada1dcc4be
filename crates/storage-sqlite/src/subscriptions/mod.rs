//! SQLite storage implementation for subscriptions.

mod model;
mod repository;

pub use model::SubscriptionDB;
pub use repository::SubscriptionRepository;
