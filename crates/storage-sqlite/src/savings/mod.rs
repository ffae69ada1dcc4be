//! SQLite storage implementation for savings accounts.

mod model;
mod repository;

pub use model::SavingsAccountDB;
pub use repository::SavingsAccountRepository;
