//! SQLite storage implementation for financial goals.

mod model;
mod repository;

pub use model::FinancialGoalDB;
pub use repository::GoalRepository;
