//! Savings module - savings accounts with optional targets and interest.

mod savings_model;

pub use savings_model::{
    NewSavingsAccount, SavingsAccount, SavingsAccountPayload, SavingsAccountUpdate,
};

use crate::store::EntityService;

pub type SavingsService = EntityService<SavingsAccount>;
