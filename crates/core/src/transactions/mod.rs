//! Transactions module - income and expense records.

mod transactions_model;

#[cfg(test)]
mod transactions_model_tests;

pub use transactions_model::{
    NewTransaction, Transaction, TransactionPayload, TransactionType, TransactionUpdate,
};

use crate::store::EntityService;

pub type TransactionService = EntityService<Transaction>;
