//! Database models for transactions.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use lumeo_core::transactions::{Transaction, TransactionType};

use crate::errors::StorageError;

/// Database model for transactions
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransactionDB {
    pub id: String,
    pub description: String,
    pub amount: String,
    pub transaction_type: String,
    pub category: String,
    pub date: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

impl TryFrom<TransactionDB> for Transaction {
    type Error = StorageError;

    fn try_from(db: TransactionDB) -> Result<Self, Self::Error> {
        let transaction_type = db.transaction_type.parse::<TransactionType>().map_err(|_| {
            StorageError::CorruptRow(format!(
                "transaction {} has unknown type '{}'",
                db.id, db.transaction_type
            ))
        })?;

        Ok(Transaction {
            id: db.id,
            description: db.description,
            amount: db.amount,
            transaction_type,
            category: db.category,
            date: db.date,
            created_at: db.created_at,
        })
    }
}

impl From<Transaction> for TransactionDB {
    fn from(domain: Transaction) -> Self {
        TransactionDB {
            id: domain.id,
            description: domain.description,
            amount: domain.amount,
            transaction_type: domain.transaction_type.as_str().to_string(),
            category: domain.category,
            date: domain.date,
            created_at: domain.created_at,
        }
    }
}
