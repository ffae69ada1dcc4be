use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use lumeo_core::store::{Entity, RepositoryTrait};
use lumeo_core::transactions::{NewTransaction, Transaction, TransactionUpdate};
use lumeo_core::Result;

use super::model::TransactionDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::transactions;

pub struct TransactionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        TransactionRepository { pool, writer }
    }
}

fn find_row(conn: &mut SqliteConnection, transaction_id: &str) -> Result<Option<TransactionDB>> {
    Ok(transactions::table
        .find(transaction_id)
        .select(TransactionDB::as_select())
        .first::<TransactionDB>(conn)
        .optional()
        .map_err(StorageError::from)?)
}

#[async_trait]
impl RepositoryTrait<Transaction> for TransactionRepository {
    /// Newest first; same-instant transactions keep insertion order.
    fn list(&self) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions::table
            .order((transactions::date.desc(), transactions::created_at.asc()))
            .select(TransactionDB::as_select())
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows
            .into_iter()
            .map(Transaction::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()?)
    }

    fn get_by_id(&self, transaction_id: &str) -> Result<Option<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        match find_row(&mut conn, transaction_id)? {
            Some(row) => Ok(Some(Transaction::try_from(row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, new: NewTransaction) -> Result<Transaction> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                let transaction =
                    Transaction::from_new(Uuid::new_v4().to_string(), Utc::now().naive_utc(), new);
                let inserted = diesel::insert_into(transactions::table)
                    .values(TransactionDB::from(transaction))
                    .returning(TransactionDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Transaction::try_from(inserted)?)
            })
            .await
    }

    async fn update(
        &self,
        transaction_id: &str,
        update: TransactionUpdate,
    ) -> Result<Option<Transaction>> {
        let transaction_id = transaction_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<Transaction>> {
                let Some(existing) = find_row(conn, &transaction_id)? else {
                    return Ok(None);
                };

                let mut transaction = Transaction::try_from(existing)?;
                transaction.merge(update);

                let updated = diesel::update(transactions::table.find(transaction_id.as_str()))
                    .set(TransactionDB::from(transaction))
                    .returning(TransactionDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Some(Transaction::try_from(updated)?))
            })
            .await
    }

    async fn delete(&self, transaction_id: &str) -> Result<bool> {
        let transaction_id = transaction_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<bool> {
                let affected = diesel::delete(transactions::table.find(transaction_id.as_str()))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(affected > 0)
            })
            .await
    }
}
