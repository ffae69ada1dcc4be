use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use lumeo_core::savings::{NewSavingsAccount, SavingsAccount, SavingsAccountUpdate};
use lumeo_core::store::{Entity, RepositoryTrait};
use lumeo_core::Result;

use super::model::SavingsAccountDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::savings_accounts;

pub struct SavingsAccountRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SavingsAccountRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SavingsAccountRepository { pool, writer }
    }
}

#[async_trait]
impl RepositoryTrait<SavingsAccount> for SavingsAccountRepository {
    fn list(&self) -> Result<Vec<SavingsAccount>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = savings_accounts::table
            .order(savings_accounts::created_at.asc())
            .select(SavingsAccountDB::as_select())
            .load::<SavingsAccountDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(SavingsAccount::from).collect())
    }

    fn get_by_id(&self, account_id: &str) -> Result<Option<SavingsAccount>> {
        let mut conn = get_connection(&self.pool)?;
        let row = savings_accounts::table
            .find(account_id)
            .select(SavingsAccountDB::as_select())
            .first::<SavingsAccountDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(SavingsAccount::from))
    }

    async fn create(&self, new: NewSavingsAccount) -> Result<SavingsAccount> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<SavingsAccount> {
                let account = SavingsAccount::from_new(
                    Uuid::new_v4().to_string(),
                    Utc::now().naive_utc(),
                    new,
                );
                let inserted = diesel::insert_into(savings_accounts::table)
                    .values(SavingsAccountDB::from(account))
                    .returning(SavingsAccountDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(inserted.into())
            })
            .await
    }

    async fn update(
        &self,
        account_id: &str,
        update: SavingsAccountUpdate,
    ) -> Result<Option<SavingsAccount>> {
        let account_id = account_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<SavingsAccount>> {
                let Some(existing) = savings_accounts::table
                    .find(account_id.as_str())
                    .select(SavingsAccountDB::as_select())
                    .first::<SavingsAccountDB>(conn)
                    .optional()
                    .map_err(StorageError::from)?
                else {
                    return Ok(None);
                };

                let mut account = SavingsAccount::from(existing);
                account.merge(update);

                let updated = diesel::update(savings_accounts::table.find(account_id.as_str()))
                    .set(SavingsAccountDB::from(account))
                    .returning(SavingsAccountDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Some(updated.into()))
            })
            .await
    }

    async fn delete(&self, account_id: &str) -> Result<bool> {
        let account_id = account_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<bool> {
                let affected = diesel::delete(savings_accounts::table.find(account_id.as_str()))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(affected > 0)
            })
            .await
    }
}
