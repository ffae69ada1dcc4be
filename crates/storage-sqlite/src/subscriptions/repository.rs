use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use lumeo_core::store::{Entity, RepositoryTrait};
use lumeo_core::subscriptions::{NewSubscription, Subscription, SubscriptionUpdate};
use lumeo_core::Result;

use super::model::SubscriptionDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::subscriptions;

pub struct SubscriptionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SubscriptionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SubscriptionRepository { pool, writer }
    }
}

#[async_trait]
impl RepositoryTrait<Subscription> for SubscriptionRepository {
    fn list(&self) -> Result<Vec<Subscription>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = subscriptions::table
            .order(subscriptions::created_at.asc())
            .select(SubscriptionDB::as_select())
            .load::<SubscriptionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Subscription::from).collect())
    }

    fn get_by_id(&self, subscription_id: &str) -> Result<Option<Subscription>> {
        let mut conn = get_connection(&self.pool)?;
        let row = subscriptions::table
            .find(subscription_id)
            .select(SubscriptionDB::as_select())
            .first::<SubscriptionDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Subscription::from))
    }

    async fn create(&self, new: NewSubscription) -> Result<Subscription> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Subscription> {
                let subscription =
                    Subscription::from_new(Uuid::new_v4().to_string(), Utc::now().naive_utc(), new);
                let inserted = diesel::insert_into(subscriptions::table)
                    .values(SubscriptionDB::from(subscription))
                    .returning(SubscriptionDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(inserted.into())
            })
            .await
    }

    async fn update(
        &self,
        subscription_id: &str,
        update: SubscriptionUpdate,
    ) -> Result<Option<Subscription>> {
        let subscription_id = subscription_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<Subscription>> {
                let Some(existing) = subscriptions::table
                    .find(subscription_id.as_str())
                    .select(SubscriptionDB::as_select())
                    .first::<SubscriptionDB>(conn)
                    .optional()
                    .map_err(StorageError::from)?
                else {
                    return Ok(None);
                };

                let mut subscription = Subscription::from(existing);
                subscription.merge(update);

                let updated = diesel::update(subscriptions::table.find(subscription_id.as_str()))
                    .set(SubscriptionDB::from(subscription))
                    .returning(SubscriptionDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Some(updated.into()))
            })
            .await
    }

    async fn delete(&self, subscription_id: &str) -> Result<bool> {
        let subscription_id = subscription_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<bool> {
                let affected = diesel::delete(subscriptions::table.find(subscription_id.as_str()))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(affected > 0)
            })
            .await
    }
}
