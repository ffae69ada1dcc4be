use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use lumeo_core::goals::{FinancialGoal, FinancialGoalUpdate, NewFinancialGoal};
use lumeo_core::store::{Entity, RepositoryTrait};
use lumeo_core::Result;

use super::model::FinancialGoalDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::financial_goals;

pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GoalRepository { pool, writer }
    }
}

#[async_trait]
impl RepositoryTrait<FinancialGoal> for GoalRepository {
    fn list(&self) -> Result<Vec<FinancialGoal>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = financial_goals::table
            .order(financial_goals::created_at.asc())
            .select(FinancialGoalDB::as_select())
            .load::<FinancialGoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(FinancialGoal::from).collect())
    }

    fn get_by_id(&self, goal_id: &str) -> Result<Option<FinancialGoal>> {
        let mut conn = get_connection(&self.pool)?;
        let row = financial_goals::table
            .find(goal_id)
            .select(FinancialGoalDB::as_select())
            .first::<FinancialGoalDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(FinancialGoal::from))
    }

    async fn create(&self, new: NewFinancialGoal) -> Result<FinancialGoal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<FinancialGoal> {
                let goal = FinancialGoal::from_new(
                    Uuid::new_v4().to_string(),
                    Utc::now().naive_utc(),
                    new,
                );
                let inserted = diesel::insert_into(financial_goals::table)
                    .values(FinancialGoalDB::from(goal))
                    .returning(FinancialGoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(inserted.into())
            })
            .await
    }

    async fn update(
        &self,
        goal_id: &str,
        update: FinancialGoalUpdate,
    ) -> Result<Option<FinancialGoal>> {
        let goal_id = goal_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<FinancialGoal>> {
                let Some(existing) = financial_goals::table
                    .find(goal_id.as_str())
                    .select(FinancialGoalDB::as_select())
                    .first::<FinancialGoalDB>(conn)
                    .optional()
                    .map_err(StorageError::from)?
                else {
                    return Ok(None);
                };

                let mut goal = FinancialGoal::from(existing);
                goal.merge(update);

                let updated = diesel::update(financial_goals::table.find(goal_id.as_str()))
                    .set(FinancialGoalDB::from(goal))
                    .returning(FinancialGoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Some(updated.into()))
            })
            .await
    }

    async fn delete(&self, goal_id: &str) -> Result<bool> {
        let goal_id = goal_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<bool> {
                let affected = diesel::delete(financial_goals::table.find(goal_id.as_str()))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(affected > 0)
            })
            .await
    }
}
