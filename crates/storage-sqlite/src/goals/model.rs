//! Database models for goals.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use lumeo_core::goals::FinancialGoal;

/// Database model for goals
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::financial_goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct FinancialGoalDB {
    pub id: String,
    pub name: String,
    pub target_amount: String,
    pub current_amount: String,
    pub target_date: Option<NaiveDate>,
    pub is_completed: bool,
    pub created_at: NaiveDateTime,
}

impl From<FinancialGoalDB> for FinancialGoal {
    fn from(db: FinancialGoalDB) -> Self {
        FinancialGoal {
            id: db.id,
            name: db.name,
            target_amount: db.target_amount,
            current_amount: db.current_amount,
            target_date: db.target_date,
            is_completed: db.is_completed,
            created_at: db.created_at,
        }
    }
}

impl From<FinancialGoal> for FinancialGoalDB {
    fn from(domain: FinancialGoal) -> Self {
        FinancialGoalDB {
            id: domain.id,
            name: domain.name,
            target_amount: domain.target_amount,
            current_amount: domain.current_amount,
            target_date: domain.target_date,
            is_completed: domain.is_completed,
            created_at: domain.created_at,
        }
    }
}
