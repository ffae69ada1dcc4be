//! Database models for savings accounts.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use lumeo_core::savings::SavingsAccount;

/// Database model for savings accounts.
///
/// Updates write every column so a cleared target or rate is stored as NULL.
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::savings_accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct SavingsAccountDB {
    pub id: String,
    pub name: String,
    pub balance: String,
    pub target_amount: Option<String>,
    pub interest_rate: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<SavingsAccountDB> for SavingsAccount {
    fn from(db: SavingsAccountDB) -> Self {
        SavingsAccount {
            id: db.id,
            name: db.name,
            balance: db.balance,
            target_amount: db.target_amount,
            interest_rate: db.interest_rate,
            created_at: db.created_at,
        }
    }
}

impl From<SavingsAccount> for SavingsAccountDB {
    fn from(domain: SavingsAccount) -> Self {
        SavingsAccountDB {
            id: domain.id,
            name: domain.name,
            balance: domain.balance,
            target_amount: domain.target_amount,
            interest_rate: domain.interest_rate,
            created_at: domain.created_at,
        }
    }
}
