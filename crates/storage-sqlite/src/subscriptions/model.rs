//! Database models for subscriptions.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use lumeo_core::subscriptions::Subscription;

/// Database model for subscriptions
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::subscriptions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SubscriptionDB {
    pub id: String,
    pub name: String,
    pub cost: String,
    pub next_payment_date: NaiveDate,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl From<SubscriptionDB> for Subscription {
    fn from(db: SubscriptionDB) -> Self {
        Subscription {
            id: db.id,
            name: db.name,
            cost: db.cost,
            next_payment_date: db.next_payment_date,
            is_active: db.is_active,
            created_at: db.created_at,
        }
    }
}

impl From<Subscription> for SubscriptionDB {
    fn from(domain: Subscription) -> Self {
        SubscriptionDB {
            id: domain.id,
            name: domain.name,
            cost: domain.cost,
            next_payment_date: domain.next_payment_date,
            is_active: domain.is_active,
            created_at: domain.created_at,
        }
    }
}
