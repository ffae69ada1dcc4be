//! Subscription domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_MONEY_AMOUNT, SUBSCRIPTIONS_RESOURCE};
use crate::errors::Result;
use crate::store::Entity;
use crate::utils::decimal_utils::parse_decimal_tolerant;
use crate::utils::validation::unexpected_missing;
use crate::utils::{FieldValidator, NumericText, Presence};

/// A recurring payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub name: String,
    pub cost: String,
    pub next_payment_date: NaiveDate,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl Subscription {
    pub fn cost_value(&self) -> Decimal {
        parse_decimal_tolerant(&self.cost, "subscription cost")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSubscription {
    pub name: String,
    pub cost: String,
    pub next_payment_date: NaiveDate,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriptionUpdate {
    pub name: Option<String>,
    pub cost: Option<String>,
    pub next_payment_date: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

/// Raw request body for create and update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPayload {
    pub name: Option<String>,
    pub cost: Option<NumericText>,
    pub next_payment_date: Option<String>,
    pub is_active: Option<bool>,
}

impl SubscriptionPayload {
    fn validated(self, presence: Presence) -> Result<SubscriptionUpdate> {
        let mut v = FieldValidator::new();
        let name = v.text("name", self.name, presence);
        let cost = v.money("cost", self.cost, presence, MAX_MONEY_AMOUNT);
        let next_payment_date = v.date("nextPaymentDate", self.next_payment_date, presence);
        v.finish()?;
        Ok(SubscriptionUpdate {
            name,
            cost,
            next_payment_date,
            is_active: self.is_active,
        })
    }
}

impl Entity for Subscription {
    type New = NewSubscription;
    type Update = SubscriptionUpdate;
    type Payload = SubscriptionPayload;

    const RESOURCE: &'static str = SUBSCRIPTIONS_RESOURCE;
    const LABEL: &'static str = "Subscription";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_new(id: String, created_at: NaiveDateTime, new: NewSubscription) -> Self {
        Subscription {
            id,
            name: new.name,
            cost: new.cost,
            next_payment_date: new.next_payment_date,
            is_active: new.is_active,
            created_at,
        }
    }

    fn merge(&mut self, update: SubscriptionUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(cost) = update.cost {
            self.cost = cost;
        }
        if let Some(next_payment_date) = update.next_payment_date {
            self.next_payment_date = next_payment_date;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
    }

    fn validate_new(payload: SubscriptionPayload) -> Result<NewSubscription> {
        let checked = payload.validated(Presence::Required)?;
        let (Some(name), Some(cost), Some(next_payment_date)) =
            (checked.name, checked.cost, checked.next_payment_date)
        else {
            return Err(unexpected_missing(Self::LABEL));
        };
        Ok(NewSubscription {
            name,
            cost,
            next_payment_date,
            is_active: checked.is_active.unwrap_or(true),
        })
    }

    fn validate_update(payload: SubscriptionPayload) -> Result<SubscriptionUpdate> {
        payload.validated(Presence::Optional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    fn payload(json: &str) -> SubscriptionPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn new_subscription_defaults_to_active() {
        let new = Subscription::validate_new(payload(
            r#"{"name":" Netflix ","cost":15.49,"nextPaymentDate":"2024-06-01"}"#,
        ))
        .unwrap();
        assert_eq!(new.name, "Netflix");
        assert_eq!(new.cost, "15.49");
        assert_eq!(new.next_payment_date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert!(new.is_active);
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let Err(Error::Validation(err)) = Subscription::validate_new(payload("{}")) else {
            panic!("expected validation error");
        };
        let fields: Vec<_> = err.field_errors().into_iter().map(|f| f.field).collect();
        assert_eq!(fields, vec!["name", "cost", "nextPaymentDate"]);
    }

    #[test]
    fn empty_update_changes_nothing() {
        let mut sub = Subscription::from_new(
            "s1".into(),
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            NewSubscription {
                name: "Gym".into(),
                cost: "30.00".into(),
                next_payment_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                is_active: true,
            },
        );
        let before = sub.clone();
        sub.merge(Subscription::validate_update(payload("{}")).unwrap());
        assert_eq!(sub, before);

        sub.merge(Subscription::validate_update(payload(r#"{"isActive":false}"#)).unwrap());
        assert!(!sub.is_active);
        assert_eq!(sub.cost, "30.00");
    }
}
