//! Goals domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{GOALS_RESOURCE, MAX_MONEY_AMOUNT};
use crate::errors::Result;
use crate::store::Entity;
use crate::utils::decimal_utils::parse_decimal_tolerant;
use crate::utils::validation::unexpected_missing;
use crate::utils::{FieldValidator, NumericText, Presence};

const DEFAULT_CURRENT_AMOUNT: &str = "0.00";

/// Domain model representing a savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialGoal {
    pub id: String,
    pub name: String,
    pub target_amount: String,
    pub current_amount: String,
    pub target_date: Option<NaiveDate>,
    pub is_completed: bool,
    pub created_at: NaiveDateTime,
}

impl FinancialGoal {
    pub fn target_value(&self) -> Decimal {
        parse_decimal_tolerant(&self.target_amount, "goal target")
    }

    pub fn current_value(&self) -> Decimal {
        parse_decimal_tolerant(&self.current_amount, "goal current amount")
    }
}

/// Input model for creating a new goal
#[derive(Debug, Clone, PartialEq)]
pub struct NewFinancialGoal {
    pub name: String,
    pub target_amount: String,
    pub current_amount: String,
    pub target_date: Option<NaiveDate>,
    pub is_completed: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinancialGoalUpdate {
    pub name: Option<String>,
    pub target_amount: Option<String>,
    pub current_amount: Option<String>,
    pub target_date: Option<Option<NaiveDate>>,
    pub is_completed: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialGoalPayload {
    pub name: Option<String>,
    pub target_amount: Option<NumericText>,
    pub current_amount: Option<NumericText>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub target_date: Option<Option<String>>,
    pub is_completed: Option<bool>,
}

impl FinancialGoalPayload {
    fn validated(self, presence: Presence) -> Result<FinancialGoalUpdate> {
        let mut v = FieldValidator::new();
        let name = v.text("name", self.name, presence);
        let target_amount = v.money("targetAmount", self.target_amount, presence, MAX_MONEY_AMOUNT);
        let current_amount = v.money(
            "currentAmount",
            self.current_amount,
            Presence::Optional,
            MAX_MONEY_AMOUNT,
        );
        let target_date = v.nullable_date("targetDate", self.target_date);
        v.finish()?;
        Ok(FinancialGoalUpdate {
            name,
            target_amount,
            current_amount,
            target_date,
            is_completed: self.is_completed,
        })
    }
}

impl Entity for FinancialGoal {
    type New = NewFinancialGoal;
    type Update = FinancialGoalUpdate;
    type Payload = FinancialGoalPayload;

    const RESOURCE: &'static str = GOALS_RESOURCE;
    const LABEL: &'static str = "Financial goal";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_new(id: String, created_at: NaiveDateTime, new: NewFinancialGoal) -> Self {
        FinancialGoal {
            id,
            name: new.name,
            target_amount: new.target_amount,
            current_amount: new.current_amount,
            target_date: new.target_date,
            is_completed: new.is_completed,
            created_at,
        }
    }

    fn merge(&mut self, update: FinancialGoalUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(target_amount) = update.target_amount {
            self.target_amount = target_amount;
        }
        if let Some(current_amount) = update.current_amount {
            self.current_amount = current_amount;
        }
        if let Some(target_date) = update.target_date {
            self.target_date = target_date;
        }
        if let Some(is_completed) = update.is_completed {
            self.is_completed = is_completed;
        }
    }

    fn validate_new(payload: FinancialGoalPayload) -> Result<NewFinancialGoal> {
        let checked = payload.validated(Presence::Required)?;
        let (Some(name), Some(target_amount)) = (checked.name, checked.target_amount) else {
            return Err(unexpected_missing(Self::LABEL));
        };
        Ok(NewFinancialGoal {
            name,
            target_amount,
            current_amount: checked
                .current_amount
                .unwrap_or_else(|| DEFAULT_CURRENT_AMOUNT.to_string()),
            target_date: checked.target_date.flatten(),
            is_completed: checked.is_completed.unwrap_or(false),
        })
    }

    fn validate_update(payload: FinancialGoalPayload) -> Result<FinancialGoalUpdate> {
        payload.validated(Presence::Optional)
    }
}
