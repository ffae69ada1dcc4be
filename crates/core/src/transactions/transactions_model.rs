//! Transaction domain models.

use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{MAX_MONEY_AMOUNT, TRANSACTIONS_RESOURCE};
use crate::errors::{Error, Result, ValidationError};
use crate::store::Entity;
use crate::utils::decimal_utils::parse_decimal_tolerant;
use crate::utils::validation::unexpected_missing;
use crate::utils::{FieldValidator, NumericText, Presence};

/// Direction of a transaction. Amounts are always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown transaction type '{}'",
                other
            )))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: String,
    pub date: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

impl Transaction {
    pub fn amount_value(&self) -> Decimal {
        parse_decimal_tolerant(&self.amount, "transaction amount")
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub description: String,
    pub amount: String,
    pub transaction_type: TransactionType,
    pub category: String,
    pub date: NaiveDateTime,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionUpdate {
    pub description: Option<String>,
    pub amount: Option<String>,
    pub transaction_type: Option<TransactionType>,
    pub category: Option<String>,
    pub date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPayload {
    pub description: Option<String>,
    pub amount: Option<NumericText>,
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}

impl TransactionPayload {
    fn validated(self, presence: Presence) -> Result<TransactionUpdate> {
        let mut v = FieldValidator::new();
        let description = v.text("description", self.description, presence);
        let amount = v.money("amount", self.amount, presence, MAX_MONEY_AMOUNT);
        let transaction_type = v.keyword::<TransactionType>(
            "type",
            self.transaction_type,
            presence,
            "'income' or 'expense'",
        );
        let category = v.text("category", self.category, presence);
        let date = v.datetime("date", self.date, Presence::Optional);
        v.finish()?;
        Ok(TransactionUpdate {
            description,
            amount,
            transaction_type,
            category,
            date,
        })
    }
}

impl Entity for Transaction {
    type New = NewTransaction;
    type Update = TransactionUpdate;
    type Payload = TransactionPayload;

    const RESOURCE: &'static str = TRANSACTIONS_RESOURCE;
    const LABEL: &'static str = "Transaction";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_new(id: String, created_at: NaiveDateTime, new: NewTransaction) -> Self {
        Transaction {
            id,
            description: new.description,
            amount: new.amount,
            transaction_type: new.transaction_type,
            category: new.category,
            date: new.date,
            created_at,
        }
    }

    fn merge(&mut self, update: TransactionUpdate) {
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        if let Some(transaction_type) = update.transaction_type {
            self.transaction_type = transaction_type;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
    }

    /// Newest first; equal dates keep insertion order.
    fn order_listing(items: &mut [Self]) {
        items.sort_by(|a, b| b.date.cmp(&a.date));
    }

    fn validate_new(payload: TransactionPayload) -> Result<NewTransaction> {
        let checked = payload.validated(Presence::Required)?;
        let (Some(description), Some(amount), Some(transaction_type), Some(category)) = (
            checked.description,
            checked.amount,
            checked.transaction_type,
            checked.category,
        ) else {
            return Err(unexpected_missing(Self::LABEL));
        };
        Ok(NewTransaction {
            description,
            amount,
            transaction_type,
            category,
            date: checked.date.unwrap_or_else(|| Utc::now().naive_utc()),
        })
    }

    fn validate_update(payload: TransactionPayload) -> Result<TransactionUpdate> {
        payload.validated(Presence::Optional)
    }
}
