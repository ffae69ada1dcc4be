//! Savings account domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_INTEREST_RATE, MAX_MONEY_AMOUNT, SAVINGS_RESOURCE};
use crate::errors::Result;
use crate::store::Entity;
use crate::utils::decimal_utils::parse_decimal_tolerant;
use crate::utils::validation::unexpected_missing;
use crate::utils::{FieldValidator, NumericText, Presence};

const DEFAULT_BALANCE: &str = "0.00";
const DEFAULT_INTEREST_RATE: &str = "0.00";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsAccount {
    pub id: String,
    pub name: String,
    pub balance: String,
    pub target_amount: Option<String>,
    /// Annual rate in percent.
    pub interest_rate: Option<String>,
    pub created_at: NaiveDateTime,
}

impl SavingsAccount {
    pub fn balance_value(&self) -> Decimal {
        parse_decimal_tolerant(&self.balance, "savings balance")
    }

    pub fn target_value(&self) -> Option<Decimal> {
        self.target_amount
            .as_deref()
            .map(|target| parse_decimal_tolerant(target, "savings target"))
    }

    pub fn interest_rate_value(&self) -> Decimal {
        self.interest_rate
            .as_deref()
            .map(|rate| parse_decimal_tolerant(rate, "interest rate"))
            .unwrap_or(Decimal::ZERO)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSavingsAccount {
    pub name: String,
    pub balance: String,
    pub target_amount: Option<String>,
    pub interest_rate: Option<String>,
}

/// Nullable fields use `Some(None)` to clear the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavingsAccountUpdate {
    pub name: Option<String>,
    pub balance: Option<String>,
    pub target_amount: Option<Option<String>>,
    pub interest_rate: Option<Option<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsAccountPayload {
    pub name: Option<String>,
    pub balance: Option<NumericText>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub target_amount: Option<Option<NumericText>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub interest_rate: Option<Option<NumericText>>,
}

impl SavingsAccountPayload {
    fn validated(self, presence: Presence) -> Result<SavingsAccountUpdate> {
        let mut v = FieldValidator::new();
        let name = v.text("name", self.name, presence);
        let balance = v.money("balance", self.balance, Presence::Optional, MAX_MONEY_AMOUNT);
        let target_amount = v.nullable_money("targetAmount", self.target_amount, MAX_MONEY_AMOUNT);
        let interest_rate =
            v.nullable_money("interestRate", self.interest_rate, MAX_INTEREST_RATE);
        v.finish()?;
        Ok(SavingsAccountUpdate {
            name,
            balance,
            target_amount,
            interest_rate,
        })
    }
}

impl Entity for SavingsAccount {
    type New = NewSavingsAccount;
    type Update = SavingsAccountUpdate;
    type Payload = SavingsAccountPayload;

    const RESOURCE: &'static str = SAVINGS_RESOURCE;
    const LABEL: &'static str = "Savings account";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_new(id: String, created_at: NaiveDateTime, new: NewSavingsAccount) -> Self {
        SavingsAccount {
            id,
            name: new.name,
            balance: new.balance,
            target_amount: new.target_amount,
            interest_rate: new.interest_rate,
            created_at,
        }
    }

    fn merge(&mut self, update: SavingsAccountUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(balance) = update.balance {
            self.balance = balance;
        }
        if let Some(target_amount) = update.target_amount {
            self.target_amount = target_amount;
        }
        if let Some(interest_rate) = update.interest_rate {
            self.interest_rate = interest_rate;
        }
    }

    fn validate_new(payload: SavingsAccountPayload) -> Result<NewSavingsAccount> {
        let checked = payload.validated(Presence::Required)?;
        let Some(name) = checked.name else {
            return Err(unexpected_missing(Self::LABEL));
        };
        Ok(NewSavingsAccount {
            name,
            balance: checked
                .balance
                .unwrap_or_else(|| DEFAULT_BALANCE.to_string()),
            target_amount: checked.target_amount.flatten(),
            interest_rate: checked
                .interest_rate
                .unwrap_or_else(|| Some(DEFAULT_INTEREST_RATE.to_string())),
        })
    }

    fn validate_update(payload: SavingsAccountPayload) -> Result<SavingsAccountUpdate> {
        payload.validated(Presence::Optional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn payload(json: &str) -> SavingsAccountPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn defaults_on_create() {
        let new = SavingsAccount::validate_new(payload(r#"{"name":"Emergency"}"#)).unwrap();
        assert_eq!(new.balance, "0.00");
        assert_eq!(new.target_amount, None);
        assert_eq!(new.interest_rate.as_deref(), Some("0.00"));

        let explicit_null =
            SavingsAccount::validate_new(payload(r#"{"name":"Cash","interestRate":null}"#))
                .unwrap();
        assert_eq!(explicit_null.interest_rate, None);
    }

    #[test]
    fn interest_rate_is_bounded() {
        assert!(SavingsAccount::validate_new(payload(
            r#"{"name":"HYSA","interestRate":"1000"}"#
        ))
        .is_err());
        let ok = SavingsAccount::validate_new(payload(r#"{"name":"HYSA","interestRate":4.5}"#))
            .unwrap();
        assert_eq!(ok.interest_rate.as_deref(), Some("4.50"));
    }

    #[test]
    fn update_distinguishes_null_from_omitted() {
        let mut account = SavingsAccount::from_new(
            "a1".into(),
            chrono::Utc::now().naive_utc(),
            NewSavingsAccount {
                name: "Trip".into(),
                balance: "100.00".into(),
                target_amount: Some("500.00".into()),
                interest_rate: Some("2.00".into()),
            },
        );

        account.merge(SavingsAccount::validate_update(payload(r#"{"balance":"150"}"#)).unwrap());
        assert_eq!(account.balance, "150.00");
        assert_eq!(account.target_amount.as_deref(), Some("500.00"));

        account.merge(
            SavingsAccount::validate_update(payload(r#"{"targetAmount":null}"#)).unwrap(),
        );
        assert_eq!(account.target_amount, None);
        assert_eq!(account.interest_rate_value(), dec!(2));
    }
}
