//! Field-by-field payload validation.
//!
//! Payloads arrive with every field optional. A `FieldValidator` walks them,
//! normalizes what it can (trimmed text, canonical decimal strings, parsed
//! dates) and collects every rejection so the caller gets the full list in
//! one response.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::decimal_utils::{canonical_money, parse_decimal_input};
use crate::errors::{Error, FieldError, Result, ValidationError};

/// A numeric payload value, accepted both as `"12.50"` and `12.5`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericText {
    Text(String),
    Number(serde_json::Number),
}

impl NumericText {
    pub fn as_text(&self) -> String {
        match self {
            NumericText::Text(text) => text.clone(),
            NumericText::Number(number) => number.to_string(),
        }
    }
}

impl From<&str> for NumericText {
    fn from(value: &str) -> Self {
        NumericText::Text(value.to_string())
    }
}

/// Whether a field must be present (create) or may be omitted (update).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

#[derive(Debug, Default)]
pub struct FieldValidator {
    errors: Vec<FieldError>,
}

impl FieldValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    fn present<T>(&mut self, field: &str, value: Option<T>, presence: Presence) -> Option<T> {
        if value.is_none() && presence == Presence::Required {
            self.reject(field, "Required");
        }
        value
    }

    /// Non-blank text, trimmed.
    pub fn text(
        &mut self,
        field: &str,
        value: Option<String>,
        presence: Presence,
    ) -> Option<String> {
        let value = self.present(field, value, presence)?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.reject(field, "Must not be empty");
            return None;
        }
        Some(trimmed.to_string())
    }

    /// Non-negative decimal no larger than `max`, returned in canonical form.
    pub fn money(
        &mut self,
        field: &str,
        value: Option<NumericText>,
        presence: Presence,
        max: Decimal,
    ) -> Option<String> {
        let raw = self.present(field, value, presence)?.as_text();
        let Some(parsed) = parse_decimal_input(&raw) else {
            self.reject(field, format!("'{}' is not a valid number", raw));
            return None;
        };
        if parsed.is_sign_negative() && !parsed.is_zero() {
            self.reject(field, "Must not be negative");
            return None;
        }
        if parsed > max {
            self.reject(field, format!("Must not exceed {}", max));
            return None;
        }
        Some(canonical_money(parsed))
    }

    /// Nullable money field. The outer `None` means "omitted", `Some(None)`
    /// means an explicit `null`.
    pub fn nullable_money(
        &mut self,
        field: &str,
        value: Option<Option<NumericText>>,
        max: Decimal,
    ) -> Option<Option<String>> {
        match value {
            None => None,
            Some(None) => Some(None),
            Some(inner) => self
                .money(field, inner, Presence::Required, max)
                .map(Some),
        }
    }

    pub fn date(
        &mut self,
        field: &str,
        value: Option<String>,
        presence: Presence,
    ) -> Option<NaiveDate> {
        let raw = self.present(field, value, presence)?;
        let parsed = parse_date_input(&raw);
        if parsed.is_none() {
            self.reject(field, format!("'{}' is not a valid date", raw));
        }
        parsed
    }

    pub fn nullable_date(
        &mut self,
        field: &str,
        value: Option<Option<String>>,
    ) -> Option<Option<NaiveDate>> {
        match value {
            None => None,
            Some(None) => Some(None),
            Some(inner) => self.date(field, inner, Presence::Required).map(Some),
        }
    }

    pub fn datetime(
        &mut self,
        field: &str,
        value: Option<String>,
        presence: Presence,
    ) -> Option<NaiveDateTime> {
        let raw = self.present(field, value, presence)?;
        let parsed = parse_datetime_input(&raw);
        if parsed.is_none() {
            self.reject(field, format!("'{}' is not a valid date", raw));
        }
        parsed
    }

    /// Parses a keyword field through `FromStr`.
    pub fn keyword<T: FromStr>(
        &mut self,
        field: &str,
        value: Option<String>,
        presence: Presence,
        expected: &str,
    ) -> Option<T> {
        let raw = self.present(field, value, presence)?;
        match raw.trim().parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                self.reject(field, format!("Expected {}", expected));
                None
            }
        }
    }

    pub fn finish(self) -> Result<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(ValidationError::Fields(self.errors)))
        }
    }
}

/// Error for a field that passed validation but was not carried through.
pub(crate) fn unexpected_missing(entity: &str) -> Error {
    Error::Unexpected(format!("validated {} payload lost a required field", entity))
}

/// Accepts `YYYY-MM-DD`, naive date-times, and RFC 3339 instants (normalized
/// to UTC).
pub fn parse_datetime_input(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.naive_utc());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

/// Date-only input keeps the calendar date as written, including for
/// RFC 3339 instants carrying an offset.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.date())
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_MONEY_AMOUNT;

    #[test]
    fn money_accepts_strings_and_numbers() {
        let mut v = FieldValidator::new();
        assert_eq!(
            v.money("cost", Some("9.9".into()), Presence::Required, MAX_MONEY_AMOUNT),
            Some("9.90".to_string())
        );
        let number: NumericText = serde_json::from_str("12.5").unwrap();
        assert_eq!(
            v.money("cost", Some(number), Presence::Required, MAX_MONEY_AMOUNT),
            Some("12.50".to_string())
        );
        assert!(v.finish().is_ok());
    }

    #[test]
    fn collects_every_rejection() {
        let mut v = FieldValidator::new();
        v.text("name", None, Presence::Required);
        v.text("description", Some("   ".into()), Presence::Required);
        v.money("amount", Some("-1".into()), Presence::Required, MAX_MONEY_AMOUNT);
        v.money("balance", Some("abc".into()), Presence::Optional, MAX_MONEY_AMOUNT);
        v.money("cost", Some("100000000".into()), Presence::Required, MAX_MONEY_AMOUNT);
        v.date("targetDate", Some("tomorrow".into()), Presence::Optional);

        let Err(Error::Validation(err)) = v.finish() else {
            panic!("expected validation failure");
        };
        let fields: Vec<String> = err.field_errors().into_iter().map(|f| f.field).collect();
        assert_eq!(
            fields,
            vec!["name", "description", "amount", "balance", "cost", "targetDate"]
        );
    }

    #[test]
    fn money_limit_is_inclusive_and_named_in_the_message() {
        let mut v = FieldValidator::new();
        assert_eq!(
            v.money("cost", Some("99999999.99".into()), Presence::Required, MAX_MONEY_AMOUNT),
            Some("99999999.99".to_string())
        );
        assert!(v.finish().is_ok());

        let mut v = FieldValidator::new();
        v.money("cost", Some("100000000".into()), Presence::Required, MAX_MONEY_AMOUNT);
        let Err(Error::Validation(err)) = v.finish() else {
            panic!("expected validation failure");
        };
        assert_eq!(err.field_errors()[0].message, "Must not exceed 99999999.99");
    }

    #[test]
    fn optional_fields_may_be_omitted() {
        let mut v = FieldValidator::new();
        assert_eq!(v.text("name", None, Presence::Optional), None);
        assert_eq!(
            v.money("cost", None, Presence::Optional, MAX_MONEY_AMOUNT),
            None
        );
        assert!(v.finish().is_ok());
    }

    #[test]
    fn nullable_distinguishes_null_from_omitted() {
        let mut v = FieldValidator::new();
        assert_eq!(v.nullable_money("targetAmount", None, MAX_MONEY_AMOUNT), None);
        assert_eq!(
            v.nullable_money("targetAmount", Some(None), MAX_MONEY_AMOUNT),
            Some(None)
        );
        assert_eq!(
            v.nullable_money("targetAmount", Some(Some("5".into())), MAX_MONEY_AMOUNT),
            Some(Some("5.00".to_string()))
        );
    }

    #[test]
    fn parses_accepted_date_formats() {
        let midnight = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(parse_datetime_input("2024-05-01"), Some(midnight));
        assert_eq!(parse_datetime_input("2024-05-01T00:00:00.000Z"), Some(midnight));
        assert_eq!(parse_datetime_input("2024-05-01T00:00:00"), Some(midnight));
        assert_eq!(parse_datetime_input("May 1st"), None);

        assert_eq!(
            parse_date_input("2024-05-01T00:30:00+02:00"),
            NaiveDate::from_ymd_opt(2024, 5, 1)
        );
    }
}
