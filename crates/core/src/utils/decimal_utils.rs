use std::str::FromStr;

use log::warn;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::MONEY_DECIMAL_PRECISION;

/// Parses a stored decimal string, falling back to zero.
///
/// Values reaching this function were validated on the way in; a parse
/// failure means the store was edited out-of-band, so it is logged and the
/// value contributes nothing to aggregates.
pub fn parse_decimal_tolerant(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str.trim()) {
        Ok(value) => value,
        Err(e) => match Decimal::from_scientific(value_str.trim()) {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    "Failed to parse {} '{}' as Decimal ({}). Falling back to ZERO.",
                    field_name, value_str, e
                );
                Decimal::ZERO
            }
        },
    }
}

/// Parses user input strictly, accepting plain and scientific notation.
pub fn parse_decimal_input(value_str: &str) -> Option<Decimal> {
    let trimmed = value_str.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Rounds half away from zero, the way `Number.prototype.toFixed` reads.
pub fn round_half_away(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds and pads to exactly `dp` fractional digits.
pub fn fixed_dp(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = round_half_away(value, dp);
    rounded.rescale(dp);
    rounded
}

/// Canonical stored form of a monetary value: two fractional digits.
pub fn canonical_money(value: Decimal) -> String {
    fixed_dp(value, MONEY_DECIMAL_PRECISION).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn tolerant_parse_handles_garbage() {
        assert_eq!(parse_decimal_tolerant("12.50", "amount"), dec!(12.50));
        assert_eq!(parse_decimal_tolerant(" 7 ", "amount"), dec!(7));
        assert_eq!(parse_decimal_tolerant("1e3", "amount"), dec!(1000));
        assert_eq!(parse_decimal_tolerant("abc", "amount"), Decimal::ZERO);
    }

    #[test]
    fn input_parse_rejects_blank() {
        assert_eq!(parse_decimal_input(""), None);
        assert_eq!(parse_decimal_input("  "), None);
        assert_eq!(parse_decimal_input("ten"), None);
        assert_eq!(parse_decimal_input("10.5"), Some(dec!(10.5)));
    }

    #[test]
    fn canonical_money_pads_and_rounds() {
        assert_eq!(canonical_money(dec!(100)), "100.00");
        assert_eq!(canonical_money(dec!(12.5)), "12.50");
        assert_eq!(canonical_money(dec!(12.345)), "12.35");
        assert_eq!(canonical_money(dec!(0.004)), "0.00");
    }

    #[test]
    fn half_away_from_zero() {
        assert_eq!(round_half_away(dec!(2.25), 1), dec!(2.3));
        assert_eq!(round_half_away(dec!(-2.25), 1), dec!(-2.3));
        assert_eq!(fixed_dp(dec!(3), 1).to_string(), "3.0");
    }
}
