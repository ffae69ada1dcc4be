use rust_decimal::Decimal;

use super::currency::{currency_or_default, is_zero_decimal};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, PERCENT_DECIMAL_PRECISION};
use crate::utils::decimal_utils::fixed_dp;

/// Fixed six-color chart palette (HSL).
pub const PALETTE: [&str; 6] = [
    "hsl(217, 91%, 60%)",
    "hsl(158, 64%, 52%)",
    "hsl(43, 96%, 56%)",
    "hsl(0, 84%, 60%)",
    "hsl(283, 67%, 68%)",
    "hsl(215, 32%, 27%)",
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Symbol followed by the amount.
///
/// Zero-decimal currencies round half toward positive infinity and group
/// thousands with `,`; every other currency prints two decimals ungrouped.
pub fn format_currency(amount: Decimal, code: &str) -> String {
    let currency = currency_or_default(code);
    let digits = if is_zero_decimal(code) {
        let rounded = (amount + Decimal::new(5, 1)).floor();
        group_thousands(&rounded.trunc().to_string())
    } else {
        fixed_dp(amount, DISPLAY_DECIMAL_PRECISION).to_string()
    };
    format!("{}{}", currency.symbol, digits)
}

/// `45.5%`
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", fixed_dp(value, PERCENT_DECIMAL_PRECISION))
}

/// `+$100.00` / `-$40.00`
pub fn format_signed_currency(amount: Decimal, is_positive: bool, code: &str) -> String {
    let sign = if is_positive { '+' } else { '-' };
    format!("{}{}", sign, format_currency(amount, code))
}

fn group_thousands(integer: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}", sign, grouped)
}
