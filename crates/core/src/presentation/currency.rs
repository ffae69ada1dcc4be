//! Supported display currencies.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

pub const CURRENCIES: [Currency; 20] = [
    Currency { code: "USD", symbol: "$", name: "US Dollar" },
    Currency { code: "EUR", symbol: "€", name: "Euro" },
    Currency { code: "GBP", symbol: "£", name: "British Pound" },
    Currency { code: "CAD", symbol: "C$", name: "Canadian Dollar" },
    Currency { code: "JPY", symbol: "¥", name: "Japanese Yen" },
    Currency { code: "AUD", symbol: "A$", name: "Australian Dollar" },
    Currency { code: "CHF", symbol: "CHF", name: "Swiss Franc" },
    Currency { code: "CNY", symbol: "¥", name: "Chinese Yuan" },
    Currency { code: "INR", symbol: "₹", name: "Indian Rupee" },
    Currency { code: "KRW", symbol: "₩", name: "South Korean Won" },
    Currency { code: "BRL", symbol: "R$", name: "Brazilian Real" },
    Currency { code: "MXN", symbol: "MX$", name: "Mexican Peso" },
    Currency { code: "SGD", symbol: "S$", name: "Singapore Dollar" },
    Currency { code: "HKD", symbol: "HK$", name: "Hong Kong Dollar" },
    Currency { code: "NOK", symbol: "kr", name: "Norwegian Krone" },
    Currency { code: "SEK", symbol: "kr", name: "Swedish Krona" },
    Currency { code: "DKK", symbol: "kr", name: "Danish Krone" },
    Currency { code: "PLN", symbol: "zł", name: "Polish Złoty" },
    Currency { code: "CZK", symbol: "Kč", name: "Czech Koruna" },
    Currency { code: "HUF", symbol: "Ft", name: "Hungarian Forint" },
];

pub const DEFAULT_CURRENCY: Currency = CURRENCIES[0];

/// Currencies rendered without fractional digits.
pub const ZERO_DECIMAL_CURRENCIES: [&str; 3] = ["JPY", "KRW", "HUF"];

pub fn find_currency(code: &str) -> Option<&'static Currency> {
    CURRENCIES.iter().find(|currency| currency.code == code)
}

/// Falls back to the default currency for unknown codes.
pub fn currency_or_default(code: &str) -> &'static Currency {
    find_currency(code).unwrap_or(&CURRENCIES[0])
}

pub fn currency_symbol(code: &str) -> &'static str {
    currency_or_default(code).symbol
}

pub fn is_zero_decimal(code: &str) -> bool {
    ZERO_DECIMAL_CURRENCIES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_and_fallback() {
        assert_eq!(find_currency("EUR").map(|c| c.symbol), Some("€"));
        assert!(find_currency("XYZ").is_none());
        assert_eq!(currency_symbol("XYZ"), "$");
        assert_eq!(DEFAULT_CURRENCY.code, "USD");
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<_> = CURRENCIES.iter().map(|c| c.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), CURRENCIES.len());
    }
}
