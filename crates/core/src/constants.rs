use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for stored monetary values
pub const MONEY_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for percentages
pub const PERCENT_DECIMAL_PRECISION: u32 = 1;

/// Largest storable monetary value (`decimal(10, 2)`)
pub const MAX_MONEY_AMOUNT: Decimal = dec!(99999999.99);

/// Largest storable interest rate (`decimal(5, 2)`)
pub const MAX_INTEREST_RATE: Decimal = dec!(999.99);

/// Resource names, shared by the HTTP routes and the query cache keys
pub const SUBSCRIPTIONS_RESOURCE: &str = "subscriptions";
pub const TRANSACTIONS_RESOURCE: &str = "transactions";
pub const SAVINGS_RESOURCE: &str = "savings";
pub const GOALS_RESOURCE: &str = "goals";

/// Settings key holding the preferred display currency
pub const CURRENCY_SETTING_KEY: &str = "currency";
