pub mod decimal_utils;
pub mod validation;

pub use decimal_utils::{canonical_money, parse_decimal_tolerant};
pub use validation::{FieldValidator, NumericText, Presence};
