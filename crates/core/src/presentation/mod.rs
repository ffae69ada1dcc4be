//! Presentation adapter: currency formatting, palette assignment and page
//! views.

pub mod currency;
pub mod formatting;
pub mod views;


pub use currency::{Currency, CURRENCIES, DEFAULT_CURRENCY};
pub use formatting::{format_currency, format_percent, palette_color, PALETTE};
