//! Aggregation results.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::transactions::TransactionType;

/// Income and expense totals for one calendar month.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotals {
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
}

/// One expense category's share of total spending.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub category: String,
    pub amount: Decimal,
    /// Percent of total expenses, one decimal place.
    pub percentage: Decimal,
}

/// Transactions of one `(year, month)` bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBucket {
    pub year: i32,
    pub month: u32,
    /// `Jan 2024`
    pub label: String,
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroup {
    pub category: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub count: usize,
    pub total: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsTotals {
    pub total_balance: Decimal,
    pub account_count: usize,
    pub monthly_interest: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTotals {
    pub goal_count: usize,
    pub active_count: usize,
    pub completed_count: usize,
    pub total_target: Decimal,
    pub total_current: Decimal,
    pub average_progress: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionTotals {
    /// Sum of active subscription costs.
    pub monthly_total: Decimal,
    pub active_count: usize,
    pub next_payment_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub expense_count: usize,
    pub top_category: Option<String>,
    pub goal_count: usize,
    pub completed_goal_count: usize,
}
