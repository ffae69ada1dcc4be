//! Pure aggregation over collection snapshots.
//!
//! Every function recomputes from the full slice it is given. Stored amounts
//! that fail to parse count as zero (see `parse_decimal_tolerant`).

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::{BTreeMap, HashMap};

use super::analytics_model::{
    CategoryGroup, CategoryShare, GoalTotals, Insights, MonthlyBucket, MonthlyTotals,
    SavingsTotals, SubscriptionTotals,
};
use crate::constants::PERCENT_DECIMAL_PRECISION;
use crate::goals::FinancialGoal;
use crate::savings::SavingsAccount;
use crate::subscriptions::Subscription;
use crate::transactions::{Transaction, TransactionType};
use crate::utils::decimal_utils::round_half_away;

const HUNDRED: Decimal = dec!(100);
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Totals for transactions dated in the calendar month of `today`.
pub fn monthly_totals(transactions: &[Transaction], today: NaiveDate) -> MonthlyTotals {
    let mut totals = MonthlyTotals::default();
    for transaction in transactions
        .iter()
        .filter(|t| t.date.year() == today.year() && t.date.month() == today.month())
    {
        match transaction.transaction_type {
            TransactionType::Income => totals.income += transaction.amount_value(),
            TransactionType::Expense => totals.expenses += transaction.amount_value(),
        }
    }
    totals.net = totals.income - totals.expenses;
    totals
}

/// Expense totals per category, largest first.
///
/// Categories are compared case-sensitively. Equal sums keep the order in
/// which the categories were first seen.
pub fn expense_breakdown(transactions: &[Transaction]) -> Vec<CategoryShare> {
    let mut sums: Vec<(String, Decimal)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        let amount = transaction.amount_value();
        match positions.get(transaction.category.as_str()) {
            Some(&idx) => sums[idx].1 += amount,
            None => {
                positions.insert(transaction.category.as_str(), sums.len());
                sums.push((transaction.category.clone(), amount));
            }
        }
    }

    sums.sort_by(|a, b| b.1.cmp(&a.1));
    let total: Decimal = sums.iter().map(|(_, amount)| *amount).sum();

    sums.into_iter()
        .map(|(category, amount)| CategoryShare {
            percentage: percent_of(amount, total),
            category,
            amount,
        })
        .collect()
}

/// Per-month income, expenses and net in ascending calendar order. Months
/// without transactions are absent.
pub fn monthly_series(transactions: &[Transaction]) -> Vec<MonthlyBucket> {
    let mut buckets: BTreeMap<(i32, u32), MonthlyBucket> = BTreeMap::new();

    for transaction in transactions {
        let key = (transaction.date.year(), transaction.date.month());
        let bucket = buckets.entry(key).or_insert_with(|| MonthlyBucket {
            year: key.0,
            month: key.1,
            label: transaction.date.format("%b %Y").to_string(),
            income: Decimal::ZERO,
            expenses: Decimal::ZERO,
            net: Decimal::ZERO,
        });
        match transaction.transaction_type {
            TransactionType::Income => bucket.income += transaction.amount_value(),
            TransactionType::Expense => bucket.expenses += transaction.amount_value(),
        }
    }

    buckets
        .into_values()
        .map(|mut bucket| {
            bucket.net = bucket.income - bucket.expenses;
            bucket
        })
        .collect()
}

/// `current / target * 100`, capped at 100. A missing or non-positive
/// target yields 0.
pub fn progress_ratio(current: Decimal, target: Option<Decimal>) -> Decimal {
    match target {
        Some(target) if target > Decimal::ZERO => (current / target * HUNDRED).min(HUNDRED),
        _ => Decimal::ZERO,
    }
}

/// Projected interest for one month across all accounts.
pub fn monthly_interest(accounts: &[SavingsAccount]) -> Decimal {
    accounts
        .iter()
        .map(|account| {
            account.balance_value() * account.interest_rate_value() / HUNDRED / MONTHS_PER_YEAR
        })
        .sum()
}

/// Transaction count and total per `(category, type)`, in the order the
/// groups were first seen.
pub fn category_groups(transactions: &[Transaction]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    let mut positions: HashMap<(&str, TransactionType), usize> = HashMap::new();

    for transaction in transactions {
        let key = (transaction.category.as_str(), transaction.transaction_type);
        match positions.get(&key) {
            Some(&idx) => {
                groups[idx].count += 1;
                groups[idx].total += transaction.amount_value();
            }
            None => {
                positions.insert(key, groups.len());
                groups.push(CategoryGroup {
                    category: transaction.category.clone(),
                    transaction_type: transaction.transaction_type,
                    count: 1,
                    total: transaction.amount_value(),
                });
            }
        }
    }
    groups
}

/// Expense category with the most transactions. Ties go to the category
/// seen first.
pub fn top_expense_category(transactions: &[Transaction]) -> Option<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        let category = transaction.category.as_str();
        match positions.get(category) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(category, counts.len());
                counts.push((category, 1));
            }
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (category, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((category, count));
        }
    }
    best.map(|(category, _)| category.to_string())
}

pub fn savings_totals(accounts: &[SavingsAccount]) -> SavingsTotals {
    SavingsTotals {
        total_balance: accounts.iter().map(SavingsAccount::balance_value).sum(),
        account_count: accounts.len(),
        monthly_interest: monthly_interest(accounts),
    }
}

pub fn goal_totals(goals: &[FinancialGoal]) -> GoalTotals {
    let completed_count = goals.iter().filter(|g| g.is_completed).count();
    let average_progress = if goals.is_empty() {
        Decimal::ZERO
    } else {
        let progress_sum: Decimal = goals
            .iter()
            .map(|g| progress_ratio(g.current_value(), Some(g.target_value())))
            .sum();
        progress_sum / Decimal::from(goals.len())
    };

    GoalTotals {
        goal_count: goals.len(),
        active_count: goals.len() - completed_count,
        completed_count,
        total_target: goals.iter().map(FinancialGoal::target_value).sum(),
        total_current: goals.iter().map(FinancialGoal::current_value).sum(),
        average_progress,
    }
}

/// The monthly total and next payment date cover every subscription; only
/// the service count is limited to active ones.
pub fn subscription_totals(subscriptions: &[Subscription]) -> SubscriptionTotals {
    SubscriptionTotals {
        monthly_total: subscriptions.iter().map(Subscription::cost_value).sum(),
        active_count: subscriptions.iter().filter(|s| s.is_active).count(),
        next_payment_date: subscriptions.iter().map(|s| s.next_payment_date).min(),
    }
}

pub fn insights(transactions: &[Transaction], goals: &[FinancialGoal]) -> Insights {
    Insights {
        expense_count: transactions.iter().filter(|t| t.is_expense()).count(),
        top_category: top_expense_category(transactions),
        goal_count: goals.len(),
        completed_goal_count: goals.iter().filter(|g| g.is_completed).count(),
    }
}

fn percent_of(part: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    round_half_away(part / total * HUNDRED, PERCENT_DECIMAL_PRECISION)
}
