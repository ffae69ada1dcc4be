use super::aggregation::*;
use crate::goals::{FinancialGoal, NewFinancialGoal};
use crate::savings::{NewSavingsAccount, SavingsAccount};
use crate::store::Entity;
use crate::subscriptions::{NewSubscription, Subscription};
use crate::transactions::{NewTransaction, Transaction, TransactionType};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    day(y, m, d).and_hms_opt(12, 0, 0).unwrap()
}

fn tx(kind: TransactionType, amount: &str, category: &str, date: NaiveDateTime) -> Transaction {
    Transaction::from_new(
        uuid::Uuid::new_v4().to_string(),
        date,
        NewTransaction {
            description: category.to_string(),
            amount: amount.to_string(),
            transaction_type: kind,
            category: category.to_string(),
            date,
        },
    )
}

fn expense(amount: &str, category: &str) -> Transaction {
    tx(TransactionType::Expense, amount, category, at(2024, 5, 10))
}

fn account(balance: &str, rate: Option<&str>) -> SavingsAccount {
    SavingsAccount::from_new(
        "acc".to_string(),
        at(2024, 1, 1),
        NewSavingsAccount {
            name: "Account".to_string(),
            balance: balance.to_string(),
            target_amount: None,
            interest_rate: rate.map(str::to_string),
        },
    )
}

fn goal(current: &str, target: &str, completed: bool) -> FinancialGoal {
    FinancialGoal::from_new(
        "goal".to_string(),
        at(2024, 1, 1),
        NewFinancialGoal {
            name: "Goal".to_string(),
            target_amount: target.to_string(),
            current_amount: current.to_string(),
            target_date: None,
            is_completed: completed,
        },
    )
}

fn subscription(cost: &str, next: NaiveDate, active: bool) -> Subscription {
    Subscription::from_new(
        "sub".to_string(),
        at(2024, 1, 1),
        NewSubscription {
            name: "Service".to_string(),
            cost: cost.to_string(),
            next_payment_date: next,
            is_active: active,
        },
    )
}

#[test]
fn test_monthly_totals_only_count_current_month() {
    let today = day(2024, 5, 20);
    let transactions = vec![
        tx(TransactionType::Income, "100", "Salary", at(2024, 5, 1)),
        tx(TransactionType::Expense, "40", "Food & Dining", at(2024, 5, 3)),
        tx(TransactionType::Expense, "999", "Travel", at(2024, 4, 30)),
        tx(TransactionType::Income, "50", "Salary", at(2023, 5, 15)),
    ];

    let totals = monthly_totals(&transactions, today);
    assert_eq!(totals.income, dec!(100));
    assert_eq!(totals.expenses, dec!(40));
    assert_eq!(totals.net, dec!(60));
}

#[test]
fn test_monthly_totals_empty() {
    let totals = monthly_totals(&[], day(2024, 5, 20));
    assert_eq!(totals.net, Decimal::ZERO);
}

#[test]
fn test_breakdown_sorts_and_rounds() {
    let transactions = vec![
        expense("10", "Food & Dining"),
        expense("30", "Shopping"),
        tx(TransactionType::Income, "500", "Salary", at(2024, 5, 1)),
        expense("20", "Food & Dining"),
        expense("40", "Travel"),
    ];

    let breakdown = expense_breakdown(&transactions);
    let names: Vec<_> = breakdown.iter().map(|s| s.category.as_str()).collect();
    assert_eq!(names, vec!["Travel", "Food & Dining", "Shopping"]);
    assert_eq!(breakdown[0].amount, dec!(40));
    assert_eq!(breakdown[0].percentage, dec!(40.0));
    assert_eq!(breakdown[1].percentage, dec!(30.0));
}

#[test]
fn test_breakdown_ties_keep_first_seen_order() {
    let transactions = vec![
        expense("10", "b"),
        expense("10", "a"),
        expense("10", "c"),
    ];
    let breakdown = expense_breakdown(&transactions);
    let names: Vec<_> = breakdown.iter().map(|s| s.category.as_str()).collect();
    assert_eq!(names, vec!["b", "a", "c"]);
    assert_eq!(breakdown[0].percentage, dec!(33.3));
}

#[test]
fn test_breakdown_is_case_sensitive() {
    let transactions = vec![expense("10", "food"), expense("10", "Food")];
    assert_eq!(expense_breakdown(&transactions).len(), 2);
}

#[test]
fn test_breakdown_percent_rounds_half_away_from_zero() {
    // 1/16 = 6.25%, 15/16 = 93.75%
    let transactions = vec![expense("15", "big"), expense("1", "small")];
    let breakdown = expense_breakdown(&transactions);
    assert_eq!(breakdown[1].percentage, dec!(6.3));
    assert_eq!(breakdown[0].percentage, dec!(93.8));
}

#[test]
fn test_breakdown_empty_and_zero_total() {
    let income_only = vec![tx(TransactionType::Income, "5", "Salary", at(2024, 5, 1))];
    assert!(expense_breakdown(&income_only).is_empty());

    let zeros = vec![expense("0", "a"), expense("0", "b")];
    let breakdown = expense_breakdown(&zeros);
    assert_eq!(breakdown.len(), 2);
    assert!(breakdown.iter().all(|s| s.percentage.is_zero()));
}

#[test]
fn test_monthly_series_ascending_without_gaps() {
    let transactions = vec![
        tx(TransactionType::Expense, "20", "Food", at(2024, 3, 5)),
        tx(TransactionType::Income, "100", "Salary", at(2024, 1, 31)),
        tx(TransactionType::Income, "50", "Salary", at(2024, 3, 1)),
        tx(TransactionType::Expense, "5", "Food", at(2023, 12, 24)),
    ];

    let series = monthly_series(&transactions);
    let labels: Vec<_> = series.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["Dec 2023", "Jan 2024", "Mar 2024"]);
    assert_eq!(series[2].income, dec!(50));
    assert_eq!(series[2].expenses, dec!(20));
    assert_eq!(series[2].net, dec!(30));
    assert_eq!(series[0].net, dec!(-5));
}

#[test]
fn test_progress_ratio_clamps_and_guards() {
    assert_eq!(progress_ratio(dec!(150), Some(dec!(100))), dec!(100));
    assert_eq!(progress_ratio(dec!(25), Some(dec!(100))), dec!(25));
    assert_eq!(progress_ratio(dec!(25), Some(Decimal::ZERO)), Decimal::ZERO);
    assert_eq!(progress_ratio(dec!(25), None), Decimal::ZERO);
}

#[test]
fn test_monthly_interest() {
    let accounts = vec![
        account("1200", Some("6")),
        account("5000", None),
        account("300", Some("0")),
    ];
    assert_eq!(monthly_interest(&accounts), dec!(6));
    assert_eq!(monthly_interest(&[]), Decimal::ZERO);
}

#[test]
fn test_category_groups_split_by_type() {
    let transactions = vec![
        tx(TransactionType::Expense, "10", "Other", at(2024, 5, 1)),
        tx(TransactionType::Income, "7", "Other", at(2024, 5, 2)),
        tx(TransactionType::Expense, "5", "Other", at(2024, 5, 3)),
        tx(TransactionType::Expense, "3", "Food", at(2024, 5, 4)),
    ];

    let groups = category_groups(&transactions);
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].category, "Other");
    assert_eq!(groups[0].transaction_type, TransactionType::Expense);
    assert_eq!(groups[0].count, 2);
    assert_eq!(groups[0].total, dec!(15));
    assert_eq!(groups[1].transaction_type, TransactionType::Income);
    assert_eq!(groups[2].category, "Food");
}

#[test]
fn test_top_category_by_count_with_tie_break() {
    let transactions = vec![
        expense("500", "Travel"),
        expense("1", "Food"),
        expense("1", "Food"),
        expense("2", "Shopping"),
        expense("2", "Shopping"),
    ];
    assert_eq!(top_expense_category(&transactions).as_deref(), Some("Food"));

    let income_only = vec![tx(TransactionType::Income, "5", "Salary", at(2024, 5, 1))];
    assert_eq!(top_expense_category(&income_only), None);
}

#[test]
fn test_goal_totals() {
    let goals = vec![
        goal("150", "100", true),
        goal("25", "100", false),
        goal("10", "0", false),
    ];
    let totals = goal_totals(&goals);
    assert_eq!(totals.goal_count, 3);
    assert_eq!(totals.active_count, 2);
    assert_eq!(totals.completed_count, 1);
    assert_eq!(totals.total_target, dec!(200));
    assert_eq!(totals.total_current, dec!(185));
    assert_eq!(totals.average_progress.round_dp(4), dec!(41.6667));

    assert_eq!(goal_totals(&[]).average_progress, Decimal::ZERO);
}

#[test]
fn test_subscription_totals_count_only_active_services() {
    let subscriptions = vec![
        subscription("9.99", day(2024, 6, 10), true),
        subscription("100", day(2024, 6, 1), false),
        subscription("15.01", day(2024, 6, 5), true),
    ];
    let totals = subscription_totals(&subscriptions);
    assert_eq!(totals.monthly_total, dec!(125.00));
    assert_eq!(totals.active_count, 2);
    assert_eq!(totals.next_payment_date, Some(day(2024, 6, 1)));

    assert_eq!(subscription_totals(&[]).next_payment_date, None);
}

#[test]
fn test_savings_totals() {
    let totals = savings_totals(&[account("1200", Some("6")), account("300.50", None)]);
    assert_eq!(totals.total_balance, dec!(1500.50));
    assert_eq!(totals.account_count, 2);
    assert_eq!(totals.monthly_interest, dec!(6));
}

#[test]
fn test_insights_counts() {
    let transactions = vec![expense("1", "Food"), expense("2", "Food")];
    let goals = vec![goal("1", "2", true), goal("1", "2", false)];
    let insights = insights(&transactions, &goals);
    assert_eq!(insights.expense_count, 2);
    assert_eq!(insights.top_category.as_deref(), Some("Food"));
    assert_eq!(insights.goal_count, 2);
    assert_eq!(insights.completed_goal_count, 1);
}

#[test]
fn test_unparseable_amount_counts_as_zero() {
    let transactions = vec![expense("oops", "Food"), expense("4", "Food")];
    let breakdown = expense_breakdown(&transactions);
    assert_eq!(breakdown[0].amount, dec!(4));
}
