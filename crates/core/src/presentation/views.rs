//! Page views: aggregation results rendered for one display currency.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;

use super::formatting::{format_currency, format_percent, format_signed_currency, palette_color};
use crate::analytics::aggregation;
use crate::analytics::{CategoryShare, MonthlyBucket};
use crate::goals::FinancialGoal;
use crate::savings::SavingsAccount;
use crate::subscriptions::Subscription;
use crate::transactions::{Transaction, TransactionType};
use crate::utils::decimal_utils::fixed_dp;

const DASHBOARD_RECENT_TRANSACTIONS: usize = 5;
const MONEY_MANAGER_TRANSACTIONS: usize = 10;
const OVERVIEW_GOALS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MetricCard {
    fn new(title: &str, value: String, description: Option<String>) -> Self {
        Self {
            title: title.to_string(),
            value,
            description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
    pub name: String,
    pub value: Decimal,
    pub percentage: Decimal,
    /// `Food & Dining: 40.0%`
    pub label: String,
    pub formatted_value: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRow {
    pub id: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub date: NaiveDateTime,
    /// `+$100.00` / `-$40.00`
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRow {
    pub name: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub count: usize,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsAccountRow {
    pub id: String,
    pub name: String,
    pub balance: String,
    /// `4.50% APY` or `No interest`
    pub interest: String,
    pub target: Option<String>,
    /// Bar fill, capped at 100.
    pub progress: Option<Decimal>,
    /// `45.5% complete`, uncapped.
    pub progress_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRow {
    pub id: String,
    pub name: String,
    pub current: String,
    pub target: String,
    pub progress: Decimal,
    pub progress_label: String,
    pub target_date: Option<NaiveDate>,
    pub is_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRow {
    pub id: String,
    pub name: String,
    /// `$9.99/month`
    pub cost: String,
    pub next_payment_date: NaiveDate,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightCard {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub currency: String,
    pub has_data: bool,
    pub metrics: Vec<MetricCard>,
    pub income_expense: Vec<TrendPoint>,
    pub expense_categories: Vec<PieSlice>,
    pub recent_transactions: Vec<TransactionRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsOverviewView {
    pub currency: String,
    pub has_data: bool,
    pub monthly_trend: Vec<TrendPoint>,
    pub spending_by_category: Vec<PieSlice>,
    pub goal_progress: Vec<GoalRow>,
    pub insights: Vec<InsightCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyManagerView {
    pub currency: String,
    pub has_data: bool,
    pub metrics: Vec<MetricCard>,
    pub categories: Vec<CategoryRow>,
    pub transactions: Vec<TransactionRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsView {
    pub currency: String,
    pub has_data: bool,
    pub metrics: Vec<MetricCard>,
    pub accounts: Vec<SavingsAccountRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalsView {
    pub currency: String,
    pub has_data: bool,
    pub metrics: Vec<MetricCard>,
    pub goals: Vec<GoalRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionsView {
    pub currency: String,
    pub has_data: bool,
    pub metrics: Vec<MetricCard>,
    pub subscriptions: Vec<SubscriptionRow>,
}

pub fn dashboard_view(
    transactions: &[Transaction],
    accounts: &[SavingsAccount],
    today: NaiveDate,
    currency: &str,
) -> DashboardView {
    let totals = aggregation::monthly_totals(transactions, today);
    let savings = aggregation::savings_totals(accounts);

    let metrics = vec![
        MetricCard::new(
            "Total Balance",
            format_currency(totals.net, currency),
            pick(transactions.is_empty(), "No transactions yet", "Current month"),
        ),
        MetricCard::new(
            "Monthly Income",
            format_currency(totals.income, currency),
            pick(totals.income > Decimal::ZERO, "This month", "Add your first income"),
        ),
        MetricCard::new(
            "Monthly Expenses",
            format_currency(totals.expenses, currency),
            pick(totals.expenses > Decimal::ZERO, "This month", "Track your spending"),
        ),
        MetricCard::new(
            "Total Savings",
            format_currency(savings.total_balance, currency),
            Some(if accounts.is_empty() {
                "Start saving today".to_string()
            } else {
                format!("{} accounts", accounts.len())
            }),
        ),
    ];

    DashboardView {
        currency: currency.to_string(),
        has_data: !transactions.is_empty() || !accounts.is_empty(),
        metrics,
        income_expense: trend_points(&aggregation::monthly_series(transactions)),
        expense_categories: pie_slices(&aggregation::expense_breakdown(transactions), currency),
        recent_transactions: transactions
            .iter()
            .take(DASHBOARD_RECENT_TRANSACTIONS)
            .map(|t| transaction_row(t, currency))
            .collect(),
    }
}

pub fn overview_view(
    transactions: &[Transaction],
    goals: &[FinancialGoal],
    currency: &str,
) -> AnalyticsOverviewView {
    let insights = aggregation::insights(transactions, goals);
    let mut cards = Vec::new();

    if !transactions.is_empty() {
        cards.push(InsightCard {
            title: "Spending Pattern Analysis".to_string(),
            text: format!(
                "You have {} expense transactions recorded. Your most frequent expense category is {}.",
                insights.expense_count,
                insights.top_category.as_deref().unwrap_or("None")
            ),
        });
    }
    if !goals.is_empty() {
        let mut text = format!(
            "You have {} financial goal{} set up. ",
            insights.goal_count,
            plural(insights.goal_count)
        );
        if insights.completed_goal_count > 0 {
            text.push_str(&format!(
                "{} goal{} completed. ",
                insights.completed_goal_count,
                plural(insights.completed_goal_count)
            ));
        }
        text.push_str("Keep up the great work!");
        cards.push(InsightCard {
            title: "Goals Progress Report".to_string(),
            text,
        });
    }

    AnalyticsOverviewView {
        currency: currency.to_string(),
        has_data: !transactions.is_empty() || !goals.is_empty(),
        monthly_trend: trend_points(&aggregation::monthly_series(transactions)),
        spending_by_category: pie_slices(&aggregation::expense_breakdown(transactions), currency),
        goal_progress: goals
            .iter()
            .take(OVERVIEW_GOALS)
            .map(|g| goal_row(g, currency))
            .collect(),
        insights: cards,
    }
}

pub fn money_manager_view(
    transactions: &[Transaction],
    today: NaiveDate,
    currency: &str,
) -> MoneyManagerView {
    let totals = aggregation::monthly_totals(transactions, today);
    let this_month = || Some("This month".to_string());

    MoneyManagerView {
        currency: currency.to_string(),
        has_data: !transactions.is_empty(),
        metrics: vec![
            MetricCard::new("Total Income", format_currency(totals.income, currency), this_month()),
            MetricCard::new("Total Expenses", format_currency(totals.expenses, currency), this_month()),
            MetricCard::new("Net Balance", format_currency(totals.net, currency), this_month()),
        ],
        categories: aggregation::category_groups(transactions)
            .into_iter()
            .map(|group| CategoryRow {
                total: format_currency(group.total, currency),
                name: group.category,
                transaction_type: group.transaction_type,
                count: group.count,
            })
            .collect(),
        transactions: transactions
            .iter()
            .take(MONEY_MANAGER_TRANSACTIONS)
            .map(|t| transaction_row(t, currency))
            .collect(),
    }
}

pub fn savings_view(accounts: &[SavingsAccount], currency: &str) -> SavingsView {
    let totals = aggregation::savings_totals(accounts);

    SavingsView {
        currency: currency.to_string(),
        has_data: !accounts.is_empty(),
        metrics: vec![
            MetricCard::new("Total Saved", format_currency(totals.total_balance, currency), None),
            MetricCard::new("Active Accounts", totals.account_count.to_string(), None),
            // No transfer history is tracked per account.
            MetricCard::new("Monthly Savings", format_currency(Decimal::ZERO, currency), None),
            MetricCard::new(
                "Interest Earned",
                format_currency(totals.monthly_interest, currency),
                Some("This month".to_string()),
            ),
        ],
        accounts: accounts.iter().map(|a| savings_row(a, currency)).collect(),
    }
}

pub fn goals_view(goals: &[FinancialGoal], currency: &str) -> GoalsView {
    let totals = aggregation::goal_totals(goals);

    GoalsView {
        currency: currency.to_string(),
        has_data: !goals.is_empty(),
        metrics: vec![
            MetricCard::new("Active Goals", totals.active_count.to_string(), None),
            MetricCard::new("Total Target", format_currency(totals.total_target, currency), None),
            MetricCard::new("Saved So Far", format_currency(totals.total_current, currency), None),
            MetricCard::new("Average Progress", format_percent(totals.average_progress), None),
        ],
        goals: goals.iter().map(|g| goal_row(g, currency)).collect(),
    }
}

pub fn subscriptions_view(subscriptions: &[Subscription], currency: &str) -> SubscriptionsView {
    let totals = aggregation::subscription_totals(subscriptions);
    let next_payment = totals
        .next_payment_date
        .map(|date| date.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| "--".to_string());

    SubscriptionsView {
        currency: currency.to_string(),
        has_data: !subscriptions.is_empty(),
        metrics: vec![
            MetricCard::new("Monthly Total", format_currency(totals.monthly_total, currency), None),
            MetricCard::new("Active Services", totals.active_count.to_string(), None),
            MetricCard::new("Next Payment", next_payment, None),
        ],
        subscriptions: subscriptions
            .iter()
            .map(|s| SubscriptionRow {
                id: s.id.clone(),
                name: s.name.clone(),
                cost: format!("{}/month", format_currency(s.cost_value(), currency)),
                next_payment_date: s.next_payment_date,
                is_active: s.is_active,
            })
            .collect(),
    }
}

fn pie_slices(breakdown: &[CategoryShare], currency: &str) -> Vec<PieSlice> {
    breakdown
        .iter()
        .enumerate()
        .map(|(i, share)| PieSlice {
            name: share.category.clone(),
            value: share.amount,
            percentage: share.percentage,
            label: format!("{}: {}", share.category, format_percent(share.percentage)),
            formatted_value: format_currency(share.amount, currency),
            color: palette_color(i),
        })
        .collect()
}

fn trend_points(series: &[MonthlyBucket]) -> Vec<TrendPoint> {
    series
        .iter()
        .map(|bucket| TrendPoint {
            month: bucket.label.clone(),
            income: bucket.income,
            expenses: bucket.expenses,
            net: bucket.net,
        })
        .collect()
}

fn transaction_row(transaction: &Transaction, currency: &str) -> TransactionRow {
    TransactionRow {
        id: transaction.id.clone(),
        description: transaction.description.clone(),
        category: transaction.category.clone(),
        transaction_type: transaction.transaction_type,
        date: transaction.date,
        amount: format_signed_currency(
            transaction.amount_value(),
            transaction.is_income(),
            currency,
        ),
    }
}

fn savings_row(account: &SavingsAccount, currency: &str) -> SavingsAccountRow {
    let target = account.target_value();
    let balance = account.balance_value();
    let completion = target
        .filter(|t| *t > Decimal::ZERO)
        .map(|t| balance / t * Decimal::ONE_HUNDRED);

    SavingsAccountRow {
        id: account.id.clone(),
        name: account.name.clone(),
        balance: format_currency(balance, currency),
        interest: match account.interest_rate {
            Some(_) => format!("{}% APY", fixed_dp(account.interest_rate_value(), 2)),
            None => "No interest".to_string(),
        },
        target: target.map(|t| format_currency(t, currency)),
        progress: target.map(|t| aggregation::progress_ratio(balance, Some(t))),
        progress_label: completion.map(|c| format!("{} complete", format_percent(c))),
    }
}

fn goal_row(goal: &FinancialGoal, currency: &str) -> GoalRow {
    let progress = aggregation::progress_ratio(goal.current_value(), Some(goal.target_value()));
    GoalRow {
        id: goal.id.clone(),
        name: goal.name.clone(),
        current: format_currency(goal.current_value(), currency),
        target: format_currency(goal.target_value(), currency),
        progress,
        progress_label: format_percent(progress),
        target_date: goal.target_date,
        is_completed: goal.is_completed,
    }
}

fn pick(condition: bool, when_true: &str, when_false: &str) -> Option<String> {
    Some(if condition { when_true } else { when_false }.to_string())
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
