use chrono::{NaiveDate, Utc};
use log::debug;
use std::sync::Arc;

use crate::errors::{Error, Result};
use crate::goals::FinancialGoal;
use crate::presentation::currency::find_currency;
use crate::presentation::views::{
    self, AnalyticsOverviewView, DashboardView, GoalsView, MoneyManagerView, SavingsView,
    SubscriptionsView,
};
use crate::savings::SavingsAccount;
use crate::settings::SettingsServiceTrait;
use crate::store::EntityServiceTrait;
use crate::subscriptions::Subscription;
use crate::transactions::Transaction;

/// Derived page views. `currency` overrides the stored preference.
pub trait AnalyticsServiceTrait: Send + Sync {
    fn dashboard(&self, currency: Option<&str>) -> Result<DashboardView>;
    fn overview(&self, currency: Option<&str>) -> Result<AnalyticsOverviewView>;
    fn money_manager(&self, currency: Option<&str>) -> Result<MoneyManagerView>;
    fn savings(&self, currency: Option<&str>) -> Result<SavingsView>;
    fn goals(&self, currency: Option<&str>) -> Result<GoalsView>;
    fn subscriptions(&self, currency: Option<&str>) -> Result<SubscriptionsView>;
}

pub struct AnalyticsService {
    subscription_service: Arc<dyn EntityServiceTrait<Subscription>>,
    transaction_service: Arc<dyn EntityServiceTrait<Transaction>>,
    savings_service: Arc<dyn EntityServiceTrait<SavingsAccount>>,
    goal_service: Arc<dyn EntityServiceTrait<FinancialGoal>>,
    settings_service: Arc<dyn SettingsServiceTrait>,
    today: fn() -> NaiveDate,
}

impl AnalyticsService {
    pub fn new(
        subscription_service: Arc<dyn EntityServiceTrait<Subscription>>,
        transaction_service: Arc<dyn EntityServiceTrait<Transaction>>,
        savings_service: Arc<dyn EntityServiceTrait<SavingsAccount>>,
        goal_service: Arc<dyn EntityServiceTrait<FinancialGoal>>,
        settings_service: Arc<dyn SettingsServiceTrait>,
    ) -> Self {
        Self {
            subscription_service,
            transaction_service,
            savings_service,
            goal_service,
            settings_service,
            today: || Utc::now().date_naive(),
        }
    }

    /// Replaces the clock used for "current month" totals.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    fn resolve_currency(&self, requested: Option<&str>) -> Result<String> {
        match requested {
            Some(code) => find_currency(code)
                .map(|currency| currency.code.to_string())
                .ok_or_else(|| Error::UnsupportedCurrency(code.to_string())),
            None => self.settings_service.get_currency(),
        }
    }
}

impl AnalyticsServiceTrait for AnalyticsService {
    fn dashboard(&self, currency: Option<&str>) -> Result<DashboardView> {
        let currency = self.resolve_currency(currency)?;
        debug!("Building dashboard view in {}", currency);
        let transactions = self.transaction_service.list()?;
        let accounts = self.savings_service.list()?;
        Ok(views::dashboard_view(
            &transactions,
            &accounts,
            (self.today)(),
            &currency,
        ))
    }

    fn overview(&self, currency: Option<&str>) -> Result<AnalyticsOverviewView> {
        let currency = self.resolve_currency(currency)?;
        debug!("Building analytics overview in {}", currency);
        let transactions = self.transaction_service.list()?;
        let goals = self.goal_service.list()?;
        Ok(views::overview_view(&transactions, &goals, &currency))
    }

    fn money_manager(&self, currency: Option<&str>) -> Result<MoneyManagerView> {
        let currency = self.resolve_currency(currency)?;
        let transactions = self.transaction_service.list()?;
        Ok(views::money_manager_view(
            &transactions,
            (self.today)(),
            &currency,
        ))
    }

    fn savings(&self, currency: Option<&str>) -> Result<SavingsView> {
        let currency = self.resolve_currency(currency)?;
        let accounts = self.savings_service.list()?;
        Ok(views::savings_view(&accounts, &currency))
    }

    fn goals(&self, currency: Option<&str>) -> Result<GoalsView> {
        let currency = self.resolve_currency(currency)?;
        let goals = self.goal_service.list()?;
        Ok(views::goals_view(&goals, &currency))
    }

    fn subscriptions(&self, currency: Option<&str>) -> Result<SubscriptionsView> {
        let currency = self.resolve_currency(currency)?;
        let subscriptions = self.subscription_service.list()?;
        Ok(views::subscriptions_view(&subscriptions, &currency))
    }
}
