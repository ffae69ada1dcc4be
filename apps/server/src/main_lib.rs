use std::sync::Arc;

use lumeo_core::{
    analytics::{AnalyticsService, AnalyticsServiceTrait},
    goals::{FinancialGoal, GoalService},
    savings::{SavingsAccount, SavingsService},
    settings::{
        MemorySettingsRepository, SettingsRepositoryTrait, SettingsService, SettingsServiceTrait,
    },
    store::{EntityServiceTrait, MemoryRepository, QueryCache, RepositoryTrait},
    subscriptions::{Subscription, SubscriptionService},
    transactions::{Transaction, TransactionService},
};
use lumeo_storage_sqlite::{
    db, GoalRepository, SavingsAccountRepository, SettingsRepository, SubscriptionRepository,
    TransactionRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, LogFormat, StorageKind};

pub struct AppState {
    pub subscription_service: Arc<dyn EntityServiceTrait<Subscription>>,
    pub transaction_service: Arc<dyn EntityServiceTrait<Transaction>>,
    pub savings_service: Arc<dyn EntityServiceTrait<SavingsAccount>>,
    pub goal_service: Arc<dyn EntityServiceTrait<FinancialGoal>>,
    pub settings_service: Arc<dyn SettingsServiceTrait>,
    pub analytics_service: Arc<dyn AnalyticsServiceTrait>,
}

/// Installs the global subscriber. `log` records from the library crates are
/// bridged through `tracing-log`.
pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

struct Repositories {
    subscriptions: Arc<dyn RepositoryTrait<Subscription>>,
    transactions: Arc<dyn RepositoryTrait<Transaction>>,
    savings: Arc<dyn RepositoryTrait<SavingsAccount>>,
    goals: Arc<dyn RepositoryTrait<FinancialGoal>>,
    settings: Arc<dyn SettingsRepositoryTrait>,
}

fn sqlite_repositories(db_path: &str) -> anyhow::Result<Repositories> {
    let db_path = db::init(db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    Ok(Repositories {
        subscriptions: Arc::new(SubscriptionRepository::new(pool.clone(), writer.clone())),
        transactions: Arc::new(TransactionRepository::new(pool.clone(), writer.clone())),
        savings: Arc::new(SavingsAccountRepository::new(pool.clone(), writer.clone())),
        goals: Arc::new(GoalRepository::new(pool.clone(), writer.clone())),
        settings: Arc::new(SettingsRepository::new(pool, writer)),
    })
}

fn memory_repositories() -> Repositories {
    tracing::warn!("Using in-memory storage; data is lost on restart");
    Repositories {
        subscriptions: Arc::new(MemoryRepository::<Subscription>::new()),
        transactions: Arc::new(MemoryRepository::<Transaction>::new()),
        savings: Arc::new(MemoryRepository::<SavingsAccount>::new()),
        goals: Arc::new(MemoryRepository::<FinancialGoal>::new()),
        settings: Arc::new(MemorySettingsRepository::new()),
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let repos = match config.storage {
        StorageKind::Sqlite => sqlite_repositories(&config.db_path)?,
        StorageKind::Memory => memory_repositories(),
    };

    let cache = Arc::new(QueryCache::new());
    let subscription_service: Arc<dyn EntityServiceTrait<Subscription>> = Arc::new(
        SubscriptionService::new(repos.subscriptions, cache.clone()),
    );
    let transaction_service: Arc<dyn EntityServiceTrait<Transaction>> =
        Arc::new(TransactionService::new(repos.transactions, cache.clone()));
    let savings_service: Arc<dyn EntityServiceTrait<SavingsAccount>> =
        Arc::new(SavingsService::new(repos.savings, cache.clone()));
    let goal_service: Arc<dyn EntityServiceTrait<FinancialGoal>> =
        Arc::new(GoalService::new(repos.goals, cache));

    let settings_service: Arc<dyn SettingsServiceTrait> =
        Arc::new(SettingsService::new(repos.settings));
    let currency = settings_service.get_currency()?;
    tracing::info!("Preferred display currency: {}", currency);

    let analytics_service: Arc<dyn AnalyticsServiceTrait> = Arc::new(AnalyticsService::new(
        subscription_service.clone(),
        transaction_service.clone(),
        savings_service.clone(),
        goal_service.clone(),
        settings_service.clone(),
    ));

    Ok(Arc::new(AppState {
        subscription_service,
        transaction_service,
        savings_service,
        goal_service,
        settings_service,
        analytics_service,
    }))
}
