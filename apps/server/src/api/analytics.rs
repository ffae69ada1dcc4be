use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use lumeo_core::presentation::views::{
    AnalyticsOverviewView, DashboardView, GoalsView, MoneyManagerView, SavingsView,
    SubscriptionsView,
};
use serde::Deserialize;

use super::crud::ApiQuery;
use crate::{
    error::{ApiResult, CoreResultExt},
    main_lib::AppState,
};

/// `?currency=EUR` renders in that currency instead of the stored preference.
#[derive(Debug, Default, Deserialize)]
pub struct CurrencyQuery {
    pub currency: Option<String>,
}

async fn dashboard(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<CurrencyQuery>,
) -> ApiResult<Json<DashboardView>> {
    let view = state
        .analytics_service
        .dashboard(query.currency.as_deref())
        .or_failed_to(|| "build dashboard".to_string())?;
    Ok(Json(view))
}

async fn overview(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<CurrencyQuery>,
) -> ApiResult<Json<AnalyticsOverviewView>> {
    let view = state
        .analytics_service
        .overview(query.currency.as_deref())
        .or_failed_to(|| "build analytics overview".to_string())?;
    Ok(Json(view))
}

async fn money_manager(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<CurrencyQuery>,
) -> ApiResult<Json<MoneyManagerView>> {
    let view = state
        .analytics_service
        .money_manager(query.currency.as_deref())
        .or_failed_to(|| "build money manager".to_string())?;
    Ok(Json(view))
}

async fn savings(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<CurrencyQuery>,
) -> ApiResult<Json<SavingsView>> {
    let view = state
        .analytics_service
        .savings(query.currency.as_deref())
        .or_failed_to(|| "build savings summary".to_string())?;
    Ok(Json(view))
}

async fn goals(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<CurrencyQuery>,
) -> ApiResult<Json<GoalsView>> {
    let view = state
        .analytics_service
        .goals(query.currency.as_deref())
        .or_failed_to(|| "build goals summary".to_string())?;
    Ok(Json(view))
}

async fn subscriptions(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<CurrencyQuery>,
) -> ApiResult<Json<SubscriptionsView>> {
    let view = state
        .analytics_service
        .subscriptions(query.currency.as_deref())
        .or_failed_to(|| "build subscriptions summary".to_string())?;
    Ok(Json(view))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analytics/dashboard", get(dashboard))
        .route("/analytics/overview", get(overview))
        .route("/analytics/money-manager", get(money_manager))
        .route("/analytics/savings", get(savings))
        .route("/analytics/goals", get(goals))
        .route("/analytics/subscriptions", get(subscriptions))
}
