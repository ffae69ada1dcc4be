//! HTTP surface under `/api`.

mod analytics;
mod crud;
mod health;
mod settings;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use lumeo_core::goals::FinancialGoal;
use lumeo_core::savings::SavingsAccount;
use lumeo_core::subscriptions::Subscription;
use lumeo_core::transactions::Transaction;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, main_lib::AppState};

pub use crud::{ApiJson, ApiQuery, CrudEntity, MessageBody};

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let origin = if config.cors_allow.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| o.parse::<HeaderValue>().ok())
            .collect::<Vec<_>>();
        AllowOrigin::list(origins)
    };
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .merge(health::router())
        .merge(crud::router::<Subscription>())
        .merge(crud::router::<Transaction>())
        .merge(crud::router::<SavingsAccount>())
        .merge(crud::router::<FinancialGoal>())
        .merge(analytics::router())
        .merge(settings::router());

    Router::new()
        .nest("/api", api)
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
