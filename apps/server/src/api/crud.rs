//! Generic REST routes for the four entity collections.

use std::sync::Arc;

use axum::{
    extract::{FromRequest, FromRequestParts, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use lumeo_core::goals::FinancialGoal;
use lumeo_core::savings::SavingsAccount;
use lumeo_core::store::{Entity, EntityServiceTrait};
use lumeo_core::subscriptions::Subscription;
use lumeo_core::transactions::Transaction;
use serde::Serialize;

use crate::{
    error::{ApiError, ApiResult, CoreResultExt},
    main_lib::AppState,
};

/// JSON body extractor whose rejections render as validation errors.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor with the same rejection shape as `ApiJson`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// An entity served under `/api/<resource>`.
pub trait CrudEntity: Entity {
    fn service(state: &AppState) -> Arc<dyn EntityServiceTrait<Self>>;
}

impl CrudEntity for Subscription {
    fn service(state: &AppState) -> Arc<dyn EntityServiceTrait<Self>> {
        state.subscription_service.clone()
    }
}

impl CrudEntity for Transaction {
    fn service(state: &AppState) -> Arc<dyn EntityServiceTrait<Self>> {
        state.transaction_service.clone()
    }
}

impl CrudEntity for SavingsAccount {
    fn service(state: &AppState) -> Arc<dyn EntityServiceTrait<Self>> {
        state.savings_service.clone()
    }
}

impl CrudEntity for FinancialGoal {
    fn service(state: &AppState) -> Arc<dyn EntityServiceTrait<Self>> {
        state.goal_service.clone()
    }
}

fn singular<E: Entity>() -> String {
    E::LABEL.to_lowercase()
}

async fn list_items<E: CrudEntity>(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<E>>> {
    let items = E::service(&state)
        .list()
        .or_failed_to(|| format!("fetch {}s", singular::<E>()))?;
    Ok(Json(items.as_ref().clone()))
}

async fn get_item<E: CrudEntity>(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<E>> {
    E::service(&state)
        .get(&id)
        .or_failed_to(|| format!("fetch {}", singular::<E>()))?
        .map(Json)
        .ok_or(ApiError::NotFound(E::LABEL))
}

async fn create_item<E: CrudEntity>(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<E::Payload>,
) -> ApiResult<(StatusCode, Json<E>)> {
    let created = E::service(&state)
        .create(payload)
        .await
        .or_failed_to(|| format!("create {}", singular::<E>()))?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_item<E: CrudEntity>(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<E::Payload>,
) -> ApiResult<Json<E>> {
    E::service(&state)
        .update(&id, payload)
        .await
        .or_failed_to(|| format!("update {}", singular::<E>()))?
        .map(Json)
        .ok_or(ApiError::NotFound(E::LABEL))
}

async fn delete_item<E: CrudEntity>(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MessageBody>> {
    let deleted = E::service(&state)
        .delete(&id)
        .await
        .or_failed_to(|| format!("delete {}", singular::<E>()))?;
    if !deleted {
        return Err(ApiError::NotFound(E::LABEL));
    }
    Ok(Json(MessageBody {
        message: format!("{} deleted successfully", E::LABEL),
    }))
}

pub fn router<E: CrudEntity>() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("/{}", E::RESOURCE),
            get(list_items::<E>).post(create_item::<E>),
        )
        .route(
            &format!("/{}/{{id}}", E::RESOURCE),
            get(get_item::<E>)
                .put(update_item::<E>)
                .delete(delete_item::<E>),
        )
}
