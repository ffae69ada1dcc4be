use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use lumeo_core::presentation::{Currency, CURRENCIES};
use lumeo_core::settings::{Settings, SettingsUpdate};

use super::crud::ApiJson;
use crate::{
    error::{ApiResult, CoreResultExt},
    main_lib::AppState,
};

async fn get_settings(State(state): State<Arc<AppState>>) -> ApiResult<Json<Settings>> {
    let settings = state
        .settings_service
        .get_settings()
        .or_failed_to(|| "fetch settings".to_string())?;
    Ok(Json(settings))
}

async fn update_settings(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<SettingsUpdate>,
) -> ApiResult<Json<Settings>> {
    let settings = state
        .settings_service
        .update_settings(&payload)
        .await
        .or_failed_to(|| "update settings".to_string())?;
    Ok(Json(settings))
}

async fn list_currencies() -> Json<Vec<Currency>> {
    Json(CURRENCIES.to_vec())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/settings", get(get_settings).put(update_settings))
        .route("/currencies", get(list_currencies))
}
