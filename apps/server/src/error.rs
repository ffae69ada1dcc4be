use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lumeo_core::errors::{Error as CoreError, FieldError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Rejected input; rendered with per-field detail.
    #[error("Invalid data")]
    Validation(Vec<FieldError>),
    /// `{0}` is the entity label, e.g. "Subscription".
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Server-side failure. Only `action` reaches the client.
    #[error("Failed to {action}")]
    Internal {
        action: String,
        #[source]
        source: CoreError,
    },
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldError>>,
}

impl ApiError {
    /// Classifies a core error raised while performing `action`.
    pub fn from_core(err: CoreError, action: impl Into<String>) -> Self {
        match err {
            CoreError::Validation(e) => ApiError::Validation(e.field_errors()),
            CoreError::UnsupportedCurrency(code) => ApiError::Validation(vec![FieldError::new(
                "currency",
                format!("Currency '{}' is not supported", code),
            )]),
            other => ApiError::Internal {
                action: action.into(),
                source: other,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, errors) = match &self {
            ApiError::Validation(fields) => (StatusCode::BAD_REQUEST, Some(fields.clone())),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, None),
            ApiError::Internal { action, source } => {
                tracing::error!("Failed to {}: {}", action, source);
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };
        let body = Json(ErrorBody {
            message: self.to_string(),
            errors,
        });
        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(vec![FieldError::new("body", rejection.body_text())])
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(vec![FieldError::new("query", rejection.body_text())])
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Attaches the attempted action to a core result.
pub trait CoreResultExt<T> {
    fn or_failed_to<F>(self, action: F) -> ApiResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> CoreResultExt<T> for lumeo_core::Result<T> {
    fn or_failed_to<F>(self, action: F) -> ApiResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| ApiError::from_core(err, action()))
    }
}
