use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::core::client::error::FetchError;
use crate::domain::graph::error::GraphError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Incompatible data: {0}")]
    IncompatibleData(String),

    #[error("Backend error: {0}")]
    BackendError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Helper for mapping any unknown error into internal error
pub fn internal_error<E: ToString>(err: E) -> AppError {
    AppError::InternalServerError(err.to_string())
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        // full chain, outermost context first
        let message = format!("{:#}", err);

        if let Some(graph) = err.downcast_ref::<GraphError>() {
            return match graph {
                GraphError::InvalidRequest(_) => AppError::BadRequest(message),
                GraphError::IncompatibleSeries { .. } => AppError::IncompatibleData(message),
                GraphError::Fetch { .. } => AppError::BackendError(message),
                GraphError::UnplottableSample { .. } => AppError::BackendError(message),
            };
        }
        if err.downcast_ref::<FetchError>().is_some() {
            return AppError::BackendError(message);
        }
        internal_error(message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::IncompatibleData(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BackendError(_) => StatusCode::BAD_GATEWAY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        if status.is_server_error() {
            error!(%status, "{}", self);
        } else {
            warn!(%status, "{}", self);
        }

        let body = Json(json!({
            "message": self.to_string()
        }));

        (status, body).into_response()
    }
}
