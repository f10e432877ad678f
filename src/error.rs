use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SarError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var}: invalid socket address {value:?}")]
    Addr { var: &'static str, value: String },

    #[error("{var}: expected an integer, got {value:?}")]
    Number { var: &'static str, value: String },

    #[error("{var}: must be non-negative, got {value}")]
    Range { var: &'static str, value: i64 },

    #[error("SAR_GLOBE_SAMPLES ({samples}) exceeds SAR_GLOBE_MAX_SAMPLES ({max})")]
    SampleLimit { samples: i64, max: i64 },
}

/// Errors surfaced by the JSON handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Sar(#[from] SarError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Sar(SarError::InvalidArgument(_)) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(%status, error = %self, "rejecting request");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
