//! HTTP request handlers

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::engine::{Prediction, Predictor};

/// Shared application state
pub struct AppState {
    pub predictor: Arc<Predictor>,
}

impl AppState {
    pub fn new(predictor: Arc<Predictor>) -> Self {
        Self { predictor }
    }
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Sentiment prediction endpoint
///
/// The body is parsed by hand so every malformed payload gets the same 400
/// response, whatever its content type.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<PredictResponse>, ApiError> {
    let comments = parse_comments(&body)?;
    tracing::debug!(count = comments.len(), "Classifying comments");

    let predictor = Arc::clone(&state.predictor);
    let predictions = tokio::task::spawn_blocking(move || predictor.predict(&comments))
        .await
        .map_err(|e| ApiError::Processing(e.to_string()))?
        .map_err(|e| ApiError::Processing(format!("{:#}", e)))?;

    Ok(Json(PredictResponse { predictions }))
}

/// Extract a non-empty list of strings from `{"comments": [...]}`
fn parse_comments(body: &[u8]) -> Result<Vec<String>, ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::InvalidInput)?;

    let items = match value.get("comments") {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => return Err(ApiError::InvalidInput),
    };

    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()
        .ok_or(ApiError::InvalidInput)
}

/// Request-level failures
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, empty or malformed `comments`
    #[error("Invalid input. Provide a list of comments.")]
    InvalidInput,

    /// Preprocessing or inference failed
    #[error("An error occurred: {0}")]
    Processing(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput => StatusCode::BAD_REQUEST,
            ApiError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

// Request/Response types

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predictions: Vec<Prediction>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
