use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cb_core::{generate_card, Card, Error};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CardRequest {
    pub url: String,
    pub idea: String,
}

/// Wraps core errors for the HTTP surface. Fetch failures are the upstream's
/// fault, bad request URLs are the caller's.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::InvalidUrl(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Http(_) | Error::Fetch(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!("request failed: {}", self.0);
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// Orchestrates one request: fetch the article, run the core pipeline,
/// return the card. No retries; fetch failures surface as error responses.
pub async fn create_card(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CardRequest>,
) -> Result<Json<Card>, ApiError> {
    info!("generating card for {}", req.url);
    let snapshot = state.fetcher.fetch(&req.url).await?;
    let card = generate_card(&snapshot, &req.url, &req.idea, Utc::now());
    Ok(Json(card))
}

pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}
