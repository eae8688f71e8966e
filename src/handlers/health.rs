//! Health check endpoint for service monitoring.

use crate::{error::AppError, services::card_service, store::CardStore};
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Number of cards currently stored
    pub cards: usize,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// Takes the store lock, so a poisoned store reports 500 here too.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "cards": 3,
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
pub async fn health_check(
    State(store): State<CardStore>,
) -> Result<Json<HealthResponse>, AppError> {
    let cards = card_service::count_cards(&store)?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        cards,
        timestamp: Utc::now(),
    }))
}
