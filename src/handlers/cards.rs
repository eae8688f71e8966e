//! Card HTTP handlers.
//!
//! This module implements the card API endpoints:
//! - GET /cards - List all cards
//! - GET /cards/:id - Get card by ID
//! - POST /cards - Create new card
//! - DELETE /cards/:id - Delete card by ID

use crate::{
    error::AppError,
    models::card::{Card, CreateCardRequest, DeletedCardResponse, NewCard, parse_card_id},
    services::card_service,
    store::CardStore,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;

/// List every card.
///
/// # Response
///
/// - **Success (200 OK)**: Array of cards in insertion order
///
/// ```json
/// [
///   { "id": 1, "suit": "Hearts", "value": "Ace" },
///   { "id": 2, "suit": "Spades", "value": "King" }
/// ]
/// ```
pub async fn list_cards(State(store): State<CardStore>) -> Result<Json<Vec<Card>>, AppError> {
    Ok(Json(card_service::list_cards(&store)?))
}

/// Get a specific card by ID.
///
/// # URL Parameters
///
/// - `id` - Numeric id of the card. Taken as a raw string so that a
///   non-numeric id produces our own 400 body instead of axum's rejection.
///   A number no card can have (e.g. `1.5`) is simply not found.
///
/// # Response
///
/// - **Success (200 OK)**: The card
/// - **Error (400)**: `{"error": "Invalid ID"}`
/// - **Error (404)**: `{"error": "Card not found"}`
pub async fn get_card(
    State(store): State<CardStore>,
    Path(raw_id): Path<String>,
) -> Result<Json<Card>, AppError> {
    let id = parse_card_id(&raw_id)?.ok_or(AppError::CardNotFound)?;

    Ok(Json(card_service::get_card(&store, id)?))
}

/// Create a new card.
///
/// # Request Body
///
/// ```json
/// {
///   "suit": "Clubs",
///   "value": "Jack"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: The stored card with its new id
/// - **Error (400)**: Body missing, not JSON, or `suit`/`value` not non-empty strings
pub async fn create_card(
    State(store): State<CardStore>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Card>), AppError> {
    let request = match payload {
        Ok(Json(body)) => CreateCardRequest::from(body),
        Err(rejection) => {
            tracing::debug!(%rejection, "Unreadable card body");
            CreateCardRequest::default()
        }
    };

    let new_card = NewCard::try_from(request).inspect_err(|_| {
        tracing::debug!("Card body failed validation");
    })?;
    let card = card_service::create_card(&store, new_card)?;

    Ok((StatusCode::CREATED, Json(card)))
}

/// Delete a card by ID.
///
/// # Response (200)
///
/// ```json
/// {
///   "message": "Card with ID 1 removed.",
///   "card": { "id": 1, "suit": "Hearts", "value": "Ace" }
/// }
/// ```
///
/// - **Error (400)**: `{"error": "Invalid ID"}`
/// - **Error (404)**: `{"error": "Card not found"}`
pub async fn delete_card(
    State(store): State<CardStore>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeletedCardResponse>, AppError> {
    let id = parse_card_id(&raw_id)?.ok_or(AppError::CardNotFound)?;
    let card = card_service::delete_card(&store, id)?;

    Ok(Json(card.into()))
}
