//! Card business logic.
//!
//! Every operation takes the store lock exactly once and finishes before
//! releasing it. None of these functions are async: there is nothing to
//! await while holding the lock.

use crate::{
    error::AppError,
    models::card::{Card, NewCard},
    store::CardStore,
};

/// Snapshot of every card, in insertion order.
pub fn list_cards(store: &CardStore) -> Result<Vec<Card>, AppError> {
    Ok(store.lock()?.all().to_vec())
}

/// Number of cards currently held.
pub fn count_cards(store: &CardStore) -> Result<usize, AppError> {
    Ok(store.lock()?.len())
}

/// Fetch a single card by id.
///
/// # Errors
///
/// - `AppError::CardNotFound` if no card has this id
pub fn get_card(store: &CardStore, id: i64) -> Result<Card, AppError> {
    store
        .lock()?
        .find(id)
        .cloned()
        .ok_or(AppError::CardNotFound)
}

/// Store a validated card under the next id.
///
/// Input is already validated by `NewCard::try_from`, so a rejected body
/// never reaches the store and never advances the id counter.
pub fn create_card(store: &CardStore, new_card: NewCard) -> Result<Card, AppError> {
    let card = store.lock()?.insert_with(|id| new_card.into_card(id));

    tracing::info!(card_id = card.id, suit = %card.suit, value = %card.value, "Card created");
    Ok(card)
}

/// Remove a card by id and return it.
///
/// # Errors
///
/// - `AppError::CardNotFound` if no card has this id
pub fn delete_card(store: &CardStore, id: i64) -> Result<Card, AppError> {
    let card = store.lock()?.remove(id).ok_or(AppError::CardNotFound)?;

    tracing::info!(card_id = card.id, "Card removed");
    Ok(card)
}
