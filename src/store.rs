//! In-memory card storage.
//!
//! `CardStore` owns the card collection and the id counter. It is cheap to
//! clone (an `Arc` around a mutex) and is shared with every handler through
//! axum `State`, the same way a connection pool would be.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{error::AppError, models::card::Card};

/// Cards present at startup, in id order.
const SEED_CARDS: [(&str, &str); 3] = [
    ("Hearts", "Ace"),
    ("Spades", "King"),
    ("Diamonds", "Queen"),
];

/// Collection plus the next id to allocate.
///
/// Only reachable through `CardStore::lock`, so every operation sees both
/// fields in a consistent state.
#[derive(Debug)]
pub struct Cards {
    cards: Vec<Card>,
    next_id: i64,
}

impl Cards {
    /// All cards in insertion order.
    pub fn all(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Id the next insert will receive.
    pub fn next_id(&self) -> i64 {
        self.next_id
    }

    /// Linear scan, first match wins.
    pub fn find(&self, id: i64) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Allocate an id (post-increment) and append a card built from it.
    pub fn insert_with(&mut self, build: impl FnOnce(i64) -> Card) -> Card {
        let id = self.next_id;
        self.next_id += 1;

        let card = build(id);
        self.cards.push(card.clone());
        card
    }

    /// Remove and return the card with `id`, if present.
    pub fn remove(&mut self, id: i64) -> Option<Card> {
        let index = self.cards.iter().position(|card| card.id == id)?;
        Some(self.cards.remove(index))
    }
}

/// Shared handle to the card collection.
#[derive(Debug, Clone)]
pub struct CardStore {
    inner: Arc<Mutex<Cards>>,
}

impl CardStore {
    /// Store holding the three seed cards (ids 1-3), next id 4.
    pub fn seeded() -> Self {
        let mut cards = Cards {
            cards: Vec::with_capacity(SEED_CARDS.len()),
            next_id: 1,
        };
        for (suit, value) in SEED_CARDS {
            cards.insert_with(|id| Card::new(id, suit, value));
        }

        Self::from_cards(cards)
    }

    /// Store with no cards; the first insert receives id 1.
    pub fn empty() -> Self {
        Self::from_cards(Cards {
            cards: Vec::new(),
            next_id: 1,
        })
    }

    fn from_cards(cards: Cards) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cards)),
        }
    }

    /// Acquire the store lock.
    ///
    /// The guard must not be held across an `.await`. A poisoned lock means a
    /// previous request panicked mid-operation and surfaces as
    /// `AppError::Internal`.
    pub fn lock(&self) -> Result<MutexGuard<'_, Cards>, AppError> {
        self.inner
            .lock()
            .map_err(|e| AppError::Internal(format!("card store lock poisoned: {e}")))
    }
}
