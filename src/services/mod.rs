//! Business logic layer.
//!
//! Services operate on the shared `CardStore` and are called by handlers.

/// List, get, create and delete operations over the card collection
pub mod card_service;
