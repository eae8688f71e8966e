//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params)
//! 2. Validates input and calls into the card service
//! 3. Returns HTTP response (JSON, status code)

/// Card endpoints
pub mod cards;

/// Liveness endpoint
pub mod health;
