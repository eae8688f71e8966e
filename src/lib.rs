//! Playing Cards API
//!
//! A small REST API over an in-memory collection of playing cards. Cards can
//! be listed, fetched, created and deleted; nothing is persisted.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: `CardStore`, a mutex-guarded `Vec` shared through axum state
//! - **Format**: JSON requests/responses
//!
//! The modules are public so integration tests can drive the real router.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod store;
