//! Data models for the API.
//!
//! This module contains the stored card record and the request/response
//! types that surround it.

/// Card record and request/response types
pub mod card;
