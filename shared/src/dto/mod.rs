//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, signup, and user profile DTOs
//! - [`catalog`] - Opaque catalog records and admin analytics
//! - [`market`] - Market prices, price history, and forecasts
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase on the wire (the backend is the original
//!   Node/Express service), snake_case in Rust
//! - **Identifiers**: arrive as `_id`
//! - **Enums**: serialize to lowercase strings
//! - **Envelope**: success bodies wrap their payload in [`ApiEnvelope`],
//!   failures carry an [`ApiErrorBody`]

pub mod auth;
pub mod catalog;
pub mod market;

pub use auth::*;
pub use catalog::*;
pub use market::*;

use serde::{Deserialize, Serialize};

/// Envelope around every successful response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

/// Body of a failed response. The message, when present, is suitable for
/// showing to the user verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
