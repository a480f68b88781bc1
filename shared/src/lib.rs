//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the farm-web frontend and the
//! Krishi Sahayak REST backend. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Authentication and user profile DTOs
//!   - **[`dto::catalog`]**: Admin-managed catalog records (crops, diseases,
//!     cost templates) and platform analytics
//!   - **[`dto::market`]**: Market price, trend, and forecast DTOs
//!
//! ## Wire Format
//!
//! The backend speaks camelCase JSON and wraps every successful body in an
//! envelope with a `data` field:
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "data": {
//!     "user": {
//!       "_id": "66f1a2",
//!       "name": "Asha",
//!       "email": "asha@example.com",
//!       "role": "user"
//!     },
//!     "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
//!   }
//! }
//! ```
//!
//! Failure bodies carry an optional human-readable `message`:
//!
//! ```text
//! HTTP/1.1 401 Unauthorized
//! Content-Type: application/json
//!
//! { "message": "Invalid email or password" }
//! ```
//!
//! Rust structs therefore use `#[serde(rename_all = "camelCase")]` and map
//! identifiers from the backend's `_id` field.

pub mod dto;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
