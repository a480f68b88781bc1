//! Authentication endpoints.
//!
//! Failures surface the backend's message through [`ApiError::user_message`]
//! as the form-level banner; nothing is retried.

use shared::dto::auth::{AuthData, LoginRequest, SignupRequest};

use super::api::{post_json, ApiError};

pub async fn login(credentials: &LoginRequest) -> Result<AuthData, ApiError> {
    post_json("/api/auth/login", credentials).await
}

pub async fn signup(profile: &SignupRequest) -> Result<AuthData, ApiError> {
    post_json("/api/auth/signup", profile).await
}
