//! REST API client
//!
//! Thin gloo-net wrappers around the backend endpoints. Every call returns
//! `Result<_, ApiError>`; nothing here retries, queues, or caches. The
//! bearer token, when a session exists, is attached from localStorage.

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use shared::dto::catalog::{AnalyticsSummary, Record};
use shared::dto::market::{
    ForecastPoint, MarketSummary, PricePoint, PriceQuote, SellingAdvice, TrendPoint,
};
use shared::{ApiEnvelope, ApiErrorBody};

use crate::state::session::Session;
use crate::utils::constants::{API_BASE, SESSION_STORAGE_KEY};
use crate::utils::storage::load_from_storage;

/// Client-side classification of a failed call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Http { status: u16, message: Option<String> },
    /// The response body was not the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message fit for showing to the user. Backend-provided text wins.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Http { status, .. } => format!("Request failed ({status})"),
            ApiError::Network(_) => "Could not reach the server".to_string(),
            ApiError::Decode(_) => "Unexpected server response".to_string(),
        }
    }
}

fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Attach the session bearer token if one is stored.
fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match load_from_storage::<Session>(SESSION_STORAGE_KEY) {
        Some(session) => builder.header("Authorization", &format!("Bearer {}", session.token)),
        None => builder,
    }
}

async fn parse_envelope<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        return Err(ApiError::Http { status, message });
    }

    let envelope: ApiEnvelope<T> = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(envelope.data)
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = with_auth(Request::get(&url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    parse_envelope(response).await
}

async fn send_json<B: Serialize, T: DeserializeOwned>(
    builder: RequestBuilder,
    body: &B,
) -> Result<T, ApiError> {
    let response = with_auth(builder)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    parse_envelope(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    send_json(Request::post(&url(path)), body).await
}

async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    send_json(Request::put(&url(path)), body).await
}

async fn delete_json(path: &str) -> Result<(), ApiError> {
    let response = with_auth(Request::delete(&url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        let status = response.status();
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        return Err(ApiError::Http { status, message });
    }
    Ok(())
}

fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

// ---------------------------------------------------------------------------
// Catalog CRUD (admin panel)
// ---------------------------------------------------------------------------

pub async fn get_crops() -> Result<Vec<Record>, ApiError> {
    get_json("/api/crops").await
}

pub async fn create_crop(record: &Record) -> Result<Record, ApiError> {
    post_json("/api/crops", record).await
}

pub async fn update_crop(id: &str, record: &Record) -> Result<Record, ApiError> {
    put_json(&format!("/api/crops/{id}"), record).await
}

pub async fn delete_crop(id: &str) -> Result<(), ApiError> {
    delete_json(&format!("/api/crops/{id}")).await
}

pub async fn get_diseases() -> Result<Vec<Record>, ApiError> {
    get_json("/api/diseases").await
}

pub async fn create_disease(record: &Record) -> Result<Record, ApiError> {
    post_json("/api/diseases", record).await
}

pub async fn update_disease(id: &str, record: &Record) -> Result<Record, ApiError> {
    put_json(&format!("/api/diseases/{id}"), record).await
}

pub async fn delete_disease(id: &str) -> Result<(), ApiError> {
    delete_json(&format!("/api/diseases/{id}")).await
}

pub async fn get_cost_templates() -> Result<Vec<Record>, ApiError> {
    get_json("/api/cost-templates").await
}

pub async fn create_cost_template(record: &Record) -> Result<Record, ApiError> {
    post_json("/api/cost-templates", record).await
}

pub async fn update_cost_template(id: &str, record: &Record) -> Result<Record, ApiError> {
    put_json(&format!("/api/cost-templates/{id}"), record).await
}

pub async fn delete_cost_template(id: &str) -> Result<(), ApiError> {
    delete_json(&format!("/api/cost-templates/{id}")).await
}

pub async fn get_user_analytics() -> Result<AnalyticsSummary, ApiError> {
    get_json("/api/admin/analytics").await
}

// ---------------------------------------------------------------------------
// Market intelligence (state-level, AgMarkNet-backed)
// ---------------------------------------------------------------------------

pub async fn get_market_prices(crop: &str, state: &str) -> Result<MarketSummary, ApiError> {
    get_json(&format!(
        "/api/market/prices?crop={}&state={}",
        encode(crop),
        encode(state)
    ))
    .await
}

pub async fn get_price_trends(
    crop: &str,
    state: &str,
    days: u32,
) -> Result<Vec<TrendPoint>, ApiError> {
    get_json(&format!(
        "/api/market/trends?crop={}&state={}&days={days}",
        encode(crop),
        encode(state)
    ))
    .await
}

pub async fn get_optimal_selling_time(crop: &str, state: &str) -> Result<SellingAdvice, ApiError> {
    get_json(&format!(
        "/api/market/optimal-selling-time?crop={}&state={}",
        encode(crop),
        encode(state)
    ))
    .await
}

// ---------------------------------------------------------------------------
// Price tracker (mandi-level)
// ---------------------------------------------------------------------------

pub async fn get_prices(crop: &str, location: &str) -> Result<Vec<PriceQuote>, ApiError> {
    get_json(&format!(
        "/api/prices?crop={}&location={}",
        encode(crop),
        encode(location)
    ))
    .await
}

pub async fn get_price_history(crop: &str, location: &str) -> Result<Vec<PricePoint>, ApiError> {
    get_json(&format!(
        "/api/prices/history?crop={}&location={}",
        encode(crop),
        encode(location)
    ))
    .await
}

pub async fn get_forecast(crop: &str, location: &str) -> Result<Vec<ForecastPoint>, ApiError> {
    get_json(&format!(
        "/api/prices/forecast?crop={}&location={}",
        encode(crop),
        encode(location)
    ))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_wins_in_user_message() {
        let err = ApiError::Http {
            status: 401,
            message: Some("Invalid email or password".to_string()),
        };
        assert_eq!(err.user_message(), "Invalid email or password");

        let bare = ApiError::Http {
            status: 500,
            message: None,
        };
        assert_eq!(bare.user_message(), "Request failed (500)");
    }

    #[test]
    fn network_errors_do_not_leak_transport_detail() {
        let err = ApiError::Network("fetch failed: dns".to_string());
        assert_eq!(err.user_message(), "Could not reach the server");
    }
}
