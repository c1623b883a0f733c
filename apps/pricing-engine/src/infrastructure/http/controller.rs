//! Axum-based REST controller that delegates to the pricing engine.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use rust_decimal::Decimal;

use crate::application::ports::Clock;
use crate::application::pricing::PricingEngine;
use crate::domain::{DomainError, TradeSide};

use super::request::{PriceQuery, RecordTradeRequest};
use super::response::{
    ApiErrorResponse, CompositeIndexResponse, DividendYieldResponse, HealthResponse,
    PeRatioResponse, TradeResponse, VolumeWeightedPriceResponse,
};

/// Application state shared across handlers.
pub struct AppState<C: Clock> {
    /// The pricing engine.
    pub engine: Arc<PricingEngine<C>>,
    /// Application version.
    pub version: String,
}

impl<C: Clock> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<C: Clock + 'static>(state: AppState<C>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/trades", post(record_trade))
        .route(
            "/api/v1/stocks/{symbol}/dividend-yield",
            get(dividend_yield),
        )
        .route("/api/v1/stocks/{symbol}/pe-ratio", get(pe_ratio))
        .route(
            "/api/v1/stocks/{symbol}/volume-weighted-price",
            get(volume_weighted_price),
        )
        .route("/api/v1/index", get(composite_index))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check<C: Clock>(State(state): State<AppState<C>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Record a trade execution.
async fn record_trade<C: Clock>(
    State(state): State<AppState<C>>,
    Json(request): Json<RecordTradeRequest>,
) -> Result<Json<TradeResponse>, ApiError> {
    tracing::info!(symbol = %request.symbol, side = %request.side, "Received trade");

    let side = TradeSide::from_str(&request.side)?;
    let price = parse_price(&request.price)?;
    let trade = state
        .engine
        .record_trade(&request.symbol, side, price, request.quantity)?;

    Ok(Json(TradeResponse::from_trade(&trade)))
}

/// Calculate the dividend yield for a stock at a market price.
async fn dividend_yield<C: Clock>(
    State(state): State<AppState<C>>,
    Path(symbol): Path<String>,
    Query(query): Query<PriceQuery>,
) -> Result<Json<DividendYieldResponse>, ApiError> {
    let price = required_price(query.price.as_deref())?;
    let dividend_yield = state.engine.dividend_yield(&symbol, price)?;

    Ok(Json(DividendYieldResponse {
        symbol,
        price,
        dividend_yield,
    }))
}

/// Calculate the P/E ratio for a stock at a market price.
async fn pe_ratio<C: Clock>(
    State(state): State<AppState<C>>,
    Path(symbol): Path<String>,
    Query(query): Query<PriceQuery>,
) -> Result<Json<PeRatioResponse>, ApiError> {
    let price = required_price(query.price.as_deref())?;
    let pe_ratio = state.engine.pe_ratio(&symbol, price)?;

    Ok(Json(PeRatioResponse {
        symbol,
        price,
        pe_ratio,
    }))
}

/// Calculate the volume-weighted price over the trailing window.
async fn volume_weighted_price<C: Clock>(
    State(state): State<AppState<C>>,
    Path(symbol): Path<String>,
) -> Result<Json<VolumeWeightedPriceResponse>, ApiError> {
    let volume_weighted_price = state.engine.volume_weighted_price(&symbol)?;

    Ok(Json(VolumeWeightedPriceResponse {
        symbol,
        window_minutes: state.engine.vwap_window_minutes(),
        volume_weighted_price,
    }))
}

/// Calculate the all-share composite index.
async fn composite_index<C: Clock>(
    State(state): State<AppState<C>>,
) -> Json<CompositeIndexResponse> {
    Json(CompositeIndexResponse {
        composite_index: state.engine.composite_index(),
    })
}

/// Parse a decimal price string into a `Decimal`.
fn parse_price(raw: &str) -> Result<Decimal, ApiError> {
    Decimal::from_str(raw).map_err(|e| {
        ApiError::from(DomainError::invalid_data(
            "price",
            format!("not a valid decimal: {e}"),
        ))
    })
}

/// Extract the required `price` query parameter.
fn required_price(raw: Option<&str>) -> Result<Decimal, ApiError> {
    let raw = raw.ok_or_else(|| {
        ApiError::from(DomainError::invalid_data(
            "price",
            "price query parameter is required",
        ))
    })?;
    parse_price(raw)
}

/// API error wrapper mapping domain errors onto HTTP status codes.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            DomainError::InvalidData { .. } => StatusCode::BAD_REQUEST,
            DomainError::NoData { .. } => StatusCode::NOT_FOUND,
        };
        tracing::warn!(code = self.0.code(), %status, "Request failed: {}", self.0);

        let body = ApiErrorResponse {
            code: self.0.code().to_string(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
