//! HTTP response DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Trade, TradeSide};

/// A recorded trade, echoed back with its assigned timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeResponse {
    /// Instrument symbol.
    pub symbol: String,
    /// Trade side.
    pub side: TradeSide,
    /// Execution price.
    pub price: Decimal,
    /// Number of shares traded.
    pub quantity: i64,
    /// Ledger-assigned timestamp (RFC 3339).
    pub timestamp: String,
}

impl TradeResponse {
    /// Build from a stored trade record.
    #[must_use]
    pub fn from_trade(trade: &Trade) -> Self {
        Self {
            symbol: trade.symbol().to_string(),
            side: trade.side(),
            price: trade.price(),
            quantity: trade.quantity(),
            timestamp: trade.timestamp().to_rfc3339(),
        }
    }
}

/// Dividend yield calculation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendYieldResponse {
    /// Instrument symbol.
    pub symbol: String,
    /// Market price used in the calculation.
    pub price: Decimal,
    /// The calculated dividend yield.
    pub dividend_yield: Decimal,
}

/// P/E ratio calculation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeRatioResponse {
    /// Instrument symbol.
    pub symbol: String,
    /// Market price used in the calculation.
    pub price: Decimal,
    /// The calculated P/E ratio (zero when the yield is zero).
    pub pe_ratio: Decimal,
}

/// Volume-weighted price over the trailing window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeWeightedPriceResponse {
    /// Instrument symbol.
    pub symbol: String,
    /// Trailing window applied, in minutes.
    pub window_minutes: u64,
    /// The calculated volume-weighted price (zero when no trades fall in
    /// the window).
    pub volume_weighted_price: Decimal,
}

/// All-share composite index over every recorded trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeIndexResponse {
    /// The calculated index (zero when no trades exist).
    pub composite_index: Decimal,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}
